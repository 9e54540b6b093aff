//! Tooling over behavior-tree execution traces.
//!
//! The engine (`vb-bt`) produces a [`TraceNode`] per evaluation. This crate holds that model and
//! its two consumers: [`extract_decision`] (automatic) and the wizard navigator (interactive).
//! Nothing here evaluates trees; all inputs are recorded traces.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod decision;
pub mod trace;
pub mod wizard;

pub use decision::{extract_decision, Decision};
pub use trace::TraceNode;
pub use wizard::{
    Answer, DisplayMode, Highlight, IdGen, Prompt, WizardError, WizardMap, WizardNode,
    WizardNodeId, WizardSession,
};
