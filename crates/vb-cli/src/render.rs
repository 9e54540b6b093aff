//! Plain-text rendering for traces, decisions and wizard state.

use std::fmt::Write as _;

use vb_core::NodeKind;
use vb_tools::{
    Decision, DisplayMode, Highlight, Prompt, TraceNode, WizardMap, WizardNodeId, WizardSession,
};

/// Indented trace, one visited node per line.
pub fn trace(root: &TraceNode) -> String {
    let mut out = String::new();
    trace_into(root, 0, &mut out);
    out
}

fn trace_into(node: &TraceNode, depth: usize, out: &mut String) {
    let _ = write!(
        out,
        "{:indent$}[{}] {} {}",
        "",
        node.status,
        node.node_kind,
        node.node_name,
        indent = depth * 2
    );
    if let Some(kind) = node.decorator {
        let _ = write!(out, " ({})", kind.as_str());
    }
    if let Some(goal) = node.goal {
        let _ = write!(out, " -> {goal}");
    }
    out.push('\n');
    for child in &node.children {
        trace_into(child, depth + 1, out);
    }
}

pub fn decision(decision: Option<&Decision>) -> String {
    let Some(d) = decision else {
        return "no decision\n".to_string();
    };
    let mut out = format!("decision: {}\n", d.action);
    if let Some(goal) = d.goal {
        let _ = writeln!(out, "goal:     {goal}");
    }
    if let Some(note) = &d.note {
        let _ = writeln!(out, "why:      {note}");
    }
    let _ = writeln!(out, "route:    {}", d.ancestors.join(" > "));
    let _ = writeln!(out, "checked:  {}", d.path.join(", "));
    out
}

fn mark(highlight: Highlight) -> &'static str {
    match highlight {
        Highlight::Current => ">",
        Highlight::Visited => "*",
        Highlight::Unvisited => " ",
        Highlight::Dimmed => ".",
    }
}

/// Whole map with per-node highlight marks. Dimmed nodes print without their name.
pub fn wizard_map(map: &WizardMap, session: &WizardSession, mode: DisplayMode) -> String {
    let mut out = String::new();
    for node in map.iter() {
        let highlight = session.highlight(node.id, mode);
        let indent = map.depth_of(node.id) * 2;
        let label = match highlight {
            Highlight::Dimmed => "...",
            _ => node.name.as_str(),
        };
        let _ = writeln!(
            out,
            "{} {:indent$}{} {}",
            mark(highlight),
            "",
            node.kind,
            label,
            indent = indent
        );
    }
    out
}

fn name(map: &WizardMap, id: WizardNodeId) -> &str {
    map.get(id).map(|n| n.name.as_str()).unwrap_or("?")
}

fn details(map: &WizardMap, id: WizardNodeId, out: &mut String) {
    let Some(node) = map.get(id) else { return };
    if let Some(description) = &node.description {
        let _ = writeln!(out, "  {description}");
    }
    if let Some(note) = &node.note {
        let _ = writeln!(out, "  note: {note}");
    }
}

/// What the user is being asked, with the accepted inputs.
pub fn prompt(map: &WizardMap, session: &WizardSession) -> String {
    let mut out = String::new();
    match session.prompt(map) {
        Prompt::YesNo { node } => {
            let _ = writeln!(out, "{}?", name(map, node));
            details(map, node, &mut out);
            out.push_str("[y]es / [n]o / [b]ack / [r]eset / [q]uit\n");
        }
        Prompt::Branch { node, options } => {
            let _ = writeln!(out, "{}: which branch?", name(map, node));
            details(map, node, &mut out);
            for (i, option) in options.iter().enumerate() {
                let kind = map.get(*option).map(|n| n.kind).unwrap_or(NodeKind::Action);
                let _ = writeln!(out, "  {}) {} {}", i + 1, kind, name(map, *option));
            }
            out.push_str("[1-9] branch / [b]ack / [r]eset / [q]uit\n");
        }
        Prompt::Decision { node } => {
            let _ = writeln!(out, "decision: {}", name(map, node));
            details(map, node, &mut out);
            out.push_str("[b]ack / [r]eset / [q]uit\n");
        }
        Prompt::Leaf { node } => {
            let _ = writeln!(out, "reached {} with no decision", name(map, node));
            out.push_str("[b]ack / [r]eset / [q]uit\n");
        }
        Prompt::Finished { status } => {
            let _ = writeln!(out, "walk finished: tree returned {status}");
            out.push_str("[b]ack / [r]eset / [q]uit\n");
        }
    }
    out
}
