//! vbcoach - inspect volleyball player decisions.
//!
//! Single binary that provides:
//! - `vbcoach roles` - list the built-in role trees
//! - `vbcoach decide` - evaluate a role tree against a context file
//! - `vbcoach trace` - print everything the evaluation visited
//! - `vbcoach preview` - show a tree's shape without real input
//! - `vbcoach wizard` - step through a trace by hand

mod config;
mod input;
mod render;
mod wizard;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use vb_bt::tree_for_role;
use vb_core::Role;
use vb_tools::{TraceNode, WizardMap};

use crate::config::{CoachConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "vbcoach")]
#[command(about = "Inspect and step through volleyball player decisions", version)]
struct Cli {
    /// Project root directory
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List roles with a built-in tree
    Roles,

    /// Evaluate a role tree and print the decision
    Decide {
        /// Player role (defaults to the configured role)
        #[arg(long)]
        role: Option<Role>,

        /// Context file (.json, .yaml or .yml)
        #[arg(long)]
        context: PathBuf,

        /// Print JSON regardless of the configured output
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a role tree and print its trace
    Trace {
        #[arg(long)]
        role: Option<Role>,

        #[arg(long)]
        context: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Print a tree's shape from a synthetic evaluation
    Preview {
        #[arg(long)]
        role: Option<Role>,
    },

    /// Step through a trace interactively on stdin
    Wizard {
        #[arg(long)]
        role: Option<Role>,

        /// Walk this context's trace instead of the preview
        #[arg(long)]
        context: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    // Find project root
    let project_root = match cli.project {
        Some(p) => p,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let config = CoachConfig::load_from_project(&project_root)?;

    match cli.command {
        Commands::Roles => list_roles(),
        Commands::Decide {
            role,
            context,
            json,
        } => decide(role.unwrap_or(config.default_role), &context, json, &config),
        Commands::Trace {
            role,
            context,
            json,
        } => trace(role.unwrap_or(config.default_role), &context, json, &config),
        Commands::Preview { role } => preview(role.unwrap_or(config.default_role)),
        Commands::Wizard { role, context } => wizard(
            role.unwrap_or(config.default_role),
            context.as_deref(),
            &config,
        ),
    }
}

fn list_roles() -> Result<()> {
    for role in Role::ALL {
        let tree = tree_for_role(role);
        println!(
            "{:<16} {:<18} {} nodes",
            role.as_str(),
            tree.root().name(),
            tree.root().declared_count()
        );
    }
    Ok(())
}

fn evaluate(role: Role, context: &Path) -> Result<TraceNode> {
    let mut ctx = input::load_context(context)?;
    let tree = tree_for_role(role);
    let eval = tree
        .evaluate(&mut ctx)
        .with_context(|| format!("Rejected context {}", context.display()))?;
    tracing::info!(
        role = %role,
        status = %eval.status,
        goal = ctx.self_player.requested_goal.map(|g| g.label()),
        "evaluated"
    );
    Ok(eval.trace)
}

fn wants_json(flag: bool, config: &CoachConfig) -> bool {
    flag || config.output == OutputFormat::Json
}

fn decide(role: Role, context: &Path, json: bool, config: &CoachConfig) -> Result<()> {
    let trace = evaluate(role, context)?;
    let decision = vb_tools::extract_decision(&trace);

    if wants_json(json, config) {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        print!("{}", render::decision(decision.as_ref()));
    }
    Ok(())
}

fn trace(role: Role, context: &Path, json: bool, config: &CoachConfig) -> Result<()> {
    let trace = evaluate(role, context)?;

    if wants_json(json, config) {
        println!("{}", serde_json::to_string_pretty(&trace)?);
    } else {
        print!("{}", render::trace(&trace));
    }
    Ok(())
}

fn preview(role: Role) -> Result<()> {
    let tree = tree_for_role(role);
    println!("{} ({} declared nodes)", tree.name(), tree.root().declared_count());
    println!("Statuses below come from a synthetic context.");
    println!();
    print!("{}", render::trace(&tree.preview()));
    Ok(())
}

fn wizard(role: Role, context: Option<&Path>, config: &CoachConfig) -> Result<()> {
    let trace = match context {
        Some(path) => evaluate(role, path)?,
        None => tree_for_role(role).preview(),
    };
    let map = WizardMap::from_trace(&trace);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let session = wizard::run(&map, config.display_mode, stdin.lock(), &mut stdout)?;
    stdout.flush()?;

    tracing::info!(
        answers = session.answers().len(),
        finished = session.finished().map(|s| s.as_str()),
        "wizard closed"
    );
    Ok(())
}
