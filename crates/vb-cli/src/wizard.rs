//! Interactive wizard loop over a line-based reader.

use std::io::{BufRead, Write};

use anyhow::Result;
use vb_tools::{DisplayMode, WizardMap, WizardSession};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Yes,
    No,
    /// Zero-based branch index (the user types it one-based).
    Branch(usize),
    Back,
    Reset,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(Command::Yes),
        "n" | "no" => Some(Command::No),
        "b" | "back" => Some(Command::Back),
        "r" | "reset" => Some(Command::Reset),
        "q" | "quit" => Some(Command::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(Command::Branch),
    }
}

fn show<W: Write>(
    map: &WizardMap,
    session: &WizardSession,
    mode: DisplayMode,
    out: &mut W,
) -> Result<()> {
    writeln!(out)?;
    write!(out, "{}", render::wizard_map(map, session, mode))?;
    writeln!(out)?;
    write!(out, "{}", render::prompt(map, session))?;
    out.flush()?;
    Ok(())
}

/// Run the wizard until `q` or end of input. Returns the last session.
pub fn run<R: BufRead, W: Write>(
    map: &WizardMap,
    mode: DisplayMode,
    input: R,
    out: &mut W,
) -> Result<WizardSession> {
    let mut session = WizardSession::start(map);
    show(map, &session, mode, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_command(&line) else {
            writeln!(
                out,
                "unrecognised input `{}`: expected y, n, a branch number, b, r or q",
                line.trim()
            )?;
            continue;
        };

        let next = match command {
            Command::Quit => break,
            Command::Yes => session.answer(map, true),
            Command::No => session.answer(map, false),
            Command::Branch(index) => session.select_branch(map, index),
            Command::Back => session.go_back(map),
            Command::Reset => Ok(session.reset(map)),
        };

        match next {
            Ok(s) => {
                session = s;
                show(map, &session, mode, out)?;
            }
            Err(err) => {
                tracing::debug!(?command, error = %err, "wizard input rejected");
                writeln!(out, "{err}")?;
            }
        }
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vb_bt::Node;
    use vb_core::{Context, Goal, Role};
    use vb_tools::Prompt;

    fn fallback_map() -> WizardMap {
        let tree = Node::selector(
            "Choose",
            vec![
                Node::sequence(
                    "Fallback",
                    vec![
                        Node::condition("CondFallback", |_| false),
                        Node::action("ActionFallback", |_| Some(Goal::Hold)),
                    ],
                ),
                Node::sequence(
                    "Main",
                    vec![
                        Node::condition("CondMain", |_| true),
                        Node::action("ActionMain", |_| Some(Goal::Serve)),
                    ],
                ),
            ],
        );
        let eval = tree.evaluate(&mut Context::preview(Role::Setter));
        WizardMap::from_trace(&eval.trace)
    }

    fn drive(map: &WizardMap, script: &str) -> (WizardSession, String) {
        let mut out = Vec::new();
        let session = run(map, DisplayMode::Full, script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(" Y "), Some(Command::Yes));
        assert_eq!(parse_command("no"), Some(Command::No));
        assert_eq!(parse_command("2"), Some(Command::Branch(1)));
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("maybe"), None);
    }

    #[test]
    fn walks_to_the_main_action() {
        let map = fallback_map();
        let (session, out) = drive(&map, "1\nn\ny\n");

        assert_eq!(session.prompt(&map), Prompt::Decision { node: 5 });
        assert!(out.contains("decision: ActionMain"));
    }

    #[test]
    fn misuse_is_reported_and_the_session_survives() {
        let map = fallback_map();
        let (session, out) = drive(&map, "y\n7\nwhat\n1\n");

        assert!(out.contains("unrecognised input `what`"));
        assert_eq!(session.prompt(&map), Prompt::YesNo { node: 2 });
    }

    #[test]
    fn back_and_reset_rewind() {
        let map = fallback_map();
        let (session, _) = drive(&map, "1\nn\nb\n");
        assert_eq!(session.current_node_id(), 2);

        let (session, _) = drive(&map, "1\nn\nr\n");
        assert_eq!(session, WizardSession::start(&map));
    }

    #[test]
    fn quit_stops_reading() {
        let map = fallback_map();
        let (session, _) = drive(&map, "q\n1\n");
        assert_eq!(session, WizardSession::start(&map));
    }
}
