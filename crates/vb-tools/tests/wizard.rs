use vb_core::{DecoratorKind, NodeKind, Status};
use vb_tools::{
    Answer, DisplayMode, Highlight, IdGen, Prompt, TraceNode, WizardError, WizardMap,
    WizardSession,
};

fn cond(name: &str, status: Status) -> TraceNode {
    TraceNode::new(NodeKind::Condition, name, status)
}

fn action(name: &str, status: Status) -> TraceNode {
    TraceNode::new(NodeKind::Action, name, status)
}

fn name_of(map: &WizardMap, id: usize) -> &str {
    &map.get(id).expect("node").name
}

/// Selector[Seq[CondFallback, ActionFallback], Seq[CondMain, ActionMain]] as evaluated:
/// ActionFallback never ran, so it is not recorded.
fn fallback_trace() -> TraceNode {
    TraceNode::new(NodeKind::Selector, "Choose", Status::Success).with_children(vec![
        TraceNode::new(NodeKind::Sequence, "Fallback", Status::Failure)
            .with_child(cond("CondFallback", Status::Failure)),
        TraceNode::new(NodeKind::Sequence, "Main", Status::Success).with_children(vec![
            cond("CondMain", Status::Success),
            action("ActionMain", Status::Success),
        ]),
    ])
}

#[test]
fn flattening_numbers_depth_first_and_links_parents() {
    let map = WizardMap::from_trace(&fallback_trace());
    assert_eq!(map.len(), 6);
    assert_eq!(map.root(), 0);

    let names: Vec<_> = map.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Choose", "Fallback", "CondFallback", "Main", "CondMain", "ActionMain"]
    );

    let root = map.get(0).expect("root");
    assert_eq!(root.parent_id, None);
    assert_eq!(root.child_ids, vec![1, 3]);
    assert_eq!(map.get(2).and_then(|n| n.parent_id), Some(1));
    assert_eq!(map.get(5).map(|n| n.recorded), Some(Status::Success));
    assert_eq!(map.depth_of(5), 2);
}

#[test]
fn flattening_is_pure_and_ids_can_be_offset() {
    let trace = fallback_trace();
    assert_eq!(WizardMap::from_trace(&trace), WizardMap::from_trace(&trace));

    let mut ids = IdGen::starting_at(100);
    let map = WizardMap::from_trace_with(&trace, &mut ids);
    assert_eq!(map.root(), 100);
    assert_eq!(map.get(105).map(|n| n.name.as_str()), Some("ActionMain"));
    assert_eq!(ids.next_id(), 106);
}

#[test]
fn answering_no_moves_to_sibling_condition_then_yes_lands_on_action() {
    let map = WizardMap::from_trace(&fallback_trace());
    let session = WizardSession::start(&map);

    // Two recorded branches: the selector itself is the first decision point.
    assert_eq!(
        session.prompt(&map),
        Prompt::Branch {
            node: 0,
            options: vec![1, 3]
        }
    );

    let session = session.select_branch(&map, 0).expect("branch");
    assert_eq!(session.prompt(&map), Prompt::YesNo { node: 2 });

    let session = session.answer(&map, false).expect("no");
    assert_eq!(name_of(&map, session.current_node_id()), "CondMain");

    let session = session.answer(&map, true).expect("yes");
    assert_eq!(name_of(&map, session.current_node_id()), "ActionMain");
    assert_eq!(session.prompt(&map), Prompt::Decision { node: 5 });
    assert_eq!(session.visited_path(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(
        session.answers(),
        &[(0, Answer::Branch(0)), (2, Answer::No), (4, Answer::Yes)]
    );
}

#[test]
fn condition_with_recorded_child_walks_into_it() {
    // Hand-built: Selector[Cond(fail) -> ActionFallback, Cond(pass) -> ActionMain]
    let trace = TraceNode::new(NodeKind::Selector, "Choose", Status::Success).with_children(vec![
        cond("CondFallback", Status::Failure).with_child(action("ActionFallback", Status::Failure)),
        cond("CondMain", Status::Success).with_child(action("ActionMain", Status::Success)),
    ]);
    let map = WizardMap::from_trace(&trace);

    let s = WizardSession::start(&map).select_branch(&map, 0).expect("branch");
    assert_eq!(s.prompt(&map), Prompt::YesNo { node: 1 });

    let s = s.answer(&map, false).expect("no");
    assert_eq!(name_of(&map, s.current_node_id()), "CondMain");

    let s = s.answer(&map, true).expect("yes");
    assert_eq!(s.prompt(&map), Prompt::Decision { node: 4 });
}

#[test]
fn auto_advance_runs_through_single_child_chain_to_selector() {
    let trace = TraceNode::new(NodeKind::Sequence, "Root", Status::Success).with_child(
        TraceNode::new(NodeKind::Decorator, "Always", Status::Success)
            .with_decorator(DecoratorKind::ForceSuccess)
            .with_child(
                TraceNode::new(NodeKind::Selector, "OnlyOne", Status::Success).with_child(
                    TraceNode::new(NodeKind::Selector, "Pick", Status::Success).with_children(
                        vec![
                            action("Left", Status::Failure),
                            action("Right", Status::Success),
                        ],
                    ),
                ),
            ),
    );
    let map = WizardMap::from_trace(&trace);
    let session = WizardSession::start(&map);

    assert_eq!(name_of(&map, session.current_node_id()), "Pick");
    assert_eq!(session.visited_path(), &[0, 1, 2, 3]);
    assert!(session.answers().is_empty());
}

#[test]
fn sequence_success_moves_to_next_sibling_and_failure_bubbles_to_selector() {
    // Selector[ Sequence[A, B, Act1], Act2 ]
    let trace = TraceNode::new(NodeKind::Selector, "Root", Status::Success).with_children(vec![
        TraceNode::new(NodeKind::Sequence, "Seq", Status::Failure).with_children(vec![
            cond("A", Status::Success),
            cond("B", Status::Failure),
        ]),
        action("Act2", Status::Success),
    ]);
    let map = WizardMap::from_trace(&trace);

    let s = WizardSession::start(&map);
    let s = s.select_branch(&map, 0).expect("branch");
    assert_eq!(name_of(&map, s.current_node_id()), "A");

    let s = s.answer(&map, true).expect("yes");
    assert_eq!(name_of(&map, s.current_node_id()), "B");

    // B fails -> Seq fails -> Root tries Act2.
    let s = s.answer(&map, false).expect("no");
    assert_eq!(name_of(&map, s.current_node_id()), "Act2");
    assert_eq!(s.prompt(&map), Prompt::Decision { node: 4 });
}

#[test]
fn exhausting_every_branch_finishes_with_failure() {
    let trace = TraceNode::new(NodeKind::Selector, "Root", Status::Failure)
        .with_children(vec![cond("A", Status::Failure), cond("B", Status::Failure)]);
    let map = WizardMap::from_trace(&trace);

    let s = WizardSession::start(&map).select_branch(&map, 0).expect("branch");
    let s = s.answer(&map, false).expect("no A");
    let s = s.answer(&map, false).expect("no B");

    assert_eq!(s.finished(), Some(Status::Failure));
    assert_eq!(s.prompt(&map), Prompt::Finished { status: Status::Failure });
    assert_eq!(s.answer(&map, true), Err(WizardError::Finished));
}

#[test]
fn inverting_decorator_flips_propagated_outcome() {
    // Selector[ Invert(Cond), Act ]: "yes" on Cond fails the first branch.
    let trace = TraceNode::new(NodeKind::Selector, "Root", Status::Success).with_children(vec![
        TraceNode::new(NodeKind::Decorator, "Not", Status::Failure)
            .with_decorator(DecoratorKind::Invert)
            .with_child(cond("Cond", Status::Success)),
        action("Act", Status::Success),
    ]);
    let map = WizardMap::from_trace(&trace);

    let s = WizardSession::start(&map).select_branch(&map, 0).expect("branch");
    assert_eq!(name_of(&map, s.current_node_id()), "Cond");

    let yes = s.answer(&map, true).expect("yes");
    assert_eq!(name_of(&map, yes.current_node_id()), "Act");

    let no = s.answer(&map, false).expect("no");
    assert_eq!(no.finished(), Some(Status::Success));
}

#[test]
fn go_back_replays_remaining_answers() {
    let map = WizardMap::from_trace(&fallback_trace());
    let start = WizardSession::start(&map);
    let s1 = start.select_branch(&map, 0).expect("branch");
    let s2 = s1.answer(&map, false).expect("no");
    let s3 = s2.answer(&map, true).expect("yes");

    assert_eq!(s3.go_back(&map).expect("back"), s2);
    assert_eq!(s2.go_back(&map).expect("back"), s1);
    assert_eq!(s1.go_back(&map).expect("back"), start);
    // Nothing left to undo: stays at the first decision point.
    assert_eq!(start.go_back(&map).expect("back"), start);
}

#[test]
fn replay_rejects_history_from_another_trace() {
    let map = WizardMap::from_trace(&fallback_trace());
    assert_eq!(
        WizardSession::replay(&map, &[(3, Answer::Yes)]),
        Err(WizardError::StaleAnswer(3))
    );
}

#[test]
fn misuse_is_reported() {
    let map = WizardMap::from_trace(&fallback_trace());
    let s = WizardSession::start(&map);

    assert_eq!(s.answer(&map, true), Err(WizardError::NotACondition(0)));
    assert_eq!(
        s.select_branch(&map, 2),
        Err(WizardError::BranchOutOfRange { index: 2, len: 2 })
    );

    let at_cond = s.select_branch(&map, 1).expect("branch");
    assert_eq!(
        at_cond.select_branch(&map, 0),
        Err(WizardError::NotABranchPoint(4))
    );
}

#[test]
fn single_leaf_trace_starts_and_ends_on_that_leaf() {
    let map = WizardMap::from_trace(&action("Serve", Status::Success));
    let s = WizardSession::start(&map);
    assert_eq!(s.current_node_id(), 0);
    assert_eq!(s.prompt(&map), Prompt::Decision { node: 0 });
    assert_eq!(s.visited_path(), &[0]);
}

#[test]
fn failed_action_propagates_like_a_no() {
    // Selector[ Sequence[Cond, Act(fail)], Act(ok) ]
    let trace = TraceNode::new(NodeKind::Selector, "Root", Status::Success).with_children(vec![
        TraceNode::new(NodeKind::Sequence, "Try", Status::Failure).with_children(vec![
            cond("Ready", Status::Success),
            action("Spike", Status::Failure),
        ]),
        action("Cover", Status::Success),
    ]);
    let map = WizardMap::from_trace(&trace);

    let s = WizardSession::start(&map).select_branch(&map, 0).expect("branch");
    assert_eq!(s.prompt(&map), Prompt::YesNo { node: 2 });

    let s = s.answer(&map, true).expect("yes");
    assert_eq!(name_of(&map, s.current_node_id()), "Cover");
    assert_eq!(s.prompt(&map), Prompt::Decision { node: 4 });
    assert_eq!(s.visited_path(), &[0, 1, 2, 3, 4]);
    assert_eq!(s.finished(), None);
}

#[test]
fn failed_action_is_never_offered_as_the_decision() {
    let map = WizardMap::from_trace(&action("Spike", Status::Failure));
    let s = WizardSession::start(&map);
    assert_eq!(s.finished(), Some(Status::Failure));
    assert_eq!(s.prompt(&map), Prompt::Finished { status: Status::Failure });
}

#[test]
fn running_action_propagates_running() {
    let trace = TraceNode::new(NodeKind::Sequence, "Root", Status::Running)
        .with_children(vec![cond("Ready", Status::Success), action("Chase", Status::Running)]);
    let map = WizardMap::from_trace(&trace);

    let s = WizardSession::start(&map).answer(&map, true).expect("yes");
    assert_eq!(s.finished(), Some(Status::Running));
    assert_eq!(s.current_node_id(), 2);
}

#[test]
fn running_is_failure_over_running_action_moves_to_next_branch() {
    let trace = TraceNode::new(NodeKind::Selector, "Root", Status::Success).with_children(vec![
        TraceNode::new(NodeKind::Decorator, "Give up", Status::Failure)
            .with_decorator(DecoratorKind::RunningIsFailure)
            .with_child(action("Chase", Status::Running)),
        action("Hold", Status::Success),
    ]);
    let map = WizardMap::from_trace(&trace);

    let s = WizardSession::start(&map).select_branch(&map, 0).expect("branch");
    assert_eq!(name_of(&map, s.current_node_id()), "Hold");
    assert_eq!(s.prompt(&map), Prompt::Decision { node: 3 });
}

#[test]
fn highlight_marks_current_visited_and_rest() {
    let map = WizardMap::from_trace(&fallback_trace());
    let s = WizardSession::start(&map)
        .select_branch(&map, 0)
        .expect("branch")
        .answer(&map, false)
        .expect("no");

    assert_eq!(s.highlight(4, DisplayMode::Full), Highlight::Current);
    assert_eq!(s.highlight(2, DisplayMode::Full), Highlight::Visited);
    assert_eq!(s.highlight(0, DisplayMode::Focused), Highlight::Visited);
    assert_eq!(s.highlight(5, DisplayMode::Full), Highlight::Unvisited);
    assert_eq!(s.highlight(5, DisplayMode::Focused), Highlight::Dimmed);
}

#[test]
fn reset_discards_answers() {
    let map = WizardMap::from_trace(&fallback_trace());
    let s = WizardSession::start(&map).select_branch(&map, 1).expect("branch");
    assert_eq!(s.reset(&map), WizardSession::start(&map));
}
