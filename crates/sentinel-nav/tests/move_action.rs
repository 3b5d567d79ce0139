use sentinel_core::{Action, Blackboard, Cell, Status};
use sentinel_nav::{AgentBody, GridWorld, MoveAction, MoveMode, MoveParams, PatrolProvider};

fn tick(action: &mut MoveAction, world: &GridWorld, body: &mut AgentBody, bb: &mut Blackboard) -> Status {
    let mut agent = body.bind(world);
    action.tick(0.1, &mut agent, bb)
}

#[test]
fn toward_last_seen_fails_without_memory() {
    let world = GridWorld::new(5, 5).expect("valid grid");
    let mut body = AgentBody::new(Cell::new(2, 2), 0);
    let mut bb = Blackboard::new();
    let mut action = MoveAction::new(MoveMode::TowardLastSeen, 1.0);

    assert_eq!(tick(&mut action, &world, &mut body, &mut bb), Status::Failure);
    assert!(body.intent().is_none());
}

#[test]
fn toward_last_seen_steps_to_the_closest_walkable_neighbor() {
    let mut world = GridWorld::new(6, 6).expect("valid grid");
    let mut body = AgentBody::new(Cell::new(2, 2), 0);
    let mut bb = Blackboard::new();
    bb.seen_target.observe(Cell::new(5, 2));
    let mut action = MoveAction::new(MoveMode::TowardLastSeen, 1.5);

    assert_eq!(tick(&mut action, &world, &mut body, &mut bb), Status::Running);
    let intent = body.intent().expect("move requested");
    assert_eq!(intent.target, Cell::new(3, 2));
    assert_eq!(intent.speed_multiplier, 1.5);

    // Block the direct step: next best is a sideways neighbor.
    world.set_blocked(Cell::new(3, 2), true);
    assert_eq!(tick(&mut action, &world, &mut body, &mut bb), Status::Running);
    let target = body.intent().expect("move requested").target;
    assert_eq!(target.manhattan(Cell::new(2, 2)), 1);
    assert_ne!(target, Cell::new(3, 2));
}

#[test]
fn toward_last_heard_fails_when_boxed_in() {
    let mut world = GridWorld::new(3, 3).expect("valid grid");
    for cell in [Cell::new(1, 0), Cell::new(2, 1), Cell::new(1, 2), Cell::new(0, 1)] {
        world.set_blocked(cell, true);
    }
    let mut body = AgentBody::new(Cell::new(1, 1), 0);
    let mut bb = Blackboard::new();
    bb.heard_noise.observe(Cell::new(2, 2));
    let mut action = MoveAction::new(MoveMode::TowardLastHeard, 1.0);

    assert_eq!(tick(&mut action, &world, &mut body, &mut bb), Status::Failure);
}

#[test]
fn provider_path_runs_until_the_last_cell_is_reached() {
    let world = GridWorld::new(5, 5).expect("valid grid");
    let mut body = AgentBody::new(Cell::new(0, 0), 0);
    let mut bb = Blackboard::new();
    let provider = PatrolProvider::new(vec![Cell::new(1, 0)]);
    let mut action = MoveAction::new(MoveMode::Provider(Box::new(provider)), 1.0);

    assert_eq!(tick(&mut action, &world, &mut body, &mut bb), Status::Running);
    assert_eq!(bb.path_next(), Some(Cell::new(1, 0)));
    assert_eq!(body.intent().map(|i| i.target), Some(Cell::new(1, 0)));

    body.cell = Cell::new(1, 0);
    assert_eq!(tick(&mut action, &world, &mut body, &mut bb), Status::Success);
    assert!(bb.path().is_none());
}

#[test]
fn provider_without_path_fails_and_leaves_a_note() {
    let world = GridWorld::new(5, 5).expect("valid grid");
    let mut body = AgentBody::new(Cell::new(0, 0), 0);
    let mut bb = Blackboard::new();
    let mut action = MoveAction::new(
        MoveMode::Provider(Box::new(PatrolProvider::new(Vec::new()))),
        1.0,
    );

    assert_eq!(tick(&mut action, &world, &mut body, &mut bb), Status::Failure);
    assert!(bb.debug_notes().iter().any(|n| n.contains("no path")));
}

#[test]
fn params_select_the_mode() {
    let params: MoveParams = serde_json::from_value(serde_json::json!({
        "toward": "lastHeardNoise",
        "speed": 2.0
    }))
    .unwrap();
    let action = MoveAction::from_params(params);
    assert!(matches!(action.mode(), MoveMode::TowardLastHeard));
    assert_eq!(action.speed(), 2.0);

    let params: MoveParams = serde_json::from_value(serde_json::json!({})).unwrap();
    let action = MoveAction::from_params(params);
    assert!(matches!(action.mode(), MoveMode::Provider(_)));
    assert_eq!(action.speed(), 1.0);
}

#[test]
fn unknown_toward_is_rejected() {
    let result: Result<MoveParams, _> =
        serde_json::from_value(serde_json::json!({ "toward": "north" }));
    assert!(result.is_err());
}
