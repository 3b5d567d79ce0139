use sentinel_core::{AiAgent, Cell, WorldApi};
use sentinel_nav::{AgentBody, GridError, GridWorld};

#[test]
fn grid_dimensions_are_checked() {
    assert_eq!(
        GridWorld::new(0, 3).unwrap_err(),
        GridError::Empty { width: 0, height: 3 }
    );
    assert_eq!(
        GridWorld::new(70_000, 70_000).unwrap_err(),
        GridError::TooLarge { width: 70_000, height: 70_000 }
    );
    assert!(matches!(
        GridWorld::new(u32::MAX, 1),
        Err(GridError::TooLarge { .. })
    ));

    let world = GridWorld::new(3, 2).expect("valid grid");
    assert_eq!((world.width(), world.height()), (3, 2));
}

#[test]
fn out_of_bounds_cells_are_not_walkable() {
    let world = GridWorld::new(4, 4).expect("valid grid");
    assert!(world.is_walkable(Cell::new(0, 0)));
    assert!(!world.is_walkable(Cell::new(-1, 0)));
    assert!(!world.is_walkable(Cell::new(4, 3)));
}

#[test]
fn neighbors_are_in_bounds_and_ordered() {
    let world = GridWorld::new(3, 3).expect("valid grid");
    assert_eq!(
        world.neighbors4(Cell::new(1, 1)),
        vec![
            Cell::new(1, 0),
            Cell::new(2, 1),
            Cell::new(1, 2),
            Cell::new(0, 1)
        ]
    );
    assert_eq!(
        world.neighbors4(Cell::new(0, 0)),
        vec![Cell::new(1, 0), Cell::new(0, 1)]
    );
}

#[test]
fn walls_block_line_of_sight() {
    let mut world = GridWorld::new(8, 3).expect("valid grid");
    assert!(world.has_line_of_sight(Cell::new(0, 1), Cell::new(7, 1)));

    world.set_blocked(Cell::new(4, 1), true);
    assert!(!world.has_line_of_sight(Cell::new(0, 1), Cell::new(7, 1)));
    // A wall on another row does not matter.
    assert!(world.has_line_of_sight(Cell::new(0, 0), Cell::new(7, 0)));
}

#[test]
fn heuristic_is_manhattan() {
    let world = GridWorld::new(10, 10).expect("valid grid");
    assert_eq!(world.heuristic_cost(Cell::new(0, 0), Cell::new(3, 3)), 6.0);
}

#[test]
fn movement_steps_one_cell_when_budget_allows() {
    let world = GridWorld::new(5, 5).expect("valid grid");
    let mut body = AgentBody::new(Cell::new(0, 0), 1);
    body.bind(&world).request_move_to(Cell::new(1, 0), 1.0);

    assert!(!body.apply_movement(&world, 0.1, 4.0));
    assert_eq!(body.cell, Cell::new(0, 0));

    assert!(body.apply_movement(&world, 0.2, 4.0));
    assert_eq!(body.cell, Cell::new(1, 0));
    assert!(body.intent().is_none(), "intent clears on arrival");
}

#[test]
fn blocked_targets_drop_the_intent() {
    let mut world = GridWorld::new(5, 5).expect("valid grid");
    world.set_blocked(Cell::new(1, 0), true);
    let mut body = AgentBody::new(Cell::new(0, 0), 1);
    body.bind(&world).request_move_to(Cell::new(1, 0), 1.0);

    assert!(!body.apply_movement(&world, 1.0, 4.0));
    assert_eq!(body.cell, Cell::new(0, 0));
    assert!(body.intent().is_none());
}

#[test]
fn aiming_turns_the_agent() {
    let world = GridWorld::new(5, 5).expect("valid grid");
    let mut body = AgentBody::new(Cell::new(2, 2), 1);
    body.bind(&world).aim_at(Cell::new(2, 4));
    assert_eq!(body.aim, Some(Cell::new(2, 4)));
    assert!((body.facing - 90.0).abs() < 1e-4);
}
