use std::path::PathBuf;

use sentinel_cli::{load_behavior, Scenario, Simulation};
use sentinel_core::Cell;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn corridor(player: Option<Cell>) -> Scenario {
    let scenario: Scenario = serde_json::from_value(serde_json::json!({
        "width": 10,
        "height": 3,
        "agent": { "x": 1, "y": 1 },
        "player": player,
    }))
    .expect("valid scenario");
    scenario.validate().expect("agent start is open");
    scenario
}

#[test]
fn bundled_behaviors_load() {
    for name in ["sentry.json", "patroller.json"] {
        let root = load_behavior(&data(name)).expect("bundled behavior loads");
        assert_eq!(root.kind(), "selector");
    }
}

#[test]
fn bundled_scenario_parses() {
    let scenario = Scenario::from_file(&data("courtyard.json")).expect("bundled scenario parses");
    assert_eq!((scenario.width, scenario.height), (16, 10));
    assert_eq!(scenario.seed, 42);
    assert_eq!(scenario.controller.sensor_hz, 10.0);
    assert_eq!(scenario.noises.len(), 1);
}

#[test]
fn invalid_start_is_rejected() {
    let scenario: Scenario = serde_json::from_value(serde_json::json!({
        "width": 4, "height": 4,
        "blocked": [ { "x": 0, "y": 0 } ],
        "agent": { "x": 0, "y": 0 }
    }))
    .expect("parses");
    assert!(scenario.validate().is_err());
}

#[test]
fn degenerate_grids_are_rejected() {
    for (width, height) in [(0, 4), (4, 0), (u32::MAX, 2), (70_000, 70_000)] {
        let scenario: Scenario = serde_json::from_value(serde_json::json!({
            "width": width, "height": height,
            "agent": { "x": 0, "y": 0 }
        }))
        .expect("parses");
        assert!(scenario.validate().is_err(), "{width}x{height} accepted");
    }
}

#[test]
fn same_seed_same_run() {
    let run = |seed: u64| {
        let scenario = Scenario::from_file(&data("courtyard.json")).expect("scenario");
        let root = load_behavior(&data("patroller.json")).expect("behavior");
        let mut sim = Simulation::new(scenario, root, seed).expect("simulation");
        let summary = sim.run(300, 1.0 / 30.0).clone();
        (summary, sim.body().cell, sim.body().facing)
    };

    let (first, cell_a, facing_a) = run(42);
    let (second, cell_b, facing_b) = run(42);
    assert_eq!(first, second);
    assert_eq!(cell_a, cell_b);
    assert_eq!(facing_a, facing_b);
    assert_eq!(first.frames, 300);
    assert!(first.cells_moved > 0, "the patroller walks");
}

#[test]
fn idle_sentry_scans_in_place() {
    let root = load_behavior(&data("sentry.json")).expect("behavior");
    let mut sim = Simulation::new(corridor(None), root, 1).expect("simulation");

    let mut facings = Vec::new();
    for _ in 0..20 {
        facings.push(sim.step(0.1).facing);
    }

    assert_eq!(sim.summary().cells_moved, 0);
    assert_eq!(sim.body().cell, Cell::new(1, 1));
    assert!(facings.iter().any(|f| *f != facings[0]), "scan turns the sentry");
}

#[test]
fn sentry_closes_in_on_a_visible_player() {
    let root = load_behavior(&data("sentry.json")).expect("behavior");
    let player = Cell::new(6, 1);
    let mut sim = Simulation::new(corridor(Some(player)), root, 1).expect("simulation");

    let closest = (0..40)
        .map(|_| sim.step(0.1).cell.manhattan(player))
        .min()
        .unwrap_or(i32::MAX);

    assert!(closest <= 1, "closest approach was {closest}");
    assert!(sim.summary().frames_seeing_player > 0);
}
