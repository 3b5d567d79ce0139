use serde_json::json;

use sentinel_bt::{LoadError, Node, ParamError, Registries, TreeLoader};
use sentinel_core::{Action, AiAgent, Blackboard, Status};

const SENTRY: &str = r#"{
  "root": {
    "type": "selector",
    "children": [
      { "type": "sequence", "children": [
        { "type": "condition", "name": "playerVisible", "params": { "recentSeconds": 0.3 } },
        { "type": "action", "name": "look", "params": { "target": "player", "duration": 0.4 } }
      ] },
      { "type": "sequence", "children": [
        { "type": "condition", "name": "heardNoiseWithin", "params": { "radius": 6 } },
        { "type": "action", "name": "move", "params": { "toward": "lastHeardNoise", "speed": 1.2 } }
      ] },
      { "type": "sequence", "children": [
        { "type": "action", "name": "scan", "params": { "rotate": true, "mode": "oscillate", "sweepDeg": 90 } },
        { "type": "wait", "seconds": 0.5 },
        { "type": "action", "name": "listen" }
      ] }
    ]
  }
}"#;

fn load(document: serde_json::Value) -> Result<Node, LoadError> {
    let registries = Registries::with_builtins();
    TreeLoader::new(&registries).load_value(&document)
}

#[test]
fn loads_a_tree_using_every_builtin() {
    let registries = Registries::with_builtins();
    let tree = TreeLoader::new(&registries).load_str(SENTRY).expect("valid tree");

    assert_eq!(tree.kind(), "selector");
    assert_eq!(tree.count(), 11);
    let last = &tree.children()[2];
    let kinds: Vec<&str> = last.children().iter().map(Node::kind).collect();
    assert_eq!(kinds, vec!["action", "wait", "action"]);
}

#[test]
fn builtin_names_are_registered() {
    let registries = Registries::with_builtins();
    let actions: Vec<&str> = registries.actions.names().collect();
    assert_eq!(actions, vec!["listen", "look", "move", "scan"]);
    assert!(registries.conditions.contains("playerVisible"));
    assert!(registries.conditions.contains("heardNoiseWithin"));
}

#[test]
fn unknown_action_names_the_missing_factory() {
    let err = load(json!({
        "root": { "type": "sequence", "children": [
            { "type": "wait", "seconds": 1.0 },
            { "type": "action", "name": "jump" }
        ] }
    }))
    .expect_err("jump is not registered");

    match &err {
        LoadError::UnknownAction { path, name } => {
            assert_eq!(name, "jump");
            assert_eq!(path, "root.children[1]");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("jump"));
}

#[test]
fn unknown_condition_is_fatal() {
    let err = load(json!({ "root": { "type": "condition", "name": "isRaining" } }))
        .expect_err("not registered");
    assert!(matches!(err, LoadError::UnknownCondition { ref name, .. } if name == "isRaining"));
}

#[test]
fn unknown_node_type_is_fatal() {
    let err = load(json!({
        "root": { "type": "selector", "children": [ { "type": "parallel", "children": [] } ] }
    }))
    .expect_err("parallel is not a node type");

    match err {
        LoadError::UnknownNodeType { path, type_name } => {
            assert_eq!(path, "root.children[0]");
            assert_eq!(type_name, "parallel");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_json_is_reported() {
    let registries = Registries::with_builtins();
    let err = TreeLoader::new(&registries)
        .load_str(r#"{ "root": { "type": "wait", "#)
        .expect_err("truncated");
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn structural_problems_are_reported_with_their_field() {
    assert!(matches!(load(json!({ "tree": {} })), Err(LoadError::MissingRoot)));
    assert!(matches!(
        load(json!({ "root": { "type": "sequence" } })),
        Err(LoadError::MissingField { field: "children", .. })
    ));
    assert!(matches!(
        load(json!({ "root": { "type": "wait" } })),
        Err(LoadError::MissingField { field: "seconds", .. })
    ));
    assert!(matches!(
        load(json!({ "root": { "type": "wait", "seconds": "soon" } })),
        Err(LoadError::InvalidField { field: "seconds", .. })
    ));
    assert!(matches!(
        load(json!({ "root": { "type": "action", "name": "listen", "params": [1, 2] } })),
        Err(LoadError::InvalidField { field: "params", .. })
    ));
    assert!(matches!(
        load(json!({ "root": { "children": [] } })),
        Err(LoadError::MissingField { field: "type", .. })
    ));
}

#[test]
fn look_at_point_without_a_point_fails_to_load() {
    let err = load(json!({
        "root": { "type": "action", "name": "look", "params": { "target": "point" } }
    }))
    .expect_err("point missing");

    match err {
        LoadError::InvalidParams { kind, name, source, .. } => {
            assert_eq!(kind, "action");
            assert_eq!(name, "look");
            assert!(matches!(source, ParamError::MissingPoint));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bad_parameter_values_fail_to_load() {
    let err = load(json!({
        "root": { "type": "action", "name": "move", "params": { "mode": "teleport" } }
    }))
    .expect_err("unknown provider mode");
    assert!(matches!(err, LoadError::InvalidParams { source: ParamError::Json(_), .. }));

    let err = load(json!({
        "root": { "type": "action", "name": "listen", "params": { "duration": "long" } }
    }))
    .expect_err("duration must be a number");
    assert!(matches!(err, LoadError::InvalidParams { .. }));
}

struct Jump;

impl Action for Jump {
    fn tick(&mut self, _dt: f32, _agent: &mut dyn AiAgent, _bb: &mut Blackboard) -> Status {
        Status::Success
    }
}

#[test]
fn registries_are_independent_and_extensible() {
    let mut custom = Registries::new();
    custom.actions.register("jump", |_params| Ok(Box::new(Jump) as Box<dyn Action>));

    let document = json!({ "root": { "type": "action", "name": "jump", "params": null } });
    let tree = TreeLoader::new(&custom).load_value(&document).expect("jump registered here");
    assert_eq!(tree.kind(), "action");

    // The builtin bundle is unaffected, and the custom one has no builtins.
    assert!(load(document).is_err());
    let listen = json!({ "root": { "type": "action", "name": "listen" } });
    assert!(TreeLoader::new(&custom).load_value(&listen).is_err());
}
