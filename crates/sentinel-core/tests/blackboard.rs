use sentinel_core::{BbKey, Blackboard, Cell, DEBUG_NOTES_CAPACITY};

#[test]
fn memories_start_empty_and_infinitely_old() {
    let bb = Blackboard::new();
    assert_eq!(bb.seen_target.cell(), None);
    assert!(bb.seen_target.elapsed().is_infinite());
    assert_eq!(bb.heard_noise.cell(), None);
    assert!(bb.heard_noise.elapsed().is_infinite());
    assert!(bb.path().is_none());
}

#[test]
fn memory_recency_window() {
    let mut bb = Blackboard::new();
    bb.seen_target.observe(Cell::new(4, 2));
    bb.seen_target.age(0.15);
    assert_eq!(bb.seen_target.recent(0.2), Some(Cell::new(4, 2)));

    bb.seen_target.age(0.15);
    assert_eq!(bb.seen_target.recent(0.2), None);
    assert_eq!(bb.seen_target.cell(), Some(Cell::new(4, 2)));
}

#[test]
fn forgetting_keeps_the_timer_running() {
    let mut bb = Blackboard::new();
    bb.heard_noise.observe(Cell::new(1, 1));
    bb.heard_noise.age(2.0);
    bb.heard_noise.forget();
    bb.heard_noise.age(1.0);

    assert_eq!(bb.heard_noise.cell(), None);
    assert!((bb.heard_noise.elapsed() - 3.0).abs() < 1e-6);
}

#[test]
fn path_cursor_advances_and_clears_at_the_end() {
    let mut bb = Blackboard::new();
    bb.set_path(vec![Cell::new(0, 1), Cell::new(0, 2)]);
    assert_eq!(bb.path_next(), Some(Cell::new(0, 1)));
    assert_eq!(bb.path().map(|p| p.remaining()), Some(2));

    assert_eq!(bb.advance_path(), Some(Cell::new(0, 2)));
    assert_eq!(bb.path().map(|p| p.cursor()), Some(1));

    assert_eq!(bb.advance_path(), None);
    assert!(bb.path().is_none());
    assert_eq!(bb.advance_path(), None);
}

#[test]
fn empty_path_is_never_stored() {
    let mut bb = Blackboard::new();
    bb.set_path(vec![Cell::new(3, 3)]);
    bb.set_path(Vec::new());
    assert!(bb.path().is_none());
    assert_eq!(bb.path_next(), None);
}

#[test]
fn debug_notes_are_bounded() {
    let mut bb = Blackboard::new();
    for i in 0..(DEBUG_NOTES_CAPACITY + 5) {
        bb.note(format!("note {i}"));
    }
    assert_eq!(bb.debug_notes().len(), DEBUG_NOTES_CAPACITY);
    assert_eq!(bb.debug_notes().front().map(String::as_str), Some("note 5"));
}

#[test]
fn extension_set_get_remove_roundtrip() {
    let k_u32 = BbKey::<u32>::new(1);
    let k_str = BbKey::<String>::new(2);

    let mut bb = Blackboard::new();
    assert!(!bb.contains(k_u32));

    bb.set(k_u32, 123);
    bb.set(k_str, "hello".to_string());

    assert_eq!(bb.get(k_u32).copied(), Some(123));
    assert_eq!(bb.get(k_str).map(|s| s.as_str()), Some("hello"));

    assert_eq!(bb.remove(k_u32), Some(123));
    assert_eq!(bb.get(k_u32), None);
}

#[test]
#[should_panic(expected = "blackboard type mismatch")]
fn extension_type_mismatch_panics() {
    let mut bb = Blackboard::new();
    bb.set(BbKey::<u32>::new(1), 1u32);
    let _ = bb.get(BbKey::<i32>::new(1));
}
