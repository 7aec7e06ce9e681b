use rinkkit_designer::{ElementId, Placement, RinkElement, SnapshotHistory};

fn snapshot(tag: &str) -> Vec<RinkElement> {
    vec![RinkElement::Net(Placement {
        id: ElementId::new(tag),
        x: 0.0,
        y: 0.0,
    })]
}

#[test]
fn test_history_creation() {
    let history = SnapshotHistory::default();
    assert_eq!(history.limit(), 30);
    assert!(history.is_empty());
    assert!(!history.can_undo());
}

#[test]
fn test_history_bound() {
    let mut history = SnapshotHistory::new(30);
    for i in 0..45 {
        history.push(snapshot(&format!("net-{}", i)));
    }
    assert_eq!(history.len(), 30);

    let newest = history.pop().unwrap();
    assert_eq!(newest[0].id().as_str(), "net-44");
    let mut oldest = None;
    while let Some(s) = history.pop() {
        oldest = Some(s);
    }
    assert_eq!(oldest.unwrap()[0].id().as_str(), "net-15");
}

#[test]
fn test_clear() {
    let mut history = SnapshotHistory::new(5);
    history.push(snapshot("a"));
    history.clear();
    assert!(history.pop().is_none());
}
