use proptest::prelude::*;

use rinkkit_core::constants::HISTORY_LIMIT;
use rinkkit_designer::{
    chaikin_smooth, decimate_points, ArrowVariant, Canvas, MarkerType, Point, RinkDiagramData,
    Tool,
};

#[derive(Debug, Clone)]
enum Action {
    Place(Tool, Point),
    Arrow(Tool, Point, Point),
    Stroke(Vec<Point>),
    Erase(Point),
    Drag(Point, Point),
    Clear,
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (0.0f64..800.0, 0.0f64..340.0).prop_map(|(x, y)| Point::new(x, y))
}

fn placement_tool() -> impl Strategy<Value = Tool> {
    prop_oneof![
        (0usize..4).prop_map(|i| Tool::Marker(MarkerType::ALL[i])),
        Just(Tool::Puck),
        Just(Tool::Pylon),
        Just(Tool::Net),
    ]
}

fn arrow_tool() -> impl Strategy<Value = Tool> {
    prop_oneof![
        (0usize..7).prop_map(|i| Tool::Arrow(ArrowVariant::ALL[i])),
        Just(Tool::ArrowDashed),
    ]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (placement_tool(), point_strategy()).prop_map(|(t, p)| Action::Place(t, p)),
        2 => (arrow_tool(), point_strategy(), point_strategy())
            .prop_map(|(t, a, b)| Action::Arrow(t, a, b)),
        2 => prop::collection::vec(point_strategy(), 0..12).prop_map(Action::Stroke),
        1 => point_strategy().prop_map(Action::Erase),
        2 => (point_strategy(), point_strategy()).prop_map(|(a, b)| Action::Drag(a, b)),
        1 => Just(Action::Clear),
    ]
}

/// Applies one action and returns how many mutations it committed.
fn apply(canvas: &mut Canvas, action: &Action) -> usize {
    let committed = match action {
        Action::Place(tool, p) => {
            canvas.set_tool(*tool);
            let down = canvas.pointer_down(*p);
            canvas.pointer_up(*p) || down
        }
        Action::Arrow(tool, a, b) => {
            canvas.set_tool(*tool);
            canvas.pointer_down(*a);
            canvas.pointer_up(*a);
            canvas.pointer_move(*b);
            let down = canvas.pointer_down(*b);
            let up = canvas.pointer_up(*b);
            canvas.cancel();
            down || up
        }
        Action::Stroke(points) => {
            canvas.set_tool(Tool::Freehand { arrow_end: false });
            let Some((first, rest)) = points.split_first() else {
                return 0;
            };
            canvas.pointer_down(*first);
            for p in rest {
                canvas.pointer_move(*p);
            }
            canvas.pointer_up(*points.last().unwrap_or(first))
        }
        Action::Erase(p) => {
            canvas.set_tool(Tool::Eraser);
            let down = canvas.pointer_down(*p);
            canvas.pointer_up(*p) || down
        }
        Action::Drag(from, to) => {
            canvas.set_tool(Tool::Select);
            canvas.pointer_down(*from);
            canvas.pointer_move(*to);
            canvas.pointer_up(*to)
        }
        Action::Clear => canvas.clear_all(),
    };
    usize::from(committed)
}

proptest! {
    #[test]
    fn undo_restores_initial_state(
        seed in prop::collection::vec(action_strategy(), 0..8),
        actions in prop::collection::vec(action_strategy(), 0..25),
    ) {
        let mut seeding = Canvas::new();
        for action in &seed {
            apply(&mut seeding, action);
        }
        let initial = seeding.diagram_data();

        let mut canvas = Canvas::from_data(initial.clone(), Default::default());
        let commits: usize = actions.iter().map(|a| apply(&mut canvas, a)).sum();
        prop_assert_eq!(canvas.history_len(), commits.min(HISTORY_LIMIT));

        for _ in 0..commits {
            prop_assert!(canvas.undo());
        }
        prop_assert!(!canvas.undo());
        prop_assert_eq!(canvas.diagram_data(), initial);
    }

    #[test]
    fn history_never_exceeds_limit(
        actions in prop::collection::vec(action_strategy(), 0..60),
    ) {
        let mut canvas = Canvas::new();
        for action in &actions {
            apply(&mut canvas, action);
            prop_assert!(canvas.history_len() <= HISTORY_LIMIT);
        }
    }

    #[test]
    fn smoothing_is_deterministic(
        raw in prop::collection::vec(point_strategy(), 0..80),
        distance in 0.5f64..12.0,
    ) {
        let first = chaikin_smooth(&decimate_points(&raw, distance), 2);
        let second = chaikin_smooth(&decimate_points(&raw, distance), 2);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn diagram_json_round_trip(
        actions in prop::collection::vec(action_strategy(), 0..20),
    ) {
        let mut canvas = Canvas::new();
        for action in &actions {
            apply(&mut canvas, action);
        }
        let data = canvas.diagram_data();
        let parsed = RinkDiagramData::from_json(&data.to_json()).unwrap();
        prop_assert_eq!(parsed, data);
    }
}
