use canvas::pixmap::PixmapSurface;
use canvas::{CanvasConfig, Color, Engine, Shape};

use super::*;

fn state() -> AppState {
    let board = Engine::new(PixmapSurface::new(200, 200).unwrap(), &CanvasConfig::default()).unwrap();
    AppState::new(board)
}

fn drop_rect(x: f64, y: f64, offset_x: f64, offset_y: f64) -> HostEvent {
    HostEvent::Drop {
        shape: Shape::rectangle(0.0, 0.0, 20.0, 10.0, Color::BLACK),
        x,
        y,
        offset_x,
        offset_y,
    }
}

// =============================================================================
// drops
// =============================================================================

#[tokio::test]
async fn drop_places_copy_under_grab_point() {
    let state = state();
    let actions = dispatch(&state, drop_rect(100.0, 100.0, 5.0, 5.0)).await;
    let [Action::ShapeAdded(id), Action::RenderNeeded] = actions.as_slice() else {
        panic!("unexpected actions: {actions:?}");
    };
    let board = state.board.lock().await;
    let shape = board.shape(*id).unwrap();
    assert_eq!((shape.x, shape.y), (95.0, 95.0));
    assert!(board.selection().is_none());
}

#[tokio::test]
async fn drops_get_fresh_ids() {
    let state = state();
    dispatch(&state, drop_rect(10.0, 10.0, 0.0, 0.0)).await;
    dispatch(&state, drop_rect(50.0, 50.0, 0.0, 0.0)).await;
    let snap = state.snapshot().await;
    assert_eq!(snap.shapes.len(), 2);
    assert_ne!(snap.shapes[0].id, snap.shapes[1].id);
}

// =============================================================================
// pointer events
// =============================================================================

#[tokio::test]
async fn drag_moves_shape_and_commits() {
    let state = state();
    dispatch(&state, drop_rect(10.0, 10.0, 0.0, 0.0)).await;

    let down = dispatch(&state, HostEvent::PointerDown { x: 12.0, y: 12.0 }).await;
    assert!(matches!(down[0], Action::SelectionChanged(Some(_))));

    dispatch(&state, HostEvent::PointerMove { x: 42.0, y: 32.0 }).await;
    let up = dispatch(&state, HostEvent::PointerUp { x: 42.0, y: 32.0 }).await;
    assert!(matches!(up[0], Action::DragCommitted { x, y, .. } if x == 40.0 && y == 30.0));

    let snap = state.snapshot().await;
    assert_eq!((snap.shapes[0].x, snap.shapes[0].y), (40.0, 30.0));
    assert!(snap.selection.is_none());
}

#[tokio::test]
async fn leave_restores_origin() {
    let state = state();
    dispatch(&state, drop_rect(10.0, 10.0, 0.0, 0.0)).await;
    dispatch(&state, HostEvent::PointerDown { x: 15.0, y: 15.0 }).await;
    dispatch(&state, HostEvent::PointerMove { x: 150.0, y: 150.0 }).await;
    let actions = dispatch(&state, HostEvent::PointerLeave).await;
    assert!(matches!(actions[0], Action::DragCancelled { x, y, .. } if x == 10.0 && y == 10.0));

    let snap = state.snapshot().await;
    assert_eq!((snap.shapes[0].x, snap.shapes[0].y), (10.0, 10.0));
}

#[tokio::test]
async fn move_without_drag_does_nothing() {
    let state = state();
    dispatch(&state, drop_rect(10.0, 10.0, 0.0, 0.0)).await;
    let actions = dispatch(&state, HostEvent::PointerMove { x: 12.0, y: 12.0 }).await;
    assert!(actions.is_empty());
}
