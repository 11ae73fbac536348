use canvas::{CanvasConfig, Color};

use super::*;

fn board() -> Board {
    Engine::new(PixmapSurface::new(64, 64).unwrap(), &CanvasConfig::default()).unwrap()
}

#[tokio::test]
async fn snapshot_of_empty_board() {
    let state = AppState::new(board());
    let snap = state.snapshot().await;
    assert_eq!((snap.width, snap.height), (64, 64));
    assert_eq!(snap.frames, 0);
    assert!(snap.shapes.is_empty());
    assert!(snap.selection.is_none());
    assert_eq!(snap.covered_pixels, 0);
}

#[tokio::test]
async fn snapshot_lists_shapes_in_paint_order() {
    let state = AppState::new(board());
    let a = Shape::rectangle(0.0, 0.0, 4.0, 4.0, Color::BLACK);
    let b = Shape::circle(10.0, 10.0, 2.0, Color::BLACK);
    let ids = [a.id, b.id];
    {
        let mut board = state.board.lock().await;
        board.add_shape(a);
        board.add_shape(b);
    }
    let snap = state.snapshot().await;
    let got: Vec<_> = snap.shapes.iter().map(|s| s.id).collect();
    assert_eq!(got, ids);
}

#[tokio::test]
async fn snapshot_serializes_to_json() {
    let state = AppState::new(board());
    state.board.lock().await.add_shape(Shape::rectangle(1.0, 2.0, 3.0, 4.0, Color::WHITE));
    let json = serde_json::to_value(state.snapshot().await).unwrap();
    assert_eq!(json["shapes"][0]["fill"], "#ffffff");
    assert_eq!(json["selection"], serde_json::Value::Null);
}

#[tokio::test]
async fn clones_share_the_board() {
    let state = AppState::new(board());
    let other = state.clone();
    other.board.lock().await.add_shape(Shape::rectangle(0.0, 0.0, 1.0, 1.0, Color::BLACK));
    assert_eq!(state.snapshot().await.shapes.len(), 1);
}

#[tokio::test]
async fn snapshot_bytes_are_pretty_json_with_newline() {
    let state = AppState::new(board());
    let bytes = state.snapshot().await.to_json_bytes().unwrap();
    assert_eq!(bytes.last(), Some(&b'\n'));
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["width"], 64);
}

#[test]
fn output_errors_are_not_reported_as_parse_errors() {
    let source = serde_json::from_str::<u8>("x").unwrap_err();
    let err = HostError::Output(source);
    assert!(err.to_string().starts_with("output serialization failed"));
}
