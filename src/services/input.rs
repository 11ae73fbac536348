//! Input service: forwards host events to the engine under the board lock.

use canvas::Action;
use canvas::geom::Point;
use canvas::palette::PaletteItem;
use tracing::debug;

use crate::events::HostEvent;
use crate::state::AppState;

/// Apply one host event and return the actions it produced.
pub async fn dispatch(state: &AppState, event: HostEvent) -> Vec<Action> {
    let mut board = state.board.lock().await;
    let actions = match event {
        HostEvent::Drop { shape, x, y, offset_x, offset_y } => {
            let held = PaletteItem::new(shape).grab(Point::new(offset_x, offset_y));
            board.on_drop(&held, Point::new(x, y))
        }
        other => match other.as_pointer() {
            Some(pointer) => board.handle(pointer),
            None => Vec::new(),
        },
    };
    debug!(count = actions.len(), "host event dispatched");
    actions
}

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;
