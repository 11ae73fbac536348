use tracing::{debug, info};

use crate::config::CanvasConfig;
use crate::error::CanvasError;
use crate::geom::Point;
use crate::hit::HitTester;
use crate::input::{DragState, PointerEvent};
use crate::palette::HeldShape;
use crate::redraw::RedrawScheduler;
use crate::scene::Scene;
use crate::shape::{Shape, ShapeId};
use crate::surface::Surface;
use crate::web::WebSurface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShapeAdded(ShapeId),
    SelectionChanged(Option<ShapeId>),
    ShapeMoved { id: ShapeId, x: f64, y: f64 },
    /// The drag ended with the shape at its final position.
    DragCommitted { id: ShapeId, x: f64, y: f64 },
    /// The drag was abandoned and the shape put back at `(x, y)`.
    DragCancelled { id: ShapeId, x: f64, y: f64 },
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the visible surface.
///
/// One `EngineCore` exists per visible surface. Pointer handlers mutate the
/// scene and raise its dirty flag; [`EngineCore::tick`] repaints.
pub struct EngineCore {
    scene: Scene,
    drag: DragState,
    hit: HitTester,
    redraw: RedrawScheduler,
    width: u32,
    height: u32,
}

impl EngineCore {
    /// Create a controller for a visible surface of `width` x `height` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSurface`] if the hit-testing scratch
    /// surface cannot be allocated at that size.
    pub fn new(width: u32, height: u32, config: &CanvasConfig) -> Result<Self, CanvasError> {
        Ok(Self {
            scene: Scene::new(),
            drag: DragState::Idle,
            hit: HitTester::new(width, height)?,
            redraw: RedrawScheduler::new(config),
            width,
            height,
        })
    }

    // --- Data inputs ---

    /// Add a shape on top of the scene.
    pub fn add_shape(&mut self, shape: Shape) -> Vec<Action> {
        let id = shape.id;
        self.scene.add(shape);
        vec![Action::ShapeAdded(id), Action::RenderNeeded]
    }

    /// Place a copy of a palette prototype so that the grab point lands on `drop_pt`.
    ///
    /// Drops never change the selection or an in-progress drag.
    pub fn on_drop(&mut self, held: &HeldShape, drop_pt: Point) -> Vec<Action> {
        let mut copy = held.prototype.duplicate();
        let origin = drop_pt - held.offset;
        copy.set_position(origin.x, origin.y);
        debug!(id = %copy.id, x = origin.x, y = origin.y, "shape dropped");
        self.add_shape(copy)
    }

    // --- Input events ---

    /// Dispatch a host pointer event to the matching handler.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(Point::new(x, y)),
            PointerEvent::Move { x, y } => self.on_pointer_move(Point::new(x, y)),
            PointerEvent::Up { x, y } => self.on_pointer_up(Point::new(x, y)),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }

    /// Select the topmost shape under the pointer and start dragging it.
    /// A miss clears the selection.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let previous = self.drag.selected();

        self.drag = match self.hit.topmost(&self.scene, pt) {
            Some(id) => self.begin_drag(id, pt),
            None => DragState::Idle,
        };
        self.scene.mark_dirty();

        let mut actions = Vec::new();
        let selected = self.drag.selected();
        if selected != previous {
            actions.push(Action::SelectionChanged(selected));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn begin_drag(&mut self, id: ShapeId, pt: Point) -> DragState {
        let Some(origin) = self.scene.get(id).map(Shape::origin) else {
            return DragState::Idle;
        };
        self.scene.bring_to_front(id);
        debug!(%id, x = pt.x, y = pt.y, "drag started");
        DragState::Dragging { id, offset: pt - origin, origin }
    }

    /// Move the dragged shape so the grab offset stays under the pointer.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let DragState::Dragging { id, offset, .. } = self.drag else {
            return Vec::new();
        };
        let target = pt - offset;
        if !self.scene.set_position(id, target.x, target.y) {
            self.drag = DragState::Idle;
            return Vec::new();
        }
        vec![Action::ShapeMoved { id, x: target.x, y: target.y }, Action::RenderNeeded]
    }

    /// Finish the drag, keeping the shape where it is.
    pub fn on_pointer_up(&mut self, _pt: Point) -> Vec<Action> {
        let DragState::Dragging { id, .. } = self.drag else {
            return Vec::new();
        };
        self.drag = DragState::Idle;
        self.scene.mark_dirty();

        let mut actions = Vec::new();
        if let Some(shape) = self.scene.get(id) {
            debug!(%id, x = shape.x, y = shape.y, "drag committed");
            actions.push(Action::DragCommitted { id, x: shape.x, y: shape.y });
        }
        actions.push(Action::SelectionChanged(None));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Abandon the drag: the shape returns to where it was at pointer-down.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let DragState::Dragging { id, origin, .. } = self.drag else {
            return Vec::new();
        };
        self.drag = DragState::Idle;
        self.scene.set_position(id, origin.x, origin.y);
        self.scene.mark_dirty();
        debug!(%id, x = origin.x, y = origin.y, "drag cancelled");

        vec![
            Action::DragCancelled { id, x: origin.x, y: origin.y },
            Action::SelectionChanged(None),
            Action::RenderNeeded,
        ]
    }

    // --- Render ---

    /// Repaint `surface` if anything changed since the last tick.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> bool {
        let selection = self.drag.selected();
        self.redraw.tick(surface, &mut self.scene, selection)
    }

    // --- Queries ---

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.drag.selected()
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.scene.get(id)
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current drag state. Mutation only happens through the pointer handlers.
    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// How often the host should call [`Self::tick`].
    #[must_use]
    pub fn redraw_interval(&self) -> std::time::Duration {
        self.redraw.interval()
    }

    /// Number of repaints performed.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.redraw.frames()
    }

    /// Visible surface size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the visible surface.
pub struct Engine<S: Surface> {
    surface: S,
    pub core: EngineCore,
}

impl<S: Surface> Engine<S> {
    /// Create an engine drawing onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSurface`] if the surface has zero area.
    pub fn new(surface: S, config: &CanvasConfig) -> Result<Self, CanvasError> {
        let core = EngineCore::new(surface.width(), surface.height(), config)?;
        Ok(Self { surface, core })
    }

    // --- Delegated inputs ---

    pub fn add_shape(&mut self, shape: Shape) -> Vec<Action> {
        self.core.add_shape(shape)
    }

    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        self.core.handle(event)
    }

    pub fn on_drop(&mut self, held: &HeldShape, drop_pt: Point) -> Vec<Action> {
        self.core.on_drop(held, drop_pt)
    }

    // --- Render ---

    /// Run one redraw tick against the owned surface.
    pub fn tick(&mut self) -> bool {
        self.core.tick(&mut self.surface)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.core.selection()
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.core.shape(id)
    }
}

impl Engine<WebSurface> {
    /// Bind to the `<canvas>` element with the given DOM id.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSurface`] if the element is missing, is not
    /// a canvas, or has no 2D context.
    pub fn attach(element_id: &str, config: &CanvasConfig) -> Result<Self, CanvasError> {
        let surface = WebSurface::from_element_id(element_id)?;
        info!(element_id, width = surface.width(), height = surface.height(), "canvas attached");
        Self::new(surface, config)
    }
}
