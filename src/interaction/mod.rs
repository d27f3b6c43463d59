use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::BBox;

/// Who owns pointer input on the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InteractionMode {
    /// The host's pan/zoom controls handle the pointer.
    #[default]
    Navigate,
    /// Drags draw a rectangle that becomes the new view on release.
    BoxZoom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Pointer sample in normalized axes coordinates (`[0, 1]` on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Down,
            x,
            y,
        }
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Move,
            x,
            y,
        }
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self {
            kind: PointerEventKind::Up,
            x,
            y,
        }
    }
}

/// What the axes did with a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerDisposition {
    /// Not handled; the host's navigation controls should process it.
    Navigation,
    /// Handled by the box-zoom gesture without changing the view.
    Consumed,
    /// A drag was committed; `view` is the new zoom box in view space.
    Zoomed { view: BBox },
}

/// Closed five-vertex outline of the box-zoom rectangle, in pointer space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DragRect {
    pub vertices: [[f64; 2]; 5],
    pub visible: bool,
}

impl DragRect {
    fn collapsed_at(x: f64, y: f64) -> Self {
        Self {
            vertices: [[x, y]; 5],
            visible: true,
        }
    }

    /// Extent spanned by the vertices.
    #[must_use]
    pub fn bounds(&self) -> BBox {
        self.vertices.iter().fold(BBox::empty(), |acc, [x, y]| BBox {
            left: acc.left.min(*x),
            right: acc.right.max(*x),
            bottom: acc.bottom.min(*y),
            top: acc.top.max(*y),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        moved: bool,
    },
}

/// Result of feeding one event to the gesture controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    Ignored,
    /// The drag rectangle changed and should be redrawn.
    RectChanged,
    /// The pointer was released without moving; the rectangle is hidden.
    Released,
    /// The pointer was released after moving; carries the rectangle extent.
    Committed(BBox),
}

/// Box-zoom state machine driven by raw pointer events.
///
/// A drag whose release is never delivered stays latched until the next
/// press, which restarts the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomGestureController {
    state: GestureState,
    rect: DragRect,
}

impl ZoomGestureController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    #[must_use]
    pub fn drag_rect(&self) -> &DragRect {
        &self.rect
    }

    pub fn handle(&mut self, event: PointerEvent) -> GestureOutcome {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(event.x, event.y),
            PointerEventKind::Move => self.pointer_move(event.x, event.y),
            PointerEventKind::Up => self.pointer_up(),
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> GestureOutcome {
        self.rect = DragRect::collapsed_at(x, y);
        self.state = GestureState::Dragging { moved: false };
        trace!(x, y, "box zoom drag started");
        GestureOutcome::RectChanged
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> GestureOutcome {
        let GestureState::Dragging { .. } = self.state else {
            return GestureOutcome::Ignored;
        };
        let vertices = &mut self.rect.vertices;
        vertices[2][0] = x;
        vertices[3][0] = x;
        vertices[1][1] = y;
        vertices[2][1] = y;
        self.state = GestureState::Dragging { moved: true };
        trace!(x, y, "box zoom drag moved");
        GestureOutcome::RectChanged
    }

    pub fn pointer_up(&mut self) -> GestureOutcome {
        let GestureState::Dragging { moved } = self.state else {
            return GestureOutcome::Ignored;
        };
        self.state = GestureState::Idle;
        self.rect.visible = false;
        if moved {
            let bounds = self.rect.bounds();
            trace!(?bounds, "box zoom drag committed");
            GestureOutcome::Committed(bounds)
        } else {
            trace!("box zoom drag released without movement");
            GestureOutcome::Released
        }
    }

    /// Drops an active drag. Returns `true` when there was one.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = GestureState::Idle;
        self.rect.visible = false;
        was_dragging
    }
}

/// Interaction mode plus the gesture it drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    pan_enabled: bool,
    gesture: ZoomGestureController,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(InteractionMode::default())
    }
}

impl InteractionState {
    #[must_use]
    pub fn new(mode: InteractionMode) -> Self {
        Self {
            mode,
            pan_enabled: true,
            gesture: ZoomGestureController::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn pan_enabled(&self) -> bool {
        self.pan_enabled
    }

    pub fn set_pan_enabled(&mut self, enabled: bool) {
        self.pan_enabled = enabled;
    }

    /// Whether the host's navigation controls should be live.
    #[must_use]
    pub fn navigation_enabled(&self) -> bool {
        self.mode == InteractionMode::Navigate && self.pan_enabled
    }

    #[must_use]
    pub fn gesture(&self) -> &ZoomGestureController {
        &self.gesture
    }

    pub fn gesture_mut(&mut self) -> &mut ZoomGestureController {
        &mut self.gesture
    }

    /// Switches mode; an active drag is discarded. Returns `true` when a drag
    /// was dropped.
    pub fn set_mode(&mut self, mode: InteractionMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.gesture.cancel()
    }
}
