//! The video wall controller.
//!
//! [`VideoWallController`] is the single owner of the slot grid and the drag
//! state. Every operator action goes through one of its methods, each of which
//! runs to completion and cannot fail. Positions outside the active layout
//! are a caller bug: they leave the wall untouched, and the HTTP layer rejects
//! them before they get here.

use crate::camera::{CameraAssignment, CameraRecord};
use crate::drag::{DragCoordinator, DragState, DropOutcome};
use crate::layout::Layout;
use crate::slot_grid::{Slot, SlotGrid};
use crate::stream_url::ResolverConfig;
use crate::types::SlotPosition;
use crate::view::WallView;

#[derive(Debug, Clone, Default)]
pub struct VideoWallController {
    grid: SlotGrid,
    drag: DragCoordinator,
}

impl VideoWallController {
    /// A wall with every slot of `layout` empty.
    pub fn new(layout: Layout) -> Self {
        Self {
            grid: SlotGrid::new(layout),
            drag: DragCoordinator::new(),
        }
    }

    pub fn layout(&self) -> Layout {
        self.grid.layout()
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Switch to `layout`, carrying assignments over by position.
    ///
    /// Any drag in progress is cancelled. Returns the occupied slots that no
    /// longer fit.
    pub fn select_layout(&mut self, layout: Layout) -> Vec<Slot> {
        self.drag.cancel();
        self.grid.reconcile(layout)
    }

    /// Snapshot `camera` into the slot, replacing any previous assignment.
    pub fn assign(
        &mut self,
        position: SlotPosition,
        camera: &CameraRecord,
    ) -> Option<CameraAssignment> {
        self.grid.set(position, CameraAssignment::from(camera))
    }

    /// Empty the slot. No-op if it is already empty.
    pub fn remove(&mut self, position: SlotPosition) -> Option<CameraAssignment> {
        self.grid.clear(position)
    }

    /// Empty every slot. Returns how many were occupied.
    pub fn clear_all(&mut self) -> usize {
        self.grid.clear_all()
    }

    /// Start dragging the camera in `position`. Empty slots cannot be dragged.
    pub fn begin_drag(&mut self, position: SlotPosition) -> bool {
        self.drag.begin(position, &self.grid)
    }

    /// Drop the dragged camera on `target`, swapping the two slots.
    pub fn drop_on(&mut self, target: SlotPosition) -> DropOutcome {
        let outcome = self.drag.drop_on(target);
        if let DropOutcome::Swap { source, target } = outcome {
            self.grid.swap(source, target);
        }
        outcome
    }

    /// Abandon the drag without touching any slot.
    pub fn cancel_drag(&mut self) -> Option<SlotPosition> {
        self.drag.cancel()
    }

    /// Render projection of the wall with resolved stream URLs.
    pub fn view(&self, resolver: &ResolverConfig) -> WallView {
        WallView::build(&self.grid, self.drag.state(), resolver)
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
