//! Drag-and-drop reordering as an explicit two-state machine.
//!
//! `Idle --begin(occupied p)--> Dragging(p)`, and every `drop` or `cancel`
//! returns to `Idle`. The coordinator only computes what a drop means; the
//! controller applies the resulting swap to the grid.

use serde::Serialize;

use crate::slot_grid::SlotGrid;
use crate::types::SlotPosition;

/// Current drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging { source: SlotPosition },
}

/// What a drop resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// No drag was in progress.
    NotDragging,
    /// Dropped back onto the source slot.
    Unchanged { position: SlotPosition },
    /// Exchange the contents of `source` and `target`.
    Swap {
        source: SlotPosition,
        target: SlotPosition,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Start dragging from `position`.
    ///
    /// Only occupied slots can be dragged; anything else leaves the state as
    /// it was and returns `false`. Starting while already dragging replaces
    /// the source.
    pub fn begin(&mut self, position: SlotPosition, grid: &SlotGrid) -> bool {
        if !grid.is_occupied(position) {
            return false;
        }
        self.state = DragState::Dragging { source: position };
        true
    }

    /// Finish the drag on `target`. Always leaves the coordinator idle.
    pub fn drop_on(&mut self, target: SlotPosition) -> DropOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Idle => DropOutcome::NotDragging,
            DragState::Dragging { source } if source == target => {
                DropOutcome::Unchanged { position: target }
            }
            DragState::Dragging { source } => DropOutcome::Swap { source, target },
        }
    }

    /// Abandon the drag. Returns the source that was being dragged, if any.
    pub fn cancel(&mut self) -> Option<SlotPosition> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging { source } => Some(source),
        }
    }
}
