//! The ordered slot collection for the active layout.
//!
//! A [`SlotGrid`] always holds exactly `layout.cells().count` slots whose
//! positions are `0..count` in order. The only operation that changes the
//! slot count is [`SlotGrid::reconcile`], which carries assignments across a
//! layout change by position and drops whatever falls off the end.

use serde::Serialize;

use crate::camera::CameraAssignment;
use crate::error::CoreError;
use crate::layout::Layout;
use crate::types::SlotPosition;

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub position: SlotPosition,
    pub assignment: Option<CameraAssignment>,
}

impl Slot {
    fn empty(position: SlotPosition) -> Self {
        Self {
            position,
            assignment: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.assignment.is_some()
    }
}

/// Slots for the active layout, indexed by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    layout: Layout,
    slots: Vec<Slot>,
}

impl SlotGrid {
    /// An all-empty grid for `layout`.
    pub fn new(layout: Layout) -> Self {
        let slots = (0..layout.cells().count).map(Slot::empty).collect();
        Self { layout, slots }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, position: SlotPosition) -> bool {
        position < self.slots.len()
    }

    /// Reject a position outside the active layout.
    ///
    /// Used at the HTTP boundary; the grid operations themselves ignore
    /// out-of-range positions.
    pub fn check_position(&self, position: SlotPosition) -> Result<(), CoreError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Slot position {position} is outside layout {} (0..{})",
                self.layout,
                self.slots.len()
            )))
        }
    }

    pub fn get(&self, position: SlotPosition) -> Option<&Slot> {
        self.slots.get(position)
    }

    pub fn assignment(&self, position: SlotPosition) -> Option<&CameraAssignment> {
        self.get(position).and_then(|slot| slot.assignment.as_ref())
    }

    pub fn is_occupied(&self, position: SlotPosition) -> bool {
        self.assignment(position).is_some()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    /// Camera ids in position order, one entry per occupied slot.
    pub fn assigned_camera_ids(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter_map(|slot| slot.assignment.as_ref())
            .map(|a| a.camera_id.as_str())
            .collect()
    }

    /// Put `assignment` in the slot, replacing whatever was there.
    ///
    /// Returns the previous assignment. Out-of-range positions are ignored.
    pub fn set(
        &mut self,
        position: SlotPosition,
        assignment: CameraAssignment,
    ) -> Option<CameraAssignment> {
        self.slots
            .get_mut(position)
            .and_then(|slot| slot.assignment.replace(assignment))
    }

    /// Empty the slot, returning what it held.
    pub fn clear(&mut self, position: SlotPosition) -> Option<CameraAssignment> {
        self.slots
            .get_mut(position)
            .and_then(|slot| slot.assignment.take())
    }

    /// Empty every slot. Returns how many were occupied.
    pub fn clear_all(&mut self) -> usize {
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.assignment.take())
            .count()
    }

    /// Exchange the contents of two slots, empty or not.
    ///
    /// Returns `false` (and changes nothing) if either position is out of
    /// range.
    pub fn swap(&mut self, a: SlotPosition, b: SlotPosition) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        if a != b {
            let taken = self.slots[a].assignment.take();
            self.slots[a].assignment = std::mem::replace(&mut self.slots[b].assignment, taken);
        }
        true
    }

    /// Rebuild the grid for `layout`, keeping assignments by position.
    ///
    /// Slots `0..min(old, new)` keep their assignment; new positions start
    /// empty. Occupied slots past the new count are returned and are gone from
    /// the grid.
    pub fn reconcile(&mut self, layout: Layout) -> Vec<Slot> {
        let count = layout.cells().count;
        let mut old = std::mem::take(&mut self.slots).into_iter();

        let slots = (0..count)
            .map(|position| Slot {
                position,
                assignment: old.next().and_then(|slot| slot.assignment),
            })
            .collect();

        let discarded = old.filter(Slot::is_occupied).collect();

        self.slots = slots;
        self.layout = layout;
        discarded
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
