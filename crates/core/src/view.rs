//! Render projection of the wall.
//!
//! Built fresh on every request from the grid and drag state. Stream URLs are
//! resolved here and never stored on the grid.

use std::collections::HashMap;

use serde::Serialize;

use crate::camera::CameraAssignment;
use crate::drag::DragState;
use crate::layout::Layout;
use crate::slot_grid::SlotGrid;
use crate::stream_url::{self, ResolverConfig, StreamSource};
use crate::types::SlotPosition;

#[derive(Debug, Clone, Serialize)]
pub struct WallView {
    pub layout: Layout,
    pub rows: usize,
    pub columns: usize,
    pub occupied: usize,
    pub drag: DragState,
    pub slots: Vec<SlotView>,
}

/// One cell as the render surface sees it.
///
/// Empty slots carry no URL (the UI shows a "select a camera" prompt) and are
/// not draggable. `duplicate` marks a camera that also occupies another slot.
#[derive(Debug, Clone, Serialize)]
pub struct SlotView {
    pub position: SlotPosition,
    pub row: usize,
    pub column: usize,
    pub camera: Option<CameraAssignment>,
    pub stream_url: Option<String>,
    pub stream_source: Option<StreamSource>,
    pub draggable: bool,
    pub duplicate: bool,
}

impl WallView {
    pub fn build(grid: &SlotGrid, drag: DragState, resolver: &ResolverConfig) -> Self {
        let cells = grid.layout().cells();

        let mut per_camera: HashMap<&str, usize> = HashMap::new();
        for id in grid.assigned_camera_ids() {
            *per_camera.entry(id).or_default() += 1;
        }

        let slots = grid
            .slots()
            .iter()
            .map(|slot| {
                let resolved = slot
                    .assignment
                    .as_ref()
                    .map(|a| stream_url::resolve(a, resolver));
                let duplicate = slot
                    .assignment
                    .as_ref()
                    .is_some_and(|a| per_camera.get(a.camera_id.as_str()).is_some_and(|&n| n > 1));

                SlotView {
                    position: slot.position,
                    row: slot.position / cells.columns,
                    column: slot.position % cells.columns,
                    camera: slot.assignment.clone(),
                    stream_source: resolved.as_ref().map(|r| r.source),
                    stream_url: resolved.map(|r| r.url),
                    draggable: slot.is_occupied(),
                    duplicate,
                }
            })
            .collect();

        Self {
            layout: grid.layout(),
            rows: cells.rows,
            columns: cells.columns,
            occupied: grid.occupied_count(),
            drag,
            slots,
        }
    }
}
