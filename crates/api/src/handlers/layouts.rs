//! Handler for the layout picker.

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use videowall_core::layout::Layout;

use crate::error::AppResult;
use crate::response::DataResponse;

/// One entry of the layout table.
#[derive(Debug, Serialize)]
pub struct LayoutInfo {
    pub id: Layout,
    pub rows: usize,
    pub columns: usize,
    pub count: usize,
}

/// GET /api/v1/layouts
///
/// Every selectable layout with its dimensions, smallest first.
pub async fn list_layouts() -> AppResult<impl IntoResponse> {
    let layouts: Vec<LayoutInfo> = Layout::ALL
        .into_iter()
        .map(|layout| {
            let cells = layout.cells();
            LayoutInfo {
                id: layout,
                rows: cells.rows,
                columns: cells.columns,
                count: cells.count,
            }
        })
        .collect();

    Ok(Json(DataResponse { data: layouts }))
}
