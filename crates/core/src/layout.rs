//! Layout registry: the closed set of grid densities an operator can pick.
//!
//! Each layout maps to a fixed `(rows, columns, count)` triple. The mapping is
//! total over [`Layout`]; parsing an identifier string is the only fallible
//! step and only happens at the HTTP boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Layout identifiers
-------------------------------------------------------------------------- */

/// Grid density selectable by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Layout {
    #[serde(rename = "1x1")]
    Single,
    #[default]
    #[serde(rename = "2x2")]
    Quad,
    #[serde(rename = "3x3")]
    Nine,
    #[serde(rename = "4x4")]
    Sixteen,
}

/// Rows, columns and total cell count for a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutCells {
    pub rows: usize,
    pub columns: usize,
    pub count: usize,
}

impl Layout {
    /// Every layout, smallest first. Used to populate the layout picker.
    pub const ALL: [Layout; 4] = [Layout::Single, Layout::Quad, Layout::Nine, Layout::Sixteen];

    /// Identifier as shown to the operator (`"2x2"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Single => "1x1",
            Layout::Quad => "2x2",
            Layout::Nine => "3x3",
            Layout::Sixteen => "4x4",
        }
    }

    /// Look up the grid dimensions for this layout.
    pub fn cells(self) -> LayoutCells {
        cells_for(self)
    }
}

/// Registry lookup: the fixed dimensions of `layout`.
pub fn cells_for(layout: Layout) -> LayoutCells {
    let side = match layout {
        Layout::Single => 1,
        Layout::Quad => 2,
        Layout::Nine => 3,
        Layout::Sixteen => 4,
    };
    LayoutCells {
        rows: side,
        columns: side,
        count: side * side,
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Layout::ALL.iter().map(|l| l.as_str()).collect();
                CoreError::Validation(format!(
                    "Unknown layout '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
