//! Domain model for the video wall slot grid.
//!
//! Everything in this crate is synchronous and free of I/O: the layout table,
//! the slot grid and its reconciliation rule, the drag/swap state machine, the
//! stream URL resolver and the controller that owns them. The directory client
//! and the HTTP surface live in sibling crates.

pub mod camera;
pub mod controller;
pub mod drag;
pub mod error;
pub mod layout;
pub mod slot_grid;
pub mod stream_url;
pub mod types;
pub mod view;
