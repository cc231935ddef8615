// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Planning a post's delivery is pure; [`deliver`] is the only place that
//! touches the file system or stdout.

mod paths;
mod types;
mod writer;

pub use paths::{dry_run_preview, plan_post_delivery, post_path};
pub use types::{DeliveryTarget, OutputPlan, OutputReport};
pub use writer::deliver;
