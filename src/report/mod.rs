//! Rendering and export of run results.
//!
//! - **`gantt`**: two-line text timeline
//! - **`table`**: per-process, averages and comparison tables
//! - **`export`**: JSON serialization to strings and files

pub mod export;
pub mod gantt;
pub mod table;
