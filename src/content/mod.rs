//! Static site content loaded at startup.

pub mod updates;

pub use updates::{ProjectUpdate, SummaryNode, latest_update, project_updates};
