pub mod graph_animation;
mod page_scaffold;
mod project_snapshot;
mod sidebar_navigation;
mod static_graph;
mod update_summary;

pub use graph_animation::GraphAnimation;
pub use page_scaffold::PageScaffold;
pub use project_snapshot::ProjectSnapshotCard;
pub use sidebar_navigation::SidebarNavigation;
pub use static_graph::{StaticGraph, StaticGraphVariant};
pub use update_summary::UpdateSummary;
