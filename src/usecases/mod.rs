//! Application use cases. Orchestrate domain logic via ports.

pub mod catalog_export;
pub mod content_aggregator;
pub mod navigation_menu;

pub use catalog_export::{CatalogExporter, ExportSummary};
pub use content_aggregator::ContentAggregator;
pub use navigation_menu::NavigationMenu;
