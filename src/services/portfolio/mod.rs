pub mod aggregator;
pub mod cache;
pub mod filter;

pub use cache::{ProjectCache, WorkbookSource};
pub use filter::filter_projects;
