pub mod extractor;
pub mod types;
pub mod utils;

pub use extractor::load_projects;
