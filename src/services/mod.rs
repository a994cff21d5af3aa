pub mod providers;
pub mod resolver;
pub mod suggestions;
pub mod title_extractor;
pub mod trending;

pub use resolver::MovieResolver;
pub use title_extractor::extract_titles;
