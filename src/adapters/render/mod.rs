//! Presentation templates for posts and the header view.

pub mod csv_index;
pub mod header_text;
pub mod markdown;

pub use csv_index::posts_to_csv;
pub use header_text::render_header;
pub use markdown::post_to_markdown;
