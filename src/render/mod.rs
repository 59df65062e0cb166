//! # Response Rendering
//!
//! HTML pages for the form front end. JSON bodies live next to the API handlers.

mod page;

pub use page::{escape_html, render_error_page, IndexView};
