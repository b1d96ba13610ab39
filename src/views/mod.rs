//! Presentation helpers for the list views. Nothing here mutates a store.

pub mod actions;
pub mod filter;
pub mod page;
pub mod render;

pub use actions::{Actionable, RowAction};
pub use filter::filter_companies;
pub use page::{Page, paginate};
