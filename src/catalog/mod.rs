//! Pure, in-memory catalog operations: search filtering and category
//! grouping. Neither mutates the underlying records.

mod filter;
mod group;

pub use filter::filter_books;
pub use group::group_by_category;
