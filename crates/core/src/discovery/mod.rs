//! Event discovery: the user-editable filter state and the filter/sort
//! pipeline that turns a catalog snapshot into the browse listing.

mod filter;
mod pipeline;

pub use filter::{FilterState, SavedSearch, SortKey, ALL, PRICE_CAP_SENTINEL};
pub use pipeline::FilterPipeline;
