mod listing;
mod operations;
mod source;

pub use listing::ListingKind;
pub use operations::{LoadPromise, PendingLoad};
pub use source::{load_listing, parse_listing, DataSource, LoadError};
