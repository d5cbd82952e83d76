use poll_promise::Promise;

use crate::data::{ListingKind, LoadError};
use crate::models::TableData;

pub type LoadPromise = Promise<Result<TableData, LoadError>>;

/// An in-flight fetch, tagged with the listing it will replace when it
/// resolves.
pub struct PendingLoad {
    pub kind: ListingKind,
    pub promise: LoadPromise,
}
