mod dates;
mod filter;
mod table;

pub use dates::{parse_date_range, DateRange};
pub use filter::{parse_bound, FilterState};
pub use table::{TableData, TableState};
