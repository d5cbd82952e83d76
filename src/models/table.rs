use std::cmp::Ordering;

use crate::models::DateRange;

/// One loaded listing: header, rows, and the per-row derived date ranges.
///
/// `date_col`, `name_col` and `url_col` are resolved against the CSV header
/// at load time; any of them may be absent, and every consumer degrades
/// (no date filtering, plain-text names, no links) rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct TableData {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub ranges: Vec<DateRange>,
    pub date_col: Option<usize>,
    pub name_col: Option<usize>,
    pub url_col: Option<usize>,
}

impl TableData {
    /// Column indices shown to the user. The source-URL column feeds link
    /// rendering but is never displayed; derived ranges are model-only.
    pub fn display_columns(&self) -> Vec<usize> {
        (0..self.columns.len())
            .filter(|&col| Some(col) != self.url_col)
            .collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Link target for a row's primary-name cell, if the source-URL cell is
    /// non-blank after trimming.
    pub fn link_for(&self, row: usize) -> Option<&str> {
        let url = self.cell(row, self.url_col?).trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }

    pub fn range(&self, row: usize) -> DateRange {
        self.ranges.get(row).copied().unwrap_or_default()
    }
}

/// Per-listing display state. Replaced wholesale whenever a load completes:
/// sort, paging, and the grid's cached widget layout (via `grid_epoch`) must
/// not survive a reload, or the old rendering would shine through the new
/// data.
pub struct TableState {
    pub data: Option<TableData>,
    pub is_loading: bool,
    pub load_error: Option<String>,
    pub sort_column: Option<usize>,
    pub sort_ascending: bool,
    /// Row permutation realizing the active sort; indices into `data.rows`.
    pub row_order: Vec<usize>,
    pub current_page: usize,
    pub page_size: usize,
    /// Folded into the grid widget's id; bumping it discards all cached
    /// column-width state for this listing.
    pub grid_epoch: u64,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            data: None,
            is_loading: false,
            load_error: None,
            sort_column: None,
            sort_ascending: true,
            row_order: Vec::new(),
            current_page: 0,
            page_size: 50,
            grid_epoch: 0,
        }
    }

    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.load_error = None;
    }

    /// Install freshly loaded data, discarding everything derived from the
    /// previous load. Calling this twice leaves exactly one table's worth of
    /// rows and one widget instance.
    pub fn install(&mut self, data: TableData) {
        self.row_order = (0..data.rows.len()).collect();
        self.data = Some(data);
        self.is_loading = false;
        self.load_error = None;
        self.sort_column = None;
        self.sort_ascending = true;
        self.current_page = 0;
        self.grid_epoch += 1;
    }

    pub fn fail(&mut self, message: String) {
        self.is_loading = false;
        self.load_error = Some(message);
    }

    pub fn bump_epoch(&mut self) {
        self.grid_epoch += 1;
    }

    /// Toggle sort direction when the same column is clicked again,
    /// otherwise sort ascending by the new column.
    pub fn sort_by(&mut self, column: usize) {
        if self.sort_column == Some(column) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_column = Some(column);
            self.sort_ascending = true;
        }
        self.apply_sort();
    }

    fn apply_sort(&mut self) {
        let data = match &self.data {
            Some(data) => data,
            None => return,
        };
        let column = match self.sort_column {
            Some(column) => column,
            None => return,
        };
        let ascending = self.sort_ascending;
        let by_date = data.date_col == Some(column);

        self.row_order.sort_by(|&a, &b| {
            let ord = if by_date {
                // The visible cell is free text; order by the derived start
                // date instead, unknown dates after dated rows.
                match (data.range(a).start, data.range(b).start) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            } else {
                compare_cells(data.cell(a, column), data.cell(b, column))
            };
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    pub fn page_count(total_rows: usize, page_size: usize) -> usize {
        total_rows.div_ceil(page_size.max(1)).max(1)
    }

    /// Keep the current page in range after filtering shrank the row set.
    pub fn clamp_page(&mut self, visible_rows: usize) {
        let last = Self::page_count(visible_rows, self.page_size) - 1;
        if self.current_page > last {
            self.current_page = last;
        }
    }
}

/// Numbers compare numerically, everything else lexically.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}
