use chrono::NaiveDate;

use crate::models::TableData;

/// Shared filter inputs: one free-text term and an inclusive date window.
/// All three are held as raw input text; bounds parse on demand and
/// malformed input simply behaves as an unset bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub date_from: String,
    pub date_to: String,
}

impl FilterState {
    /// Reset the term and both bounds in one step.
    pub fn clear(&mut self) {
        self.search.clear();
        self.date_from.clear();
        self.date_to.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.date_from.trim().is_empty()
            && self.date_to.trim().is_empty()
    }

    pub fn from_bound(&self) -> Option<NaiveDate> {
        parse_bound(&self.date_from)
    }

    pub fn to_bound(&self) -> Option<NaiveDate> {
        parse_bound(&self.date_to)
    }

    /// The row predicate: text match over displayed columns AND date-window
    /// overlap, both optional, both conjunctive. Rows without a derivable
    /// start date are exempt from the window (fail-open).
    pub fn matches(&self, data: &TableData, row: usize) -> bool {
        let term = self.search.trim().to_lowercase();
        if !term.is_empty() {
            let hit = data
                .display_columns()
                .iter()
                .any(|&col| data.cell(row, col).to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        let from = self.from_bound();
        let to = self.to_bound();
        if from.is_none() && to.is_none() {
            return true;
        }
        data.range(row).overlaps(from, to)
    }

    /// Filter a row ordering down to the visible set. Evaluation is pure:
    /// nothing in `data` is touched, so the inactive listing's tables are
    /// unaffected no matter what the filter says.
    pub fn visible_rows(&self, data: &TableData, order: &[usize]) -> Vec<usize> {
        if self.is_empty() {
            return order.to_vec();
        }
        order
            .iter()
            .copied()
            .filter(|&row| self.matches(data, row))
            .collect()
    }
}

/// Strict `YYYY-MM-DD`; anything else is treated as "no bound set".
pub fn parse_bound(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date_range;

    fn listing(title: &str, name_col: &str, rows: &[&[&str]]) -> TableData {
        let columns = vec![
            name_col.to_string(),
            "Date".to_string(),
            "Venue".to_string(),
            "Source URL".to_string(),
        ];
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|cells| cells.iter().map(|c| c.to_string()).collect())
            .collect();
        let ranges = rows
            .iter()
            .map(|cells: &Vec<String>| parse_date_range(&cells[1]))
            .collect();
        TableData {
            title: title.to_string(),
            columns,
            rows,
            ranges,
            date_col: Some(1),
            name_col: Some(0),
            url_col: Some(3),
        }
    }

    fn tours() -> TableData {
        listing(
            "Tours",
            "Tour Name",
            &[
                &["Neon Nights", "Jun 20, 2026 - Jun 25, 2026", "Metro Arena", ""],
                &["Acoustic Run", "Jul 1, 2026", "Riverside Hall", ""],
                &["Mystery Tour", "TBA", "Metro Arena", "https://example.com/metro"],
            ],
        )
    }

    fn order(data: &TableData) -> Vec<usize> {
        (0..data.rows.len()).collect()
    }

    fn window(from: &str, to: &str) -> FilterState {
        FilterState {
            search: String::new(),
            date_from: from.to_string(),
            date_to: to.to_string(),
        }
    }

    #[test]
    fn date_window_overlap() {
        let data = tours();
        let filter = window("2026-06-01", "2026-06-30");
        let visible = filter.visible_rows(&data, &order(&data));
        // In-window range passes, July row is out, TBA fails open.
        assert_eq!(visible, vec![0, 2]);
    }

    #[test]
    fn half_open_windows() {
        let data = tours();
        assert_eq!(
            window("2026-06-26", "").visible_rows(&data, &order(&data)),
            vec![1, 2]
        );
        assert_eq!(
            window("", "2026-06-30").visible_rows(&data, &order(&data)),
            vec![0, 2]
        );
    }

    #[test]
    fn text_match_is_case_insensitive_substring() {
        let data = tours();
        let filter = FilterState {
            search: "metro".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.visible_rows(&data, &order(&data)), vec![0, 2]);
    }

    #[test]
    fn suppressed_url_column_is_not_searched() {
        let data = tours();
        let filter = FilterState {
            search: "example.com".to_string(),
            ..Default::default()
        };
        assert!(filter.visible_rows(&data, &order(&data)).is_empty());
    }

    #[test]
    fn filters_are_conjunctive() {
        let data = tours();
        let filter = FilterState {
            search: "metro".to_string(),
            date_from: "2026-07-01".to_string(),
            date_to: "2026-07-31".to_string(),
        };
        // "Neon Nights" matches the term but not the window; the TBA row
        // matches the term and is window-exempt.
        assert_eq!(filter.visible_rows(&data, &order(&data)), vec![2]);
    }

    #[test]
    fn malformed_bound_acts_unset() {
        let data = tours();
        let filter = window("06/01/2026", "soon");
        assert_eq!(filter.visible_rows(&data, &order(&data)), vec![0, 1, 2]);
        assert_eq!(filter.from_bound(), None);
        assert_eq!(filter.to_bound(), None);
    }

    #[test]
    fn clear_resets_all_fields_at_once() {
        let mut filter = FilterState {
            search: "metro".to_string(),
            date_from: "2026-06-01".to_string(),
            date_to: "2026-06-30".to_string(),
        };
        filter.clear();
        assert!(filter.is_empty());
        let data = tours();
        assert_eq!(filter.visible_rows(&data, &order(&data)), vec![0, 1, 2]);
    }

    #[test]
    fn respects_row_order_permutation() {
        let data = tours();
        let filter = window("2026-06-01", "2026-12-31");
        assert_eq!(filter.visible_rows(&data, &[2, 1, 0]), vec![2, 1, 0]);
    }

    #[test]
    fn evaluating_one_listing_leaves_the_other_untouched() {
        let tours = tours();
        let festivals = listing(
            "Festivals",
            "Festival Name",
            &[
                &["Harbor Fest", "Jun 5-7, 2026", "Docklands", ""],
                &["Pine Ridge", "Aug 14-16, 2026", "Pine Ridge", ""],
            ],
        );
        let before = festivals.clone();

        let filter = window("2026-06-01", "2026-06-30");
        let tours_visible = filter.visible_rows(&tours, &order(&tours));
        assert_eq!(tours_visible.len(), 2);

        // The shared filter narrows tours without mutating festivals; the
        // festivals count is computed independently, on demand.
        assert_eq!(festivals, before);
        let festivals_visible = filter.visible_rows(&festivals, &order(&festivals));
        assert_eq!(festivals_visible, vec![0]);
    }
}
