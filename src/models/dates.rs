use chrono::{Datelike, NaiveDate};

/// Calendar range derived from one free-text date cell.
///
/// Listing files carry dates the way promoters write them: `"Jun 18, 2026"`,
/// `"Jun 18-21, 2026"`, `"Jun 18, 2026 – Jun 21, 2026"`, sometimes
/// `"Jun 5-7 & Sep 1-3, 2026"`. Parsing is best effort; an endpoint that
/// cannot be resolved into a real calendar date stays `None`, and a row
/// without a start date is exempt from date filtering rather than hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// End date used for window comparisons; falls back to `start` when the
    /// right endpoint did not parse.
    pub fn effective_end(&self) -> Option<NaiveDate> {
        self.end.or(self.start)
    }

    /// True when the range touches the inclusive window `[from, to]`.
    /// Half-open windows are allowed; a range with no start always passes.
    pub fn overlaps(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        let start = match self.start {
            Some(start) => start,
            None => return true,
        };
        let end = self.effective_end().unwrap_or(start);

        if let Some(from) = from {
            if end < from {
                return false;
            }
        }
        if let Some(to) = to {
            if start > to {
                return false;
            }
        }
        true
    }
}

/// Parse a free-text date or date range into a `DateRange`.
///
/// Steps: dash variants are normalized to `-`; `"a & b"` compounds collapse
/// to a covering range (first start, last end); a bare-day right segment
/// borrows the month from the left segment; a segment without a year borrows
/// the first four-digit year found anywhere in the text. Segments that still
/// fail to resolve yield absent endpoints. Never panics.
pub fn parse_date_range(text: &str) -> DateRange {
    let cleaned: String = text
        .chars()
        .map(|c| match c {
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            other => other,
        })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return DateRange::default();
    }

    let fallback_year = scan(cleaned).year;

    // "range1 & range2" approximates disjoint sub-ranges as one covering
    // interval: first sub-range's start through last sub-range's end.
    let parts: Vec<&str> = cleaned.split('&').collect();
    let raw = if parts.len() > 1 {
        let first = sub_range(parts[0], None, fallback_year);
        // "Oct 9 & 10" leaves the trailing part month-less.
        let borrow = scan(parts[0]).month;
        let last = sub_range(parts[parts.len() - 1], borrow, fallback_year);
        let (end, end_borrowed) = if last.end.is_some() {
            (last.end, last.end_borrowed)
        } else {
            (last.start, last.start_borrowed)
        };
        RawRange {
            start: first.start,
            start_borrowed: first.start_borrowed,
            end,
            end_borrowed,
        }
    } else {
        sub_range(cleaned, None, fallback_year)
    };

    raw.into_ordered()
}

/// Parsed endpoints plus whether each year was inferred rather than written.
/// The flags drive the ordering repair in `into_ordered`.
struct RawRange {
    start: Option<NaiveDate>,
    start_borrowed: bool,
    end: Option<NaiveDate>,
    end_borrowed: bool,
}

impl RawRange {
    /// Enforce `end >= start`. A borrowed year is the usual culprit when a
    /// range crosses New Year ("Dec 30 - Jan 2, 2026"), so the borrowed
    /// endpoint shifts by one year first; two explicit years simply swap.
    fn into_ordered(self) -> DateRange {
        let (start, end) = match (self.start, self.end) {
            (Some(s), Some(e)) if e < s => {
                if self.end_borrowed {
                    match with_year_offset(e, 1) {
                        Some(e2) if e2 >= s => (Some(s), Some(e2)),
                        _ => (Some(e), Some(s)),
                    }
                } else if self.start_borrowed {
                    match with_year_offset(s, -1) {
                        Some(s2) if e >= s2 => (Some(s2), Some(e)),
                        _ => (Some(e), Some(s)),
                    }
                } else {
                    (Some(e), Some(s))
                }
            }
            other => other,
        };
        DateRange { start, end }
    }
}

fn with_year_offset(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year() + offset, date.month(), date.day())
}

/// One sub-range: either a single date or `left - right`.
fn sub_range(text: &str, borrow_month: Option<u32>, fallback_year: Option<i32>) -> RawRange {
    let text = text.trim();

    // A lone ISO date would otherwise be shredded by the dash split below.
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return RawRange {
            start: Some(date),
            start_borrowed: false,
            end: Some(date),
            end_borrowed: false,
        };
    }

    // Prefer a spaced separator so ISO endpoints survive; fall back to the
    // first bare dash for compact forms like "Jun 18-21".
    let split = text
        .split_once(" - ")
        .or_else(|| text.split_once('-'));

    match split {
        Some((left, right)) => {
            let (start, start_borrowed) = resolve(left, borrow_month, fallback_year);
            let left_month = scan(left).month.or(borrow_month);
            let (end, end_borrowed) = resolve(right, left_month, fallback_year);
            RawRange {
                start,
                start_borrowed,
                end,
                end_borrowed,
            }
        }
        None => {
            let (date, borrowed) = resolve(text, borrow_month, fallback_year);
            RawRange {
                start: date,
                start_borrowed: borrowed,
                end: date,
                end_borrowed: borrowed,
            }
        }
    }
}

/// Resolve one segment to a date. Returns the date plus whether the year was
/// borrowed from surrounding text.
fn resolve(
    segment: &str,
    borrow_month: Option<u32>,
    fallback_year: Option<i32>,
) -> (Option<NaiveDate>, bool) {
    let segment = segment.trim().trim_matches('-').trim();

    if let Ok(date) = NaiveDate::parse_from_str(segment, "%Y-%m-%d") {
        return (Some(date), false);
    }

    let found = scan(segment);
    let month = match found.month.or(borrow_month) {
        Some(month) => month,
        None => return (None, false),
    };
    let day = match found.day {
        Some(day) => day,
        None => return (None, false),
    };
    let (year, borrowed) = match found.year {
        Some(year) => (year, false),
        None => match fallback_year {
            Some(year) => (year, true),
            None => return (None, false),
        },
    };

    // from_ymd_opt rejects impossible dates (Feb 30) for us.
    (NaiveDate::from_ymd_opt(year, month, day), borrowed)
}

#[derive(Default)]
struct Scan {
    month: Option<u32>,
    day: Option<u32>,
    year: Option<i32>,
}

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Pick the first month word, 1-2 digit day, and 4-digit year out of a text
/// fragment. Ordinal suffixes ("18th") count as days.
fn scan(text: &str) -> Scan {
    let mut found = Scan::default();
    for token in text.split(|c: char| !c.is_ascii_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        if token.as_bytes()[0].is_ascii_digit() {
            let digits: &str = &token[..token
                .bytes()
                .take_while(|b| b.is_ascii_digit())
                .count()];
            let rest = &token[digits.len()..];
            if !rest.is_empty()
                && !matches!(rest.to_ascii_lowercase().as_str(), "st" | "nd" | "rd" | "th")
            {
                continue;
            }
            match digits.len() {
                4 => {
                    if found.year.is_none() {
                        found.year = digits.parse().ok();
                    }
                }
                1 | 2 => {
                    if found.day.is_none() {
                        found.day = digits.parse().ok();
                    }
                }
                _ => {}
            }
        } else if found.month.is_none() {
            found.month = month_number(token);
        }
    }
    found
}

/// Case-insensitive prefix match against English month names; at least three
/// letters so "Jun", "June", "Sept" all land and stray words do not.
fn month_number(token: &str) -> Option<u32> {
    if token.len() < 3 {
        return None;
    }
    let lower = token.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|name| name.starts_with(&lower))
        .map(|index| index as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn single(date: NaiveDate) -> DateRange {
        DateRange {
            start: Some(date),
            end: Some(date),
        }
    }

    #[test]
    fn single_date_sets_both_endpoints() {
        let range = parse_date_range("Jun 18, 2026");
        assert_eq!(range.start, Some(d(2026, 6, 18)));
        assert_eq!(range.end, Some(d(2026, 6, 18)));
    }

    #[test]
    fn full_range_with_en_dash() {
        let range = parse_date_range("Jun 18, 2026 \u{2013} Jun 21, 2026");
        assert_eq!(range.start, Some(d(2026, 6, 18)));
        assert_eq!(range.end, Some(d(2026, 6, 21)));
    }

    #[test]
    fn bare_day_borrows_month_and_year() {
        let range = parse_date_range("Jun 18-21, 2026");
        assert_eq!(range.start, Some(d(2026, 6, 18)));
        assert_eq!(range.end, Some(d(2026, 6, 21)));
    }

    #[test]
    fn right_segment_borrows_trailing_year() {
        let range = parse_date_range("Jun 18 - Jun 21, 2026");
        assert_eq!(range.start, Some(d(2026, 6, 18)));
        assert_eq!(range.end, Some(d(2026, 6, 21)));
    }

    #[test]
    fn compound_ranges_collapse_to_covering_interval() {
        let range = parse_date_range("Jun 5-7 & Sep 1-3, 2026");
        assert_eq!(range.start, Some(d(2026, 6, 5)));
        assert_eq!(range.end, Some(d(2026, 9, 3)));
    }

    #[test]
    fn compound_bare_days_borrow_the_first_month() {
        let range = parse_date_range("Oct 9 & 10, 2026");
        assert_eq!(range.start, Some(d(2026, 10, 9)));
        assert_eq!(range.end, Some(d(2026, 10, 10)));

        // Middle parts are skipped; the interval covers first through last.
        let range = parse_date_range("Aug 7 & 8 & 9, 2026");
        assert_eq!(range.start, Some(d(2026, 8, 7)));
        assert_eq!(range.end, Some(d(2026, 8, 9)));
    }

    #[test]
    fn empty_and_garbage_fail_open() {
        for text in ["", "   ", "not a date", "TBA", "2026"] {
            let range = parse_date_range(text);
            assert_eq!(range, DateRange::default(), "input: {text:?}");
            assert!(range.overlaps(Some(d(2026, 1, 1)), Some(d(2026, 12, 31))));
        }
    }

    #[test]
    fn day_without_any_year_fails_open() {
        // Guessing the current year would make results depend on the clock.
        assert_eq!(parse_date_range("Jun 18"), DateRange::default());
    }

    #[test]
    fn new_year_rollover_keeps_endpoints_ordered() {
        // Year is written once and belongs to the right side; the left side
        // borrowed it and lands a year too late until repaired.
        let range = parse_date_range("Dec 30 - Jan 2, 2026");
        assert_eq!(range.start, Some(d(2025, 12, 30)));
        assert_eq!(range.end, Some(d(2026, 1, 2)));
        assert!(range.end >= range.start);
    }

    #[test]
    fn rollover_with_explicit_start_year_bumps_end() {
        let range = parse_date_range("Dec 28, 2026 - Jan 3");
        assert_eq!(range.start, Some(d(2026, 12, 28)));
        assert_eq!(range.end, Some(d(2027, 1, 3)));
    }

    #[test]
    fn reversed_explicit_dates_swap() {
        let range = parse_date_range("Jun 21, 2026 - Jun 18, 2026");
        assert_eq!(range.start, Some(d(2026, 6, 18)));
        assert_eq!(range.end, Some(d(2026, 6, 21)));
    }

    #[test]
    fn ordinal_suffixes_parse_as_days() {
        let range = parse_date_range("June 18th, 2026");
        assert_eq!(range, single(d(2026, 6, 18)));
    }

    #[test]
    fn month_name_prefixes_resolve() {
        assert_eq!(parse_date_range("Sept 4, 2026"), single(d(2026, 9, 4)));
        assert_eq!(parse_date_range("September 4 2026"), single(d(2026, 9, 4)));
    }

    #[test]
    fn iso_dates_pass_through() {
        assert_eq!(parse_date_range("2026-06-18"), single(d(2026, 6, 18)));
        let range = parse_date_range("2026-06-18 - 2026-06-21");
        assert_eq!(range.start, Some(d(2026, 6, 18)));
        assert_eq!(range.end, Some(d(2026, 6, 21)));
    }

    #[test]
    fn unparseable_right_segment_leaves_end_absent() {
        let range = parse_date_range("Jun 18, 2026 - TBD");
        assert_eq!(range.start, Some(d(2026, 6, 18)));
        assert_eq!(range.end, None);
        assert_eq!(range.effective_end(), Some(d(2026, 6, 18)));
    }

    #[test]
    fn unparseable_left_segment_fails_open_despite_end() {
        let range = parse_date_range("?? - Jun 21, 2026");
        assert_eq!(range.start, None);
        assert_eq!(range.end, Some(d(2026, 6, 21)));
        // No start means the row can never be excluded by a window.
        assert!(range.overlaps(Some(d(2030, 1, 1)), Some(d(2030, 12, 31))));
    }

    #[test]
    fn impossible_calendar_dates_are_rejected() {
        assert_eq!(parse_date_range("Feb 30, 2026"), DateRange::default());
    }

    #[test]
    fn overlap_window_edges_are_inclusive() {
        let range = parse_date_range("Jun 18, 2026 - Jun 21, 2026");
        assert!(range.overlaps(Some(d(2026, 6, 21)), None));
        assert!(range.overlaps(None, Some(d(2026, 6, 18))));
        assert!(!range.overlaps(Some(d(2026, 6, 22)), None));
        assert!(!range.overlaps(None, Some(d(2026, 6, 17))));
    }
}
