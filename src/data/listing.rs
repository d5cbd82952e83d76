/// The two listings the app knows about. Each maps to one CSV file and a
/// small set of column-name conventions; everything beyond these names is
/// taken from the file's own header at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Tours,
    Festivals,
}

impl ListingKind {
    pub const ALL: [ListingKind; 2] = [ListingKind::Tours, ListingKind::Festivals];

    pub fn title(self) -> &'static str {
        match self {
            ListingKind::Tours => "Tours",
            ListingKind::Festivals => "Festivals",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ListingKind::Tours => "tours.csv",
            ListingKind::Festivals => "festivals.csv",
        }
    }

    pub fn export_file_name(self) -> &'static str {
        match self {
            ListingKind::Tours => "tours.html",
            ListingKind::Festivals => "festivals.html",
        }
    }

    /// Acceptable names for the date column. Tour files conventionally say
    /// "Date" and festival files "Dates"; either is accepted in both.
    pub fn date_columns(self) -> &'static [&'static str] {
        &["Date", "Dates"]
    }

    /// The primary-name column, rendered as a hyperlink when a source URL
    /// is present.
    pub fn name_column(self) -> &'static str {
        match self {
            ListingKind::Tours => "Tour Name",
            ListingKind::Festivals => "Festival Name",
        }
    }

    /// Hidden companion column holding the link target.
    pub fn url_column(self) -> &'static str {
        "Source URL"
    }
}
