use std::path::PathBuf;

use thiserror::Error;

use crate::data::ListingKind;
use crate::models::{parse_date_range, TableData};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },
    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV in {name}: {source}")]
    Csv {
        name: String,
        #[source]
        source: csv::Error,
    },
    #[error("{name} has no header row")]
    MissingHeader { name: String },
}

/// Where the listing files live: a local directory or an HTTP base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Dir(PathBuf),
    Remote(String),
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            DataSource::Dir(path) => format!("directory {}", path.display()),
            DataSource::Remote(base) => base.clone(),
        }
    }

    /// Directory HTML exports land in: beside local data, or the working
    /// directory when the data only exists remotely.
    pub fn export_dir(&self) -> PathBuf {
        match self {
            DataSource::Dir(path) => path.clone(),
            DataSource::Remote(_) => PathBuf::from("."),
        }
    }

    async fn fetch(&self, file_name: &str) -> Result<String, LoadError> {
        match self {
            DataSource::Dir(dir) => {
                let path = dir.join(file_name);
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| LoadError::Io { path, source })
            }
            DataSource::Remote(base) => {
                let url = format!("{}/{}", base.trim_end_matches('/'), file_name);
                let response = reqwest::get(&url)
                    .await
                    .map_err(|source| LoadError::Http {
                        url: url.clone(),
                        source,
                    })?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status {
                        url,
                        status: status.as_u16(),
                    });
                }
                response.text().await.map_err(|source| LoadError::Http {
                    url,
                    source,
                })
            }
        }
    }
}

/// Fetch and parse one listing. Safe to call repeatedly; the result replaces
/// whatever was installed before and nothing is cached here.
pub async fn load_listing(source: &DataSource, kind: ListingKind) -> Result<TableData, LoadError> {
    let body = source.fetch(kind.file_name()).await?;
    parse_listing(kind, &body)
}

/// Parse CSV text into a `TableData`: first record is the header, blank
/// records are skipped, short records are padded to the header width, and
/// one `DateRange` is derived per row from the listing's date column.
pub fn parse_listing(kind: ListingKind, text: &str) -> Result<TableData, LoadError> {
    let name = kind.file_name();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(|source| LoadError::Csv {
        name: name.to_string(),
        source,
    })?;
    let columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    if columns.iter().all(|c| c.is_empty()) {
        return Err(LoadError::MissingHeader {
            name: name.to_string(),
        });
    }

    let find = |names: &[&str]| -> Option<usize> {
        columns
            .iter()
            .position(|col| names.iter().any(|n| col.eq_ignore_ascii_case(n)))
    };
    let date_col = find(kind.date_columns());
    let name_col = find(&[kind.name_column()]);
    let url_col = find(&[kind.url_column()]);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut ranges = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv {
            name: name.to_string(),
            source,
        })?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let mut cells: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        cells.resize(columns.len(), String::new());

        let range = match date_col {
            Some(col) => parse_date_range(&cells[col]),
            None => Default::default(),
        };
        ranges.push(range);
        rows.push(cells);
    }

    Ok(TableData {
        title: kind.title().to_string(),
        columns,
        rows,
        ranges,
        date_col,
        name_col,
        url_col,
    })
}
