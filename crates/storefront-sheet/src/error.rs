use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read workbook {context}: {source}")]
    Workbook {
        context: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("workbook {context} has no worksheets")]
    NoWorksheet { context: String },

    #[error("failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("catalog has {rows} products; a worksheet holds at most {max}")]
    TooManyRows { rows: usize, max: u32 },

    #[error("JSON error for {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
