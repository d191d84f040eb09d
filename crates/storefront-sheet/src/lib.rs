pub mod cell;
pub mod error;
pub mod export;
pub mod fetch;
pub mod matrix;
pub mod reader;
pub mod rows;
pub mod source;

pub use cell::Cell;
pub use error::SheetError;
pub use export::{
    export_json, export_xlsx, export_xlsx_to_buffer, to_json_string, DEFAULT_EXPORT_FILE,
};
pub use fetch::WorkbookFetcher;
pub use matrix::{load_matrix_from_path, products_from_matrix_sheets, MatrixImport, MatrixSummary};
pub use reader::{
    load_products_from_bytes, load_products_from_json, load_products_from_path,
    read_rows_from_bytes, read_rows_from_path,
};
pub use rows::{products_from_rows, ImportOptions};
pub use source::ImportSource;
