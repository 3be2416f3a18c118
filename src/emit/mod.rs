//! Column CSV output

mod csv_writer;

pub use csv_writer::{write_column_csv, write_columns, HeaderLanguage, UTF8_BOM};
