pub mod csv;

pub use csv::{csv_file_name, to_csv, write_csv};
