pub mod formatter;

pub use formatter::{format_currency, format_row, ReportFormatter, REPORT_TITLE};
