//! Output generation for season reports.

pub mod common;
pub mod json;

pub use common::{REPORT_FILE_NAME, ensure_parent_dir, report_path};
pub use json::{render_season_report, write_season_report};
