pub mod config;
pub mod error;

pub use config::{AnalyzerConfig, Config, DashPolicy, ReportConfig};
pub use error::load_text_file;
