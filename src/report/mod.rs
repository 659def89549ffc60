pub mod render;

pub use render::{render_json, render_rank_line, render_report, OutputFormat};
