pub mod analysis;
pub mod catalog;
pub mod error;
pub mod export;
pub mod report;
pub mod script;

pub use analysis::{AnalysisResult, analyze};

pub const TOOL_NAME: &str = "threatscope";
