//! Hook 模块
//!
//! 实现 hooks：validate_result, validate_file, inject_context, track_metrics

pub mod inject_context;
pub mod payload;
pub mod runner;
pub mod track_metrics;
pub mod validate_file;
pub mod validate_result;

// 重导出
pub use inject_context::*;
pub use payload::*;
pub use runner::*;
pub use track_metrics::*;
pub use validate_file::*;
pub use validate_result::*;
