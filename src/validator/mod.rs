//! 内容验证模块
//!
//! 实现逐行禁用模式扫描和按 agent 类别的结果质量门。
//! 所有检查只产生建议性反馈，从不让调用方失败。

pub mod gates;
pub mod patterns;
pub mod scanner;

// 重导出
pub use gates::{validate_agent_result, GateVerdict, QualityGate};
pub use patterns::{is_code_file, ForbiddenPattern, PatternSet, CODE_EXTENSIONS};
pub use scanner::{scan_content, scan_file, scan_text, Finding, ScanOutcome};
