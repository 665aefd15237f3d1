//! Agent 使用度量
//!
//! 每次 Task 调用记录到 ~/.claude/agent-metrics.json，
//! 保留 24 小时滚动窗口并按使用模式给出优化建议。

pub mod complexity;
pub mod store;

// 重导出
pub use complexity::{estimate_complexity, suggest_optimizations, MAX_COMPLEXITY};
pub use store::{AgentStats, DailyStats, MetricsFile, MetricsStore, RecentCall};
