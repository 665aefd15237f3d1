//! 任务复杂度估计与优化建议

use std::collections::HashSet;

use super::store::AgentStats;

/// 复杂度上限
pub const MAX_COMPLEXITY: u8 = 5;

/// 动词关键字到复杂度的映射，取最大值而不是累加
const COMPLEXITY_KEYWORDS: &[(&str, u8)] = &[
    ("implement", 3),
    ("create", 3),
    ("build", 4),
    ("design", 4),
    ("refactor", 3),
    ("migrate", 4),
    ("integrate", 4),
    ("fix", 2),
    ("update", 2),
    ("modify", 2),
    ("analyze", 2),
    ("review", 2),
    ("document", 2),
    ("test", 2),
    ("debug", 3),
    ("optimize", 3),
];

const LONG_TASK_THRESHOLD: usize = 200;

/// 从任务描述估计复杂度（1-5）
pub fn estimate_complexity(task: &str) -> u8 {
    let lower = task.to_lowercase();
    let mut base: u8 = 1;

    for word in lower.split_whitespace() {
        if let Some((_, weight)) = COMPLEXITY_KEYWORDS.iter().find(|(key, _)| *key == word) {
            base = base.max(*weight);
        }
    }

    if task.len() > LONG_TASK_THRESHOLD {
        base += 1;
    }

    base.min(MAX_COMPLEXITY)
}

/// 基于使用模式的优化建议
pub fn suggest_optimizations(stats: &AgentStats) -> Vec<String> {
    let mut suggestions = Vec::new();

    // 高频低复杂度：调用开销可能超过任务本身
    if stats.total_calls > 10 && stats.avg_complexity < 2.0 {
        suggestions.push("Consider combining simple tasks to reduce overhead".to_string());
    }

    // 最近 5 次任务的去重数太低说明在重复劳动
    if stats.recent_calls.len() > 5 {
        let tail = &stats.recent_calls[stats.recent_calls.len() - 5..];
        let distinct: HashSet<&str> = tail.iter().map(|call| call.task.as_str()).collect();
        if distinct.len() < 3 {
            suggestions.push("Detected repetitive tasks - consider batch processing".to_string());
        }
    }

    suggestions
}
