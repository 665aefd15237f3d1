//! Metrics Store
//!
//! ~/.claude/agent-metrics.json 的读写与 24 小时滚动窗口维护。
//! 文件损坏时从空度量重新开始，保存失败只降级为 stderr 提示。

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::agents::AgentKind;
use crate::utils::{read_json_or_default, write_json};

use super::complexity::estimate_complexity;

const METRICS_FILE_NAME: &str = "agent-metrics.json";
const RETENTION_HOURS: i64 = 24;
const TASK_EXCERPT_CHARS: usize = 100;

/// 磁盘上的度量文件结构
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MetricsFile {
    #[serde(default)]
    pub agents: BTreeMap<String, AgentStats>,
    #[serde(default)]
    pub daily_stats: BTreeMap<String, DailyStats>,
    #[serde(default)]
    pub last_cleanup: Option<DateTime<Utc>>,
}

/// 单个 agent 的累计与近期统计
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AgentStats {
    #[serde(default)]
    pub total_calls: u64,
    #[serde(default)]
    pub recent_calls: Vec<RecentCall>,
    #[serde(default)]
    pub avg_complexity: f64,
}

/// 滚动窗口内的一次调用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentCall {
    pub timestamp: DateTime<Utc>,
    /// 任务描述截断到固定长度
    pub task: String,
    pub complexity: u8,
}

/// 按天聚合的统计
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    #[serde(default)]
    pub total_calls: u64,
    #[serde(default)]
    pub agents_used: Vec<String>,
}

/// 度量文件句柄
pub struct MetricsStore {
    path: PathBuf,
}

impl MetricsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认位置：~/.claude/agent-metrics.json
    pub fn default_location() -> Option<Self> {
        dirs::home_dir().map(|home| Self::at(home.join(".claude").join(METRICS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取度量，缺失或损坏的文件当作空度量
    pub fn load(&self) -> MetricsFile {
        read_json_or_default(&self.path)
    }

    pub fn save(&self, metrics: &MetricsFile) -> Result<()> {
        write_json(&self.path, metrics)
    }

    /// 记录一次 Task 调用，返回该 agent 更新后的统计
    pub fn record_invocation(
        &self,
        kind: AgentKind,
        task: &str,
        now: DateTime<Utc>,
    ) -> Result<AgentStats> {
        let mut metrics = self.load();
        let cutoff = now - Duration::hours(RETENTION_HOURS);

        let stats = metrics.agents.entry(kind.slug().to_string()).or_default();
        stats.total_calls += 1;
        stats.recent_calls.push(RecentCall {
            timestamp: now,
            task: excerpt(task),
            complexity: estimate_complexity(task),
        });
        stats.recent_calls.retain(|call| call.timestamp > cutoff);
        stats.avg_complexity = average_complexity(&stats.recent_calls);

        let updated = stats.clone();

        let day = now.format("%Y-%m-%d").to_string();
        let daily = metrics.daily_stats.entry(day).or_default();
        daily.total_calls += 1;
        let slug = kind.slug().to_string();
        if !daily.agents_used.contains(&slug) {
            daily.agents_used.push(slug);
            daily.agents_used.sort();
        }

        metrics.last_cleanup = Some(now);
        self.save(&metrics)?;

        Ok(updated)
    }
}

fn average_complexity(calls: &[RecentCall]) -> f64 {
    if calls.is_empty() {
        return 0.0;
    }
    let sum: u64 = calls.iter().map(|call| u64::from(call.complexity)).sum();
    sum as f64 / calls.len() as f64
}

/// 截断到固定字符数，保持 UTF-8 边界
fn excerpt(task: &str) -> String {
    task.chars().take(TASK_EXCERPT_CHARS).collect()
}
