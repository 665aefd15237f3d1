//! Metrics Hook
//!
//! 记录 Task 调用到度量文件，并在 stderr 上回报使用统计与建议。

use chrono::Utc;

use crate::metrics::{suggest_optimizations, MetricsStore};

use super::payload::HookPayload;
use super::runner::HookOutput;

pub fn run_track_metrics_hook(payload: &HookPayload) -> HookOutput {
    run_with_store(payload, MetricsStore::default_location().as_ref())
}

pub(crate) fn run_with_store(payload: &HookPayload, store: Option<&MetricsStore>) -> HookOutput {
    let mut output = HookOutput::default();

    if payload.tool_name != "Task" {
        return output;
    }

    let Some(store) = store else {
        output
            .feedback
            .push("⚠️ Monitoring error: cannot locate home directory".to_string());
        return output;
    };

    let label = payload.agent_label();
    output
        .feedback
        .push(format!("📊 Recording {} invocation...", label));

    let task = payload.tool_input.prompt.as_deref().unwrap_or("");
    match store.record_invocation(payload.agent_kind(), task, Utc::now()) {
        Ok(stats) => {
            output.feedback.push(format!(
                "Agent calls: {} (avg complexity: {:.1})",
                stats.total_calls, stats.avg_complexity
            ));
            for suggestion in suggest_optimizations(&stats) {
                output.feedback.push(format!("💡 {}", suggestion));
            }
        }
        Err(e) => {
            output
                .feedback
                .push(format!("⚠️ Monitoring error: {}", e));
        }
    }

    output
}
