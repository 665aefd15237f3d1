//! Result Validation Hook
//!
//! Task 完成后按 agent 类别校验输出质量。
//! 结论只进 stderr，无论结果如何都不阻塞宿主。

use crate::validator::{validate_agent_result, GateVerdict};

use super::payload::HookPayload;
use super::runner::HookOutput;

pub fn run_validate_result_hook(payload: &HookPayload) -> HookOutput {
    let mut output = HookOutput::default();

    if payload.tool_name != "Task" {
        return output;
    }

    let label = payload.agent_label();
    output
        .feedback
        .push(format!("🔍 Validating {} result...", label));

    match validate_agent_result(payload.agent_kind(), &payload.result_text()) {
        GateVerdict::Pass { note } => {
            output.feedback.push(format!("✅ {}", note));
        }
        GateVerdict::Fail { reason, findings } => {
            output
                .feedback
                .push(format!("⚠️ Quality gate failed: {}", reason));
            for finding in &findings {
                output.feedback.push(format!(
                    "Line {}: '{}' ({})",
                    finding.line, finding.matched, finding.label
                ));
            }
            output
                .feedback
                .push("Consider refining the task prompt or agent instructions".to_string());
        }
    }

    output
}
