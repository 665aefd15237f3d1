//! Context Injection Hook
//!
//! Task 启动前采集项目快照写到 stdout，宿主把它拼进 agent 的上下文。

use std::path::Path;

use crate::context::ContextSnapshot;

use super::payload::HookPayload;
use super::runner::HookOutput;

pub fn run_inject_context_hook(project_root: &Path, payload: &HookPayload) -> HookOutput {
    let mut output = HookOutput::default();

    if payload.tool_name != "Task" {
        return output;
    }

    let label = payload.agent_label();
    output
        .feedback
        .push(format!("🧠 Injecting context for {}...", label));

    let snapshot = ContextSnapshot::gather(project_root, payload.agent_kind());
    output.context = Some(snapshot.render());

    output
        .feedback
        .push(format!("✅ Basic context injected for {}", label));

    output
}
