//! Hook 统一执行器

use std::io::{self, Read};
use std::path::Path;

use crate::error::HookError;

use super::inject_context::run_inject_context_hook;
use super::payload::HookPayload;
use super::track_metrics::run_track_metrics_hook;
use super::validate_file::run_validate_file_hook;
use super::validate_result::run_validate_result_hook;

/// 单次 hook 执行的产出
///
/// context 走 stdout（宿主当作注入的上下文读取），
/// feedback 走 stderr（只给人看的建议行）。
#[derive(Debug, Default)]
pub struct HookOutput {
    pub context: Option<String>,
    pub feedback: Vec<String>,
}

impl HookOutput {
    pub fn note(line: impl Into<String>) -> Self {
        Self {
            context: None,
            feedback: vec![line.into()],
        }
    }
}

/// 运行指定的 hook
///
/// 这是所有 hook 的统一入口点。未知 hook 名只产生提示行，不报错。
pub fn run_hook(hook_name: &str, project_root: &Path, payload: &HookPayload) -> HookOutput {
    match hook_name {
        "validate_result" | "result_validator" => run_validate_result_hook(payload),

        "validate_file" | "file_validator" => run_validate_file_hook(payload),

        "inject_context" | "context_injection" => run_inject_context_hook(project_root, payload),

        "track_metrics" | "performance_monitor" => run_track_metrics_hook(payload),

        _ => HookOutput::note(format!("⚠️ Unknown hook: {}", hook_name)),
    }
}

/// 运行 hook（从 stdin 读取 payload）
///
/// 这是命令行调用的入口
pub fn run_hook_from_stdin(hook_name: &str, project_root: &Path) -> HookOutput {
    let mut stdin_data = String::new();
    let mut prelude = Vec::new();

    if let Err(e) = io::stdin().read_to_string(&mut stdin_data) {
        prelude.push(format!("⚠️ {}", HookError::from(e)));
    }

    let (payload, diagnostic) = HookPayload::parse(&stdin_data);
    if let Some(diag) = diagnostic {
        prelude.push(format!("⚠️ {}", diag));
    }

    let mut output = run_hook(hook_name, project_root, &payload);
    if !prelude.is_empty() {
        prelude.append(&mut output.feedback);
        output.feedback = prelude;
    }
    output
}

/// 打印 hook 产出：context → stdout，feedback → stderr
pub fn print_hook_output(output: &HookOutput) {
    if let Some(context) = &output.context {
        println!("{}", context);
    }
    for line in &output.feedback {
        eprintln!("{}", line);
    }
}
