//! File Validation Hook
//!
//! Edit/Write/MultiEdit 之后重新读取目标文件做禁用模式扫描。
//! 非代码扩展名静默跳过，文件尚不存在也不算错。

use std::path::Path;

use crate::validator::{is_code_file, scan_file, PatternSet, ScanOutcome};

use super::payload::HookPayload;
use super::runner::HookOutput;

const FILE_TOOLS: &[&str] = &["Edit", "Write", "MultiEdit"];

pub fn run_validate_file_hook(payload: &HookPayload) -> HookOutput {
    let mut output = HookOutput::default();

    if !FILE_TOOLS.contains(&payload.tool_name.as_str()) {
        return output;
    }

    let Some(file_path) = payload
        .tool_input
        .file_path
        .as_deref()
        .filter(|p| !p.is_empty())
    else {
        return output;
    };

    let path = Path::new(file_path);
    if !is_code_file(path) {
        return output;
    }

    output.feedback.push(format!(
        "🔍 Validating code quality in {}...",
        basename(path)
    ));

    match scan_file(path, PatternSet::file_content()) {
        // Write 创建的新文件或空文件，不值得报告
        ScanOutcome::Skipped { .. } => {}
        ScanOutcome::Clean => {
            output
                .feedback
                .push("✅ Code quality check passed".to_string());
        }
        ScanOutcome::Violations(findings) => {
            output
                .feedback
                .push("⚠️ Code quality issues found:".to_string());
            for finding in &findings {
                output.feedback.push(format!(
                    "Line {}: '{}' ({})",
                    finding.line, finding.matched, finding.label
                ));
            }
            output.feedback.push(
                "Consider removing compatibility bloat and debugging remnants".to_string(),
            );
        }
        ScanOutcome::Degraded { diagnostic } => {
            output
                .feedback
                .push(format!("⚠️ File validation error: {}", diagnostic));
        }
    }

    output
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
