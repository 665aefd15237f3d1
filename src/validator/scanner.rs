//! Pattern Scanner
//! 逐行扫描文本，报告命中的禁用模式

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::patterns::{is_code_file, PatternSet};

/// 一次禁用模式命中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based 行号
    pub line: usize,
    /// 命中的文本片段
    pub matched: String,
    /// 命中模式的标签
    pub label: String,
}

/// 扫描结果
///
/// "零命中" 和 "扫描没跑起来" 是两种不同的结果，
/// 调用方据此打印不同的反馈行，但都不会中断宿主。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// 扫描完成，无命中
    Clean,
    /// 扫描完成，存在命中
    Violations(Vec<Finding>),
    /// 输入被有意跳过（非代码扩展名、空内容）
    Skipped { reason: String },
    /// 扫描无法执行（I/O 错误等）
    Degraded { diagnostic: String },
}

impl ScanOutcome {
    pub fn findings(&self) -> &[Finding] {
        match self {
            ScanOutcome::Violations(findings) => findings,
            _ => &[],
        }
    }
}

/// 逐行扫描文本
///
/// 同一行可以命中多条模式，每次命中独立上报。
/// 空行跳过。结果只由输入和模式集决定。
pub fn scan_text(text: &str, set: &PatternSet) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        for pattern in &set.patterns {
            if let Some(m) = pattern.regex.find(line) {
                findings.push(Finding {
                    line: idx + 1,
                    matched: m.as_str().trim().to_string(),
                    label: pattern.label.clone(),
                });
            }
        }
    }

    findings
}

/// 按路径过滤后扫描给定内容
pub fn scan_content(path: &Path, content: &str, set: &PatternSet) -> ScanOutcome {
    if !is_code_file(path) {
        return ScanOutcome::Skipped {
            reason: format!("non-code file: {}", path.display()),
        };
    }

    if content.is_empty() {
        return ScanOutcome::Skipped {
            reason: "empty file".to_string(),
        };
    }

    let findings = scan_text(content, set);
    if findings.is_empty() {
        ScanOutcome::Clean
    } else {
        ScanOutcome::Violations(findings)
    }
}

/// 从磁盘读取文件并扫描
pub fn scan_file(path: &Path, set: &PatternSet) -> ScanOutcome {
    if !is_code_file(path) {
        return ScanOutcome::Skipped {
            reason: format!("non-code file: {}", path.display()),
        };
    }

    match fs::read_to_string(path) {
        Ok(content) => scan_content(path, &content, set),
        // Write 工具创建新文件时，PostToolUse 之前文件可能尚不存在
        Err(e) if e.kind() == ErrorKind::NotFound => ScanOutcome::Skipped {
            reason: format!("file does not exist: {}", path.display()),
        },
        Err(e) => ScanOutcome::Degraded {
            diagnostic: format!("failed to read {}: {}", path.display(), e),
        },
    }
}
