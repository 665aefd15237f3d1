//! Statusline 渲染
//!
//! 宿主通过 stdin 传入模型和工作区信息，这里补上 git 事实后
//! 拼成单行状态。目录不在 git 仓库内时只剩模型段。

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::utils::git;

const SEGMENT_SEPARATOR: &str = " | ";

/// 宿主传入的 statusline payload
#[derive(Debug, Default, Deserialize)]
pub struct StatuslinePayload {
    #[serde(default)]
    pub model: ModelInfo,
    #[serde(default)]
    pub workspace: WorkspaceInfo,
}

#[derive(Debug, Default, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkspaceInfo {
    #[serde(default)]
    pub current_dir: Option<String>,
}

impl StatuslinePayload {
    /// 工作目录：payload 指定的目录，否则进程 cwd
    fn resolve_dir(&self) -> Option<PathBuf> {
        self.workspace
            .current_dir
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .or_else(|| env::current_dir().ok())
    }
}

/// 拼接状态行，缺失的段直接省略
pub fn render_statusline(payload: &StatuslinePayload) -> String {
    let mut segments = Vec::new();

    if let Some(model) = payload.model.display_name.as_deref() {
        if !model.is_empty() {
            segments.push(model.to_string());
        }
    }

    if let Some(dir) = payload.resolve_dir() {
        append_workspace_segments(&dir, &mut segments);
    }

    segments.join(SEGMENT_SEPARATOR)
}

/// 目录名和 git 段只在仓库内有意义
fn append_workspace_segments(dir: &Path, segments: &mut Vec<String>) {
    if !git::is_git_repo(Some(dir)) {
        return;
    }

    if let Some(name) = dir.file_name() {
        segments.push(name.to_string_lossy().to_string());
    }

    if let Some(branch) = git::current_branch(Some(dir)) {
        match git::dirty_count(Some(dir)) {
            Some(n) if n > 0 => segments.push(format!("{}*{}", branch, n)),
            _ => segments.push(branch),
        }
    }

    if let Some(count) = git::worktree_count(Some(dir)) {
        if count > 1 {
            segments.push(format!("{} worktrees", count));
        }
    }
}
