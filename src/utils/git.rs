//! Git 操作工具

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// 执行 git 命令并返回输出
pub fn git_command(args: &[&str], cwd: Option<&Path>) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.args(args);

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().context("Failed to execute git command")?;

    if !output.status.success() {
        anyhow::bail!(
            "Git command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// 获取 git 仓库根目录
pub fn get_git_root(cwd: Option<&Path>) -> Result<String> {
    git_command(&["rev-parse", "--show-toplevel"], cwd)
}

/// 获取 git superproject 根目录（用于 submodule）
pub fn get_git_superproject_root(cwd: Option<&Path>) -> Result<Option<String>> {
    match git_command(&["rev-parse", "--show-superproject-working-tree"], cwd) {
        Ok(path) if !path.is_empty() => Ok(Some(path)),
        _ => Ok(None),
    }
}

/// 检查当前目录是否在 git 仓库中
pub fn is_git_repo(cwd: Option<&Path>) -> bool {
    git_command(&["rev-parse", "--git-dir"], cwd).is_ok()
}

/// 当前分支名，不在仓库内或处于 detached HEAD 时返回 None
pub fn current_branch(cwd: Option<&Path>) -> Option<String> {
    match git_command(&["branch", "--show-current"], cwd) {
        Ok(branch) if !branch.is_empty() => Some(branch),
        _ => None,
    }
}

/// 工作区改动条数（`git status --porcelain` 的行数）
pub fn dirty_count(cwd: Option<&Path>) -> Option<usize> {
    let output = git_command(&["status", "--porcelain"], cwd).ok()?;
    Some(output.lines().filter(|l| !l.trim().is_empty()).count())
}

/// worktree 数量（含主工作区）
pub fn worktree_count(cwd: Option<&Path>) -> Option<usize> {
    let output = git_command(&["worktree", "list", "--porcelain"], cwd).ok()?;
    let count = output
        .lines()
        .filter(|l| l.starts_with("worktree "))
        .count();
    Some(count)
}
