// Directory Structure Scanner
// 目录结构扫描 - 深度受限，跳过构建产物和隐藏目录

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORE_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    "venv",
    ".venv",
    "dist",
    "build",
    "target",
    ".claude",
];

/// 项目目录树的截断视图
pub struct DirectorySnapshot {
    pub dirs: Vec<PathBuf>,
    pub total_entries: usize,
}

impl DirectorySnapshot {
    pub fn scan(project_root: &Path, max_depth: usize) -> Self {
        let ignore: HashSet<_> = IGNORE_DIRS.iter().cloned().collect();
        let mut dirs = Vec::new();
        let mut total_entries = 0;

        for entry in WalkDir::new(project_root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.file_name()
                    .to_str()
                    .map(|s| !ignore.contains(s) && !s.starts_with('.'))
                    .unwrap_or(false)
            })
            .flatten()
        {
            total_entries += 1;

            if entry.file_type().is_dir() {
                if let Ok(relative) = entry.path().strip_prefix(project_root) {
                    dirs.push(relative.to_path_buf());
                }
            }
        }

        Self {
            dirs,
            total_entries,
        }
    }

    /// 格式化为上下文 section，没有子目录时退化为一行提示
    pub fn format_section(&self, max_dirs: usize) -> String {
        if self.dirs.is_empty() {
            return "**Project Structure:** flat directory (no subdirectories)".to_string();
        }

        let mut section = String::from("**Directory Structure:**\n```\n");

        for (i, dir) in self.dirs.iter().enumerate() {
            if i >= max_dirs {
                section.push_str(&format!(
                    "... and {} more directories\n",
                    self.dirs.len() - max_dirs
                ));
                break;
            }

            let depth = dir.components().count();
            let indent = "  ".repeat(depth.saturating_sub(1));

            if let Some(name) = dir.file_name() {
                section.push_str(&format!("{}{}/\n", indent, name.to_string_lossy()));
            }
        }
        section.push_str("```");

        section
    }
}
