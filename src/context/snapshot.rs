//! Context Snapshot Builder
//!
//! 在 Task 调用前收集项目上下文：目录结构、当前分支、文档清单。
//! 每个 section 独立收集，失败只影响自己，gather 本身永不报错。

use std::fs;
use std::path::Path;

use crate::agents::AgentKind;
use crate::utils::git;

use super::docs::{DocsIndex, READING_TIP};
use super::structure::DirectorySnapshot;
use super::truncate::{truncate_end, truncate_middle};

const STRUCTURE_DEPTH: usize = 2;
const STRUCTURE_MAX_DIRS: usize = 50;
const STRUCTURE_MAX_CHARS: usize = 2000;
const CONFIG_FILE: &str = "CLAUDE.md";
const CONFIG_MAX_CHARS: usize = 800;
const DOCS_MAX_CHARS: usize = 1500;

/// 一次性采集的项目上下文
pub struct ContextSnapshot {
    kind: AgentKind,
    sections: Vec<String>,
}

impl ContextSnapshot {
    /// 采集所有可用的上下文 section
    pub fn gather(project_root: &Path, kind: AgentKind) -> Self {
        let mut sections = Vec::new();

        let structure = DirectorySnapshot::scan(project_root, STRUCTURE_DEPTH);
        sections.push(truncate_end(
            &structure.format_section(STRUCTURE_MAX_DIRS),
            STRUCTURE_MAX_CHARS,
        ));

        if let Some(branch) = git::current_branch(Some(project_root)) {
            sections.push(format!("**Current branch:** {}", branch));
        }

        if let Ok(config) = fs::read_to_string(project_root.join(CONFIG_FILE)) {
            if !config.trim().is_empty() {
                // 项目约定文件截中间，头部的角色说明和尾部的近期约定都保住
                sections.push(format!(
                    "**Project Configuration ({}):**\n{}",
                    CONFIG_FILE,
                    truncate_middle(config.trim_end(), CONFIG_MAX_CHARS)
                ));
            }
        }

        let docs = DocsIndex::scan(project_root);
        if let Some(listing) = docs.format_section() {
            // 文档清单排过序，截中间比截尾部保留的信息多
            sections.push(truncate_middle(&listing, DOCS_MAX_CHARS));
            // 有文档时才值得提示去读
            sections.push(READING_TIP.to_string());
        }

        Self { kind, sections }
    }

    /// 渲染为注入用的 Markdown 块
    pub fn render(&self) -> String {
        let mut out = format!(
            "## 🎯 {} Context\n\n**Focus:** {}\n\n",
            self.kind.display_name(),
            self.kind.focus()
        );
        out.push_str(&self.sections.join("\n"));
        out.push_str(
            "\n\n---\n*Project context auto-injected. \
             Follow reading instructions for consistent implementation.*\n",
        );
        out
    }
}
