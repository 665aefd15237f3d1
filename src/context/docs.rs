// Documentation Index
// ai-docs/ 目录下 Markdown 文档的清单

use std::path::Path;
use walkdir::WalkDir;

/// 所有 agent 通用的文档阅读提示
pub const READING_TIP: &str =
    "**💡 TIP:** Check ai-docs/ for established patterns and requirements before implementing.";

const DOCS_DIR: &str = "ai-docs";
const MAX_DOCS_DEPTH: usize = 3;

/// ai-docs/ 下已有文档的相对路径清单
pub struct DocsIndex {
    pub docs: Vec<String>,
}

impl DocsIndex {
    /// 扫描项目下的 ai-docs 目录，不存在时返回空清单
    pub fn scan(project_root: &Path) -> Self {
        let docs_root = project_root.join(DOCS_DIR);
        if !docs_root.is_dir() {
            return Self { docs: Vec::new() };
        }

        let mut docs = Vec::new();

        for entry in WalkDir::new(&docs_root)
            .min_depth(1)
            .max_depth(MAX_DOCS_DEPTH)
            .into_iter()
            .filter_entry(|e| {
                e.file_name()
                    .to_str()
                    .map(|s| !s.starts_with('.'))
                    .unwrap_or(false)
            })
            .flatten()
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let is_markdown = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("md"))
                .unwrap_or(false);
            if !is_markdown {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(&docs_root) {
                docs.push(relative.to_string_lossy().to_string());
            }
        }

        docs.sort();
        Self { docs }
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// 格式化为上下文 section，空清单返回 None
    pub fn format_section(&self) -> Option<String> {
        if self.docs.is_empty() {
            return None;
        }

        let mut section = String::from("**Available Documentation (ai-docs/):**\n");
        for doc in &self.docs {
            section.push_str(&format!("- {}\n", doc));
        }
        Some(section.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_docs_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let index = DocsIndex::scan(temp.path());
        assert!(index.is_empty());
        assert!(index.format_section().is_none());
    }

    #[test]
    fn test_scan_lists_markdown_sorted() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("ai-docs/patterns")).unwrap();
        fs::write(temp.path().join("ai-docs/zz-overview.md"), "# z").unwrap();
        fs::write(temp.path().join("ai-docs/patterns/api.md"), "# api").unwrap();
        fs::write(temp.path().join("ai-docs/notes.txt"), "not markdown").unwrap();

        let index = DocsIndex::scan(temp.path());
        assert_eq!(index.docs, vec!["patterns/api.md", "zz-overview.md"]);

        let section = index.format_section().unwrap();
        assert!(section.contains("- patterns/api.md"));
        assert!(!section.contains("notes.txt"));
    }

    #[test]
    fn test_hidden_files_excluded() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("ai-docs")).unwrap();
        fs::write(temp.path().join("ai-docs/.draft.md"), "wip").unwrap();
        fs::write(temp.path().join("ai-docs/real.md"), "# ok").unwrap();

        let index = DocsIndex::scan(temp.path());
        assert_eq!(index.docs, vec!["real.md"]);
    }
}
