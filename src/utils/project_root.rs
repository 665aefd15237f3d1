// Project Root Finder
// 项目根目录查找逻辑 (支持 submodule)

use std::env;
use std::path::PathBuf;

use super::git::{get_git_root, get_git_superproject_root};

const MARKER_DIR: &str = ".claude";
const MAX_UPWARD_STEPS: usize = 10;

/// 查找项目根目录
///
/// 查找策略:
/// 1. 优先检查 git superproject (submodule 的父项目)
/// 2. 当前目录
/// 3. git 仓库根目录
/// 4. 向上遍历查找 .claude 目录
pub fn find_project_root() -> Option<PathBuf> {
    // 方法1: git superproject
    if let Ok(Some(super_root)) = get_git_superproject_root(None) {
        let path = PathBuf::from(super_root);
        if path.join(MARKER_DIR).is_dir() {
            return Some(path);
        }
    }

    let cwd = env::current_dir().ok();

    // 方法2: 当前目录
    if let Some(cwd) = &cwd {
        if cwd.join(MARKER_DIR).is_dir() {
            return Some(cwd.clone());
        }
    }

    // 方法3: git 仓库根目录
    if let Ok(git_root) = get_git_root(None) {
        let path = PathBuf::from(git_root);
        if path.join(MARKER_DIR).is_dir() {
            return Some(path);
        }
    }

    // 方法4: 向上遍历
    if let Some(mut current) = cwd {
        for _ in 0..MAX_UPWARD_STEPS {
            if current.join(MARKER_DIR).is_dir() {
                return Some(current);
            }
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }
    }

    None
}

/// 项目根目录，找不到 marker 时退回当前目录
pub fn project_root_or_cwd() -> PathBuf {
    find_project_root()
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_project_root_marker_check() {
        // 找到的根必须带 marker 目录
        if let Some(root) = find_project_root() {
            assert!(root.join(MARKER_DIR).exists());
        }
    }

    #[test]
    fn test_project_root_or_cwd_never_empty() {
        let root = project_root_or_cwd();
        assert!(!root.as_os_str().is_empty());
    }
}
