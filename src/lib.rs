// Agent Hooks CLI - Library Root
//
// Claude Code agent hook 脚本的模块化 Rust 实现

pub mod agents;
pub mod context;
pub mod error;
pub mod hooks;
pub mod metrics;
pub mod statusline;
pub mod utils;
pub mod validator;

// 重新导出常用类型
pub use agents::AgentKind;
pub use context::ContextSnapshot;
pub use error::HookError;
pub use hooks::{run_hook, run_hook_from_stdin, HookOutput, HookPayload};
pub use statusline::{render_statusline, StatuslinePayload};
pub use utils::find_project_root;
pub use validator::{scan_file, scan_text, Finding, PatternSet, ScanOutcome};
