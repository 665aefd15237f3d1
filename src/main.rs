use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

use agent_hooks::utils::project_root_or_cwd;

/// Agent Hooks CLI
///
/// Claude Code agent hook 脚本的纯 Rust 实现 - 零 Python 依赖
#[derive(Parser)]
#[command(name = "agent-hooks")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "A pure Rust implementation of the Claude Code agent hook scripts.\n\
                        Result validation, file scanning, context injection and usage metrics\n\
                        are compiled into a single binary - no external dependencies required."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 运行 hook（由 Claude Code 调用，payload 走 stdin）
    Hook {
        /// Hook 名称: validate_result, validate_file, inject_context, track_metrics
        name: String,
    },

    /// 渲染单行 statusline（payload 走 stdin）
    Statusline,

    /// 列出内置禁用模式表
    Patterns,

    /// 显示项目根目录
    Root,

    /// 诊断环境和配置
    Doctor,
}

// ═══════════════════════════════════════════════════════════════════
// Hook 执行（纯 Rust 实现）
// ═══════════════════════════════════════════════════════════════════

fn run_hook(hook_name: &str) -> Result<()> {
    use agent_hooks::hooks::{print_hook_output, run_hook_from_stdin};

    let project_root = project_root_or_cwd();

    // hook 从不失败：退化结果也走正常打印，退出码保持 0
    let output = run_hook_from_stdin(hook_name, &project_root);
    print_hook_output(&output);

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// Statusline
// ═══════════════════════════════════════════════════════════════════

fn run_statusline() -> Result<()> {
    use agent_hooks::statusline::{render_statusline, StatuslinePayload};
    use std::io::Read;

    let mut stdin_data = String::new();
    let _ = std::io::stdin().read_to_string(&mut stdin_data);

    // 坏 payload 降级为空 payload，状态行照常输出
    let payload: StatuslinePayload = serde_json::from_str(&stdin_data).unwrap_or_default();
    println!("{}", render_statusline(&payload));

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// 列出模式表
// ═══════════════════════════════════════════════════════════════════

fn list_patterns() -> Result<()> {
    use agent_hooks::validator::PatternSet;

    for set in [PatternSet::file_content(), PatternSet::universal_result()] {
        println!("{}", format!("📋 {}:", set.name).cyan().bold());
        for pattern in &set.patterns {
            println!(
                "  {} {} {}",
                "•".green(),
                pattern.label.yellow(),
                pattern.regex.as_str()
            );
        }
        println!();
    }

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// 诊断环境
// ═══════════════════════════════════════════════════════════════════

fn doctor() -> Result<()> {
    use agent_hooks::metrics::MetricsStore;
    use agent_hooks::utils::{dir_exists, file_exists, find_project_root, git_command};

    println!("{}", "🔍 Agent Hooks Doctor".cyan().bold());
    println!();

    print!("🔧 Git binary... ");
    match git_command(&["--version"], None) {
        Ok(version) => {
            println!("{}", "✓".green());
            println!("   {}", version.yellow());
        }
        Err(_) => {
            println!("{}", "✗".red());
            println!(
                "   {}",
                "git not found on PATH - branch and worktree segments will be omitted".red()
            );
        }
    }

    println!();
    print!("📁 Project root detection... ");
    match find_project_root() {
        Some(root) => {
            println!("{}", "✓".green());
            println!("   {}", root.display().to_string().yellow());
        }
        None => {
            println!("{}", "✗".red());
            println!(
                "   {}",
                "No .claude directory found - hooks will use the current directory".red()
            );
        }
    }

    let root = project_root_or_cwd();

    println!();
    println!("📂 Context sources:");
    let path = root.join("ai-docs");
    if dir_exists(&path) {
        println!("   {} {}", "✓".green(), "Documentation index (ai-docs/)".yellow());
    } else {
        println!(
            "   {} {} {}",
            "✗".red(),
            "Documentation index (ai-docs/)".yellow(),
            "(missing)".red()
        );
    }

    println!();
    println!("📊 Metrics:");
    match MetricsStore::default_location() {
        Some(store) => {
            if file_exists(store.path()) {
                let metrics = store.load();
                println!(
                    "   {} {} ({} agents tracked)",
                    "✓".green(),
                    store.path().display().to_string().yellow(),
                    metrics.agents.len()
                );
            } else {
                println!(
                    "   {} {} {}",
                    "○".white(),
                    store.path().display().to_string().yellow(),
                    "(not created yet)".white()
                );
            }
        }
        None => println!("   {} {}", "✗".red(), "home directory not found".red()),
    }

    println!();
    println!("🎯 Hooks:");
    let hooks = vec![
        "validate_result",
        "validate_file",
        "inject_context",
        "track_metrics",
    ];
    for hook in hooks {
        println!("   {} {}", "✓".green(), hook.cyan());
    }

    println!();
    println!("{}", "✅ Diagnostic complete".green().bold());

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hook { name } => run_hook(&name),
        Commands::Statusline => run_statusline(),
        Commands::Patterns => list_patterns(),
        Commands::Root => {
            println!("{}", project_root_or_cwd().display());
            Ok(())
        }
        Commands::Doctor => doctor(),
    }
}
