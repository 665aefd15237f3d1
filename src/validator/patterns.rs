//! 禁用模式表
//!
//! 每条规则 = (标签, 正则)。内置表通过构造函数暴露，
//! 规则集可以整体替换注入，验证逻辑不感知来源。

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// 单条禁用模式：人类可读标签 + 编译后的正则
#[derive(Debug, Clone)]
pub struct ForbiddenPattern {
    pub label: String,
    pub regex: Regex,
}

impl ForbiddenPattern {
    pub fn new(label: &str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid forbidden pattern for '{}': {}", label, pattern))?;
        Ok(Self {
            label: label.to_string(),
            regex,
        })
    }
}

/// 有序的禁用模式集合
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub name: &'static str,
    pub patterns: Vec<ForbiddenPattern>,
}

impl PatternSet {
    /// 从 (标签, 正则) 规则表构建模式集
    pub fn from_rules(name: &'static str, rules: &[(&str, &str)]) -> Result<Self> {
        let patterns = rules
            .iter()
            .map(|(label, pattern)| ForbiddenPattern::new(label, pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { name, patterns })
    }

    /// 代码文件内容的内置规则（Edit/Write 后检查）
    pub fn file_content() -> &'static PatternSet {
        &FILE_CONTENT_SET
    }

    /// 所有 agent 结果通用的内置规则（Task 完成后检查）
    pub fn universal_result() -> &'static PatternSet {
        &UNIVERSAL_RESULT_SET
    }
}

// 代码文件中的通用反模式
const FILE_CONTENT_RULES: &[(&str, &str)] = &[
    ("TODO marker", r"(?i)TODO:"),
    ("FIXME marker", r"(?i)FIXME:"),
    // 仅匹配独立成行的 console.log 调用
    ("debug statement", r"(?i)console\.log\(.*\);?\s*$"),
    ("alert call", r"(?i)alert\("),
    ("debugger statement", r"(?i)debugger;?"),
    ("compatibility-bloat phrase", r"(?i)backwards?\s+compatib"),
    ("compatibility layer", r"(?i)compatib.*layer"),
    ("compatibility qualifier", r"(?i)for\s+compatib"),
    ("legacy-support phrase", r"(?i)legacy\s+support"),
    ("compatibility comment", r"(?i)//.*compatib"),
    ("compatibility block comment", r"(?i)/\*.*compatib.*\*/"),
];

// 所有 agent 输出通用的反模式
const UNIVERSAL_RESULT_RULES: &[(&str, &str)] = &[
    ("TODO/FIXME marker", r"(?i)TODO:|FIXME:"),
    ("compatibility-bloat phrase", r"(?i)backwards?\s+compatib"),
    (
        "hypothetical-implementation phrase",
        r"(?i)in a real (implementation|app|application|world|scenario)",
    ),
    ("debug statement", r"(?i)console\.log"),
];

lazy_static! {
    static ref FILE_CONTENT_SET: PatternSet =
        PatternSet::from_rules("file-content", FILE_CONTENT_RULES).unwrap();
    static ref UNIVERSAL_RESULT_SET: PatternSet =
        PatternSet::from_rules("universal-result", UNIVERSAL_RESULT_RULES).unwrap();
}

/// 参与内容检查的代码文件扩展名
pub const CODE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "py", "go", "rs", "java", "c", "cpp", "h", "hpp", "php", "rb",
    "swift", "kt",
];

/// 判断路径是否是需要检查的代码文件
pub fn is_code_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| CODE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
