//! Hook 错误分类
//!
//! 错误分两类：载荷格式错误、文件系统错误。
//! 两类的处理方式相同：打印诊断到 stderr，以退化结果继续，永不中断调用方。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    /// stdin 上没有内容
    #[error("empty hook payload")]
    EmptyPayload,

    /// stdin 载荷不是合法 JSON
    #[error("malformed hook payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// stdin 读取失败
    #[error("failed to read stdin: {0}")]
    Io(#[from] std::io::Error),
}
