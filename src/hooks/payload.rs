//! Hook Payload
//!
//! 宿主在 stdin 上传一个 JSON 对象。字段缺失、stdin 为空、
//! JSON 损坏都降级为默认 payload，绝不让 hook 失败。

use serde::Deserialize;
use serde_json::Value;

use crate::agents::AgentKind;
use crate::error::HookError;

/// stdin 上的事件 payload
#[derive(Debug, Default, Deserialize)]
pub struct HookPayload {
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub tool_input: ToolInput,
    /// Task 工具的结果，宿主两种字段名都在用
    #[serde(default, alias = "tool_result")]
    pub tool_response: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub subagent_type: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

impl HookPayload {
    /// 解析 stdin 内容，坏输入返回默认 payload 加诊断
    pub fn parse(raw: &str) -> (Self, Option<String>) {
        match Self::try_parse(raw) {
            Ok(payload) => (payload, None),
            Err(err) => (Self::default(), Some(format!("{}, using defaults", err))),
        }
    }

    fn try_parse(raw: &str) -> Result<Self, HookError> {
        if raw.trim().is_empty() {
            return Err(HookError::EmptyPayload);
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn agent_kind(&self) -> AgentKind {
        self.tool_input
            .subagent_type
            .as_deref()
            .map(AgentKind::parse)
            .unwrap_or(AgentKind::Unknown)
    }

    /// 反馈行里用的 agent 名，未指定时退回 "unknown"
    pub fn agent_label(&self) -> &str {
        self.tool_input
            .subagent_type
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("unknown")
    }

    /// Task 结果的文本形式：字符串原样，结构体序列化
    pub fn result_text(&self) -> String {
        match &self.tool_response {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
