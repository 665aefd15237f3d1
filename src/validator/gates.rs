//! Agent 结果质量门
//!
//! 每类 agent 有自己的通过标准：必须出现的内容、追加的禁用模式、
//! 最小行数。门的判定只是建议，从不阻塞宿主。

use anyhow::Result;
use regex::Regex;

use super::patterns::{ForbiddenPattern, PatternSet};
use super::scanner::{scan_text, Finding};
use crate::agents::AgentKind;

/// 单类 agent 的质量标准
#[derive(Debug, Clone)]
pub struct QualityGate {
    /// 输出中必须出现的内容模式（全文搜索）
    pub required: Vec<Regex>,
    /// 在通用禁用集之外追加的模式
    pub forbidden_extra: Vec<ForbiddenPattern>,
    /// 输出最小行数
    pub min_lines: usize,
}

impl QualityGate {
    fn build(required: &[&str], forbidden_extra: &[(&str, &str)], min_lines: usize) -> Result<Self> {
        let required = required
            .iter()
            .map(|p| Regex::new(p).map_err(Into::into))
            .collect::<Result<Vec<_>>>()?;
        let forbidden_extra = forbidden_extra
            .iter()
            .map(|(label, pattern)| ForbiddenPattern::new(label, pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            required,
            forbidden_extra,
            min_lines,
        })
    }

    /// 返回该类 agent 的质量门，没有定义标准的类别返回 None
    pub fn for_agent(kind: AgentKind) -> Option<QualityGate> {
        let gate = match kind {
            AgentKind::BackendDatabaseEngineer => QualityGate::build(
                &[r"(?i)migration|schema|query|database|server|action|api|endpoint|route"],
                &[],
                5,
            ),
            AgentKind::FrontendUiSpecialist => QualityGate::build(
                &[r"(?i)component|jsx?|tsx?|css"],
                &[("alert call", r"(?i)alert\(")],
                10,
            ),
            AgentKind::CodeQualityReviewer => QualityGate::build(
                &[r"(?i)test|spec|coverage|lint"],
                &[("disabled-check phrase", r"(?i)skipped|disabled|ignored")],
                3,
            ),
            AgentKind::FeatureArchitectPlanner => QualityGate::build(
                // 要求结构化输出（标题或列表）
                &[r"## |### |\* "],
                &[("hedging phrase", r"I think|Maybe|Perhaps")],
                20,
            ),
            AgentKind::DocumentationSpecialist | AgentKind::Unknown => return None,
        };

        // 内置规则表编译失败属于编程错误，这里不向调用方传播
        gate.ok()
    }
}

/// 质量门判定
#[derive(Debug, Clone)]
pub enum GateVerdict {
    Pass { note: String },
    Fail { reason: String, findings: Vec<Finding> },
}

impl GateVerdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, GateVerdict::Pass { .. })
    }
}

/// 按类别标准验证 agent 输出
pub fn validate_agent_result(kind: AgentKind, result_text: &str) -> GateVerdict {
    if result_text.trim().len() < 10 {
        return GateVerdict::Fail {
            reason: "Output too short or empty".to_string(),
            findings: Vec::new(),
        };
    }

    let Some(gate) = QualityGate::for_agent(kind) else {
        return GateVerdict::Pass {
            note: "No specific criteria defined".to_string(),
        };
    };

    let line_count = result_text.lines().count();
    if line_count < gate.min_lines {
        return GateVerdict::Fail {
            reason: format!(
                "Output too short: {} lines, need {}",
                line_count, gate.min_lines
            ),
            findings: Vec::new(),
        };
    }

    for pattern in &gate.required {
        if !pattern.is_match(result_text) {
            return GateVerdict::Fail {
                reason: format!("Missing required content pattern: {}", pattern.as_str()),
                findings: Vec::new(),
            };
        }
    }

    // 禁用集 = 通用集 + 该类 agent 追加的模式
    let mut forbidden = PatternSet::universal_result().clone();
    forbidden.patterns.extend(gate.forbidden_extra.clone());

    let findings = scan_text(result_text, &forbidden);
    if !findings.is_empty() {
        return GateVerdict::Fail {
            reason: format!("Contains {} forbidden pattern match(es)", findings.len()),
            findings,
        };
    }

    GateVerdict::Pass {
        note: "Quality gates passed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_ok_output() -> String {
        let mut text = String::from("Implemented the users API endpoint.\n");
        for i in 0..6 {
            text.push_str(&format!("- step {}: applied database migration\n", i));
        }
        text
    }

    #[test]
    fn test_short_output_fails() {
        let verdict = validate_agent_result(AgentKind::BackendDatabaseEngineer, "ok");
        assert!(!verdict.is_pass());
    }

    #[test]
    fn test_unknown_agent_passes_without_criteria() {
        let verdict = validate_agent_result(AgentKind::Unknown, "some sufficiently long output");
        let GateVerdict::Pass { note } = verdict else {
            panic!("expected pass");
        };
        assert_eq!(note, "No specific criteria defined");
    }

    #[test]
    fn test_backend_passes_with_domain_content() {
        let verdict =
            validate_agent_result(AgentKind::BackendDatabaseEngineer, &backend_ok_output());
        assert!(verdict.is_pass());
    }

    #[test]
    fn test_min_lines_enforced() {
        let verdict = validate_agent_result(
            AgentKind::FrontendUiSpecialist,
            "Updated the component CSS styling.",
        );
        let GateVerdict::Fail { reason, .. } = verdict else {
            panic!("expected fail");
        };
        assert!(reason.contains("Output too short"));
    }

    #[test]
    fn test_missing_required_content_fails() {
        let text = "line\n".repeat(8);
        let verdict = validate_agent_result(AgentKind::BackendDatabaseEngineer, &text);
        let GateVerdict::Fail { reason, .. } = verdict else {
            panic!("expected fail");
        };
        assert!(reason.contains("Missing required content"));
    }

    #[test]
    fn test_universal_forbidden_applies_to_gated_agents() {
        let mut text = backend_ok_output();
        text.push_str("TODO: wire up the remaining route\n");

        let verdict = validate_agent_result(AgentKind::BackendDatabaseEngineer, &text);
        let GateVerdict::Fail { findings, .. } = verdict else {
            panic!("expected fail");
        };
        assert!(findings.iter().any(|f| f.label == "TODO/FIXME marker"));
    }

    #[test]
    fn test_agent_specific_forbidden_is_additive() {
        let mut text = String::from("Built the component with css modules.\n");
        for _ in 0..10 {
            text.push_str("- adjusted component markup\n");
        }
        text.push_str("alert('done');\n");

        let verdict = validate_agent_result(AgentKind::FrontendUiSpecialist, &text);
        let GateVerdict::Fail { findings, .. } = verdict else {
            panic!("expected fail");
        };
        assert!(findings.iter().any(|f| f.label == "alert call"));
    }

    #[test]
    fn test_planner_requires_structure() {
        let prose = "we should build it carefully\n".repeat(25);
        let verdict = validate_agent_result(AgentKind::FeatureArchitectPlanner, &prose);
        assert!(!verdict.is_pass());

        let structured = "## Plan\n* item one\n".repeat(15);
        let verdict = validate_agent_result(AgentKind::FeatureArchitectPlanner, &structured);
        assert!(verdict.is_pass(), "structured planner output should pass");
    }
}
