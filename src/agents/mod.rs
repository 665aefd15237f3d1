//! Agent 分类
//!
//! 宿主通过自由字符串 `subagent_type` 标识 agent。
//! 这里收敛成封闭枚举，未知值显式落到 `Unknown`。

/// 已知的 agent 类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    BackendDatabaseEngineer,
    FrontendUiSpecialist,
    CodeQualityReviewer,
    FeatureArchitectPlanner,
    DocumentationSpecialist,
    /// 未注册的 agent 类别（默认分支）
    Unknown,
}

impl AgentKind {
    /// 从 `subagent_type` 字符串解析
    pub fn parse(raw: &str) -> Self {
        match raw {
            "backend-database-engineer" => Self::BackendDatabaseEngineer,
            "frontend-ui-specialist" => Self::FrontendUiSpecialist,
            "code-quality-reviewer" => Self::CodeQualityReviewer,
            "feature-architect-planner" => Self::FeatureArchitectPlanner,
            "documentation-specialist" => Self::DocumentationSpecialist,
            _ => Self::Unknown,
        }
    }

    /// 规范化的 kebab-case 名称
    pub fn slug(&self) -> &'static str {
        match self {
            Self::BackendDatabaseEngineer => "backend-database-engineer",
            Self::FrontendUiSpecialist => "frontend-ui-specialist",
            Self::CodeQualityReviewer => "code-quality-reviewer",
            Self::FeatureArchitectPlanner => "feature-architect-planner",
            Self::DocumentationSpecialist => "documentation-specialist",
            Self::Unknown => "unknown",
        }
    }

    /// 上下文标题用的显示名（Title Case）
    pub fn display_name(&self) -> String {
        self.slug()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 该类 agent 关注的领域，用于上下文注入
    pub fn focus(&self) -> &'static str {
        match self {
            Self::BackendDatabaseEngineer => "database, server logic, APIs",
            Self::FrontendUiSpecialist => "UI components, styling, client-side",
            Self::CodeQualityReviewer => "testing, linting, quality gates",
            Self::FeatureArchitectPlanner => "architecture, planning, requirements",
            Self::DocumentationSpecialist => "documentation, guides, patterns",
            Self::Unknown => "general development",
        }
    }

    /// 所有已知类别（不含 Unknown）
    pub fn known() -> &'static [AgentKind] {
        &[
            Self::BackendDatabaseEngineer,
            Self::FrontendUiSpecialist,
            Self::CodeQualityReviewer,
            Self::FeatureArchitectPlanner,
            Self::DocumentationSpecialist,
        ]
    }
}
