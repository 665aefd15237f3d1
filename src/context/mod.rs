// Context Snapshot Module
// 上下文快照 - 目录结构、文档清单、git 分支的采集与渲染

pub mod docs;
pub mod snapshot;
pub mod structure;
pub mod truncate;

// 重新导出主要接口
pub use docs::{DocsIndex, READING_TIP};
pub use snapshot::ContextSnapshot;
pub use structure::DirectorySnapshot;
pub use truncate::{truncate_end, truncate_middle};
