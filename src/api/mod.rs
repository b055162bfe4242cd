// ==========================================
// 生产计划看板 - API 层
// ==========================================
// 职责: 提供看板业务接口,供宿主（前端桥接层 / CLI）调用
// ==========================================

pub mod board_api;
pub mod error;
pub mod plan_source;

// 重导出核心类型
pub use board_api::BoardApi;
pub use error::{ApiError, ApiResult};
pub use plan_source::{DaySnapshotFile, JsonFileSnapshotSource, PlanSnapshotSource, SourceError};
