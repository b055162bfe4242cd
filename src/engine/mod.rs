// ==========================================
// 生产计划看板 - 引擎层
// ==========================================
// 职责: 计划聚合、排序、配色、补行、布局、交互索引
// 红线: 引擎为纯函数，不做 I/O，不抛错
// ==========================================

pub mod aggregator;
pub mod color;
pub mod interaction;
pub mod layout;
pub mod orchestrator;
pub mod ordering;
pub mod placeholder;

// 重导出核心引擎
pub use aggregator::{Aggregation, PlanAggregator};
pub use color::{lighten, shade_amount, ColorAssigner};
pub use interaction::InteractionIndex;
pub use layout::{LayoutDimensions, LayoutEstimator, LayoutParams};
pub use orchestrator::{BoardBuilder, DayBoard, DomainBoard};
pub use ordering::{compare_labels, OrderingPolicy, UNRANKED};
pub use placeholder::CanonicalRowSynthesizer;
