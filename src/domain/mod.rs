// ==========================================
// 生产计划看板 - 领域模型层
// ==========================================
// 职责: 定义计划明细、堆叠序列、计划域等领域类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod plan;
pub mod series;
pub mod types;

// 重导出核心类型
pub use plan::{
    machine_key_for, MachineGroup, NumberOrText, PlanRecord, PlanSnapshot, PlanSummaryRecord, RawPlanRecord,
};
pub use series::{ColumnOrder, MachineSeries, PlanDetail, SegmentOrderMap};
pub use types::PlanDomain;
