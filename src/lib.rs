// ==========================================
// 生产计划看板 - 核心库
// ==========================================
// 计划聚合与布局引擎: 把单日计划明细整理成堆叠柱状图的序列、
// 配色、补行、尺寸与下钻索引
// 系统定位: 只准备数据，不负责绘图
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 聚合/排序/配色/布局
pub mod engine;

// 配置层 - 看板配置
pub mod config;

// 数据库基础设施（配置库连接与建表）
pub mod db;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ColumnOrder, MachineSeries, PlanDetail, PlanDomain, PlanRecord, PlanSnapshot,
    PlanSummaryRecord, RawPlanRecord,
};

// 引擎
pub use engine::{
    BoardBuilder, CanonicalRowSynthesizer, ColorAssigner, DayBoard, DomainBoard,
    InteractionIndex, LayoutDimensions, LayoutEstimator, OrderingPolicy, PlanAggregator,
};

// API
pub use api::{ApiError, ApiResult, BoardApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "生产计划看板";
