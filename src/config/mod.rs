// ==========================================
// 生产计划看板 - 配置层
// ==========================================
// 职责: 看板可调参数（调色板、固定产线、布局、文案）
// 存储: config_kv 表
// ==========================================

pub mod board_config_trait;
pub mod board_profile;
pub mod config_manager;

// 重导出核心配置类型
pub use board_config_trait::BoardConfigReader;
pub use board_profile::BoardProfile;
pub use config_manager::{config_keys, default_config_db_path, ConfigManager};
