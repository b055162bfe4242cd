// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的配置库初始化、固定数据写入等功能
// ==========================================

#![allow(dead_code)]

use production_plan_board::config::ConfigManager;
use std::error::Error;
use tempfile::NamedTempFile;

/// 创建临时配置库（ConfigManager 会自动建表）
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("临时文件路径非 UTF-8")?
        .to_string();
    Ok((temp_file, db_path))
}

/// 写入一组看板配置
pub fn insert_board_config(
    manager: &ConfigManager,
    entries: &[(&str, &str)],
) -> Result<(), Box<dyn Error>> {
    for (key, value) in entries {
        manager.set_global_config_value(key, value)?;
    }
    Ok(())
}
