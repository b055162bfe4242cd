// ==========================================
// 生产计划看板 - 配置管理器
// ==========================================
// 职责: 看板配置加载、查询、覆写
// 存储: config_kv 表 (key-value + scope)，只读写 scope_id='global'
// 约定: 配置缺失或格式错误一律回落默认值（格式错误记 warn）
// ==========================================

use crate::config::board_config_trait::BoardConfigReader;
use crate::config::board_profile::DEFAULT_CANONICAL_LINES;
use crate::db::{ensure_config_schema, open_sqlite_connection};
use crate::engine::color::DEFAULT_PALETTE;
use crate::engine::layout::LayoutParams;
use crate::i18n::BoardLabel;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例（自动建 config_kv 表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
            ensure_config_schema(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 读取 global scope 的配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// 写入 global scope 的配置值（UPSERT）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    /// 读取 JSON 配置，缺失或格式错误回落默认值
    fn get_json_or_default<T: DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, Box<dyn Error>> {
        let Some(raw) = self.get_config_value(key)? else {
            return Ok(default);
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "配置格式错误，使用默认值");
                Ok(default)
            }
        }
    }

    /// 读取文本配置，缺失或空白时回落到当前语言的内置文案
    fn get_label_or_default(&self, key: &str, label: BoardLabel) -> Result<String, Box<dyn Error>> {
        let value = self
            .get_config_value(key)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Ok(value.unwrap_or_else(|| label.text()))
    }
}

// ==========================================
// BoardConfigReader Trait 实现
// ==========================================
#[async_trait]
impl BoardConfigReader for ConfigManager {
    async fn get_palette(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let default: Vec<String> = DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect();
        let palette: Vec<String> = self.get_json_or_default(config_keys::PALETTE, default.clone())?;
        // 空调色板无法循环取色
        Ok(if palette.is_empty() { default } else { palette })
    }

    async fn get_canonical_lines(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let default: Vec<String> = DEFAULT_CANONICAL_LINES.iter().map(|l| l.to_string()).collect();
        self.get_json_or_default(config_keys::CANONICAL_LINES, default)
    }

    async fn get_layout_params(&self) -> Result<LayoutParams, Box<dyn Error>> {
        let params: LayoutParams =
            self.get_json_or_default(config_keys::LAYOUT, LayoutParams::default())?;
        Ok(params.sanitized())
    }

    async fn get_placeholder_model_label(&self) -> Result<String, Box<dyn Error>> {
        self.get_label_or_default(config_keys::PLACEHOLDER_MODEL_LABEL, BoardLabel::PlaceholderModel)
    }

    async fn get_summary_column_label(&self) -> Result<String, Box<dyn Error>> {
        self.get_label_or_default(config_keys::SUMMARY_COLUMN_LABEL, BoardLabel::SummaryColumn)
    }

    async fn get_unassigned_machine_label(&self) -> Result<String, Box<dyn Error>> {
        self.get_label_or_default(
            config_keys::UNASSIGNED_MACHINE_LABEL,
            BoardLabel::UnassignedMachine,
        )
    }
}

/// 默认配置库路径: <data_dir>/production-plan-board/board.db
pub fn default_config_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("production-plan-board")
        .join("board.db")
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 配色
    pub const PALETTE: &str = "board/palette";                   // JSON 数组

    // 产线域
    pub const CANONICAL_LINES: &str = "board/canonical_lines";   // JSON 数组

    // 布局
    pub const LAYOUT: &str = "board/layout";                     // JSON 对象（LayoutParams）

    // 文案
    pub const PLACEHOLDER_MODEL_LABEL: &str = "board/placeholder_model_label";
    pub const SUMMARY_COLUMN_LABEL: &str = "board/summary_column_label";
    pub const UNASSIGNED_MACHINE_LABEL: &str = "board/unassigned_machine_label";
}
