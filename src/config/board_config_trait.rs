// ==========================================
// 生产计划看板 - 看板配置读取 Trait
// ==========================================
// 职责: 定义看板引擎所需的配置读取接口（不包含实现）
// 实现者: ConfigManager（config_kv 表）、BoardProfile（固定配置）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::board_profile::BoardProfile;
use crate::engine::layout::LayoutParams;
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
pub trait BoardConfigReader: Send + Sync {
    /// 调色板
    ///
    /// # 默认值
    /// - DEFAULT_PALETTE（10 色）
    async fn get_palette(&self) -> Result<Vec<String>, Box<dyn Error>>;

    /// 固定产线表（产线域补行 + 排序名次）
    ///
    /// # 默认值
    /// - ["Line A", "Line B", "Line C", "Line D"]
    async fn get_canonical_lines(&self) -> Result<Vec<String>, Box<dyn Error>>;

    /// 布局参数
    async fn get_layout_params(&self) -> Result<LayoutParams, Box<dyn Error>>;

    /// 料号占位前缀
    async fn get_placeholder_model_label(&self) -> Result<String, Box<dyn Error>>;

    /// 汇总兜底列名
    async fn get_summary_column_label(&self) -> Result<String, Box<dyn Error>>;

    /// 无机台名的行显示前缀
    async fn get_unassigned_machine_label(&self) -> Result<String, Box<dyn Error>>;

    /// 读取完整看板配置
    async fn load_board_profile(&self) -> Result<BoardProfile, Box<dyn Error>> {
        let palette = self.get_palette().await?;
        let canonical_lines = self.get_canonical_lines().await?;
        let layout = self.get_layout_params().await?;
        let placeholder_model_label = self.get_placeholder_model_label().await?;
        let summary_column_label = self.get_summary_column_label().await?;
        let unassigned_machine_label = self.get_unassigned_machine_label().await?;

        Ok(BoardProfile {
            palette,
            canonical_lines,
            layout,
            placeholder_model_label,
            summary_column_label,
            unassigned_machine_label,
        })
    }
}

// 固定配置（CLI 无数据库时、测试时使用）
#[async_trait]
impl BoardConfigReader for BoardProfile {
    async fn get_palette(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.palette.clone())
    }

    async fn get_canonical_lines(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(self.canonical_lines.clone())
    }

    async fn get_layout_params(&self) -> Result<LayoutParams, Box<dyn Error>> {
        Ok(self.layout.clone())
    }

    async fn get_placeholder_model_label(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.placeholder_model_label.clone())
    }

    async fn get_summary_column_label(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.summary_column_label.clone())
    }

    async fn get_unassigned_machine_label(&self) -> Result<String, Box<dyn Error>> {
        Ok(self.unassigned_machine_label.clone())
    }
}
