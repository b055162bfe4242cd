// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use production_plan_board::config::{BoardConfigReader, BoardProfile};
use production_plan_board::engine::LayoutParams;
use std::error::Error;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub profile: BoardProfile,
    pub fail: bool,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            profile: BoardProfile::default(),
            fail: false,
        }
    }

    /// 自定义固定产线
    pub fn with_lines(lines: &[&str]) -> Self {
        let mut config = Self::default();
        config.profile.canonical_lines = lines.iter().map(|l| l.to_string()).collect();
        config
    }

    /// 读取即失败（模拟配置库不可用）
    pub fn failing() -> Self {
        let mut config = Self::default();
        config.fail = true;
        config
    }

    fn check(&self) -> Result<(), Box<dyn Error>> {
        if self.fail {
            return Err("配置库不可用".into());
        }
        Ok(())
    }
}

#[async_trait]
impl BoardConfigReader for MockConfig {
    async fn get_palette(&self) -> Result<Vec<String>, Box<dyn Error>> {
        self.check()?;
        Ok(self.profile.palette.clone())
    }

    async fn get_canonical_lines(&self) -> Result<Vec<String>, Box<dyn Error>> {
        self.check()?;
        Ok(self.profile.canonical_lines.clone())
    }

    async fn get_layout_params(&self) -> Result<LayoutParams, Box<dyn Error>> {
        self.check()?;
        Ok(self.profile.layout.clone())
    }

    async fn get_placeholder_model_label(&self) -> Result<String, Box<dyn Error>> {
        self.check()?;
        Ok(self.profile.placeholder_model_label.clone())
    }

    async fn get_summary_column_label(&self) -> Result<String, Box<dyn Error>> {
        self.check()?;
        Ok(self.profile.summary_column_label.clone())
    }

    async fn get_unassigned_machine_label(&self) -> Result<String, Box<dyn Error>> {
        self.check()?;
        Ok(self.profile.unassigned_machine_label.clone())
    }
}
