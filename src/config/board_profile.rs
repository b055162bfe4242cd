// ==========================================
// 生产计划看板 - 看板配置快照
// ==========================================
// 一次看板计算所需的全部可调参数
// 来源: config_kv（ConfigManager），缺失项使用下列默认值
// 文案默认值取当前语言（locales/），库与 CLI 共用这一份
// ==========================================

use crate::engine::color::DEFAULT_PALETTE;
use crate::engine::layout::LayoutParams;
use crate::i18n::BoardLabel;
use serde::{Deserialize, Serialize};

/// 默认固定产线表（同时作为产线域排序名次表）
pub const DEFAULT_CANONICAL_LINES: [&str; 4] = ["Line A", "Line B", "Line C", "Line D"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardProfile {
    pub palette: Vec<String>,
    pub canonical_lines: Vec<String>,
    pub layout: LayoutParams,
    pub placeholder_model_label: String,   // 料号全缺时的占位前缀
    pub summary_column_label: String,      // 汇总兜底的唯一列名
    pub unassigned_machine_label: String,  // 无机台名的行显示前缀
}

impl Default for BoardProfile {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            canonical_lines: DEFAULT_CANONICAL_LINES.iter().map(|l| l.to_string()).collect(),
            layout: LayoutParams::default(),
            placeholder_model_label: BoardLabel::PlaceholderModel.text(),
            summary_column_label: BoardLabel::SummaryColumn.text(),
            unassigned_machine_label: BoardLabel::UnassignedMachine.text(),
        }
    }
}
