// ==========================================
// 生产计划看板 - 堆叠序列领域模型
// ==========================================
// 每个机台/产线一行，每个料号一段
// 红线: 堆叠顺序只由全局 ColumnOrder 决定，不依赖 Map 的遍历顺序
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// 料号 → 在本机台排序后明细中首次出现的名次（仅用于着色深浅）
pub type SegmentOrderMap = BTreeMap<String, usize>;

// ==========================================
// ColumnOrder - 全局列顺序
// ==========================================
// 全部记录中料号的首次出现顺序，所有机台共用
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnOrder {
    columns: Vec<String>,
}

impl ColumnOrder {
    /// 按首次出现顺序构建（重复项忽略）
    pub fn from_first_seen<'a, I>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (columns, _) = identifiers.into_iter().fold(
            (Vec::new(), BTreeSet::new()),
            |(mut columns, mut seen), id| {
                if seen.insert(id.to_string()) {
                    columns.push(id.to_string());
                }
                (columns, seen)
            },
        );
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn index_of(&self, identifier: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == identifier)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.columns
    }
}

// ==========================================
// PlanDetail - 单条计划明细（悬停/点击下钻用）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDetail {
    pub id: String,                 // "<machine_key>-<source_index>"
    pub part_label: String,         // 归一化后的料号标识
    pub part_no: Option<String>,
    pub model_name: Option<String>,
    pub machine_label: String,
    pub quantity: f64,
    pub sequence_order: usize,      // 在本机台排序后明细中的位置
}

// ==========================================
// MachineSeries - 单个机台的堆叠序列
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSeries {
    pub machine_key: String,
    pub raw_machine_name: Option<String>,
    pub display_label: String,
    pub segment_values: BTreeMap<String, f64>,  // 覆盖全部列，缺失列为 0
    pub segment_order: SegmentOrderMap,
    pub segment_colors: BTreeMap<String, String>,
    pub ordered_plans: Vec<PlanDetail>,         // 按有效批次顺序升序
    pub total_quantity: f64,                    // == segment_values 之和
    pub base_color: String,
    pub synthesized: bool,                      // 补齐的固定产线行
}

impl MachineSeries {
    /// 某列的数量（未定义按 0）
    pub fn value_of(&self, column: &str) -> f64 {
        self.segment_values.get(column).copied().unwrap_or(0.0)
    }

    /// 名称匹配（忽略大小写与首尾空白），同时比对显示名与原始机台名
    pub fn matches_name(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        std::iter::once(Some(self.display_label.as_str()))
            .chain(std::iter::once(self.raw_machine_name.as_deref()))
            .flatten()
            .any(|candidate| candidate.trim().to_lowercase() == wanted)
    }

    /// 按全局列顺序输出的一行堆叠数据（供图表按字段取值）
    ///
    /// { "machine_key", "label", "total", "values": { <料号>: 数量, ... } }
    /// 料号只出现在 values 内，任何料号名都不会覆盖行标识字段
    pub fn stacked_row(&self, columns: &ColumnOrder) -> Map<String, Value> {
        let values: Map<String, Value> = columns
            .iter()
            .map(|column| (column.to_string(), Value::from(self.value_of(column))))
            .collect();

        let mut row = Map::new();
        row.insert("machine_key".to_string(), Value::from(self.machine_key.clone()));
        row.insert("label".to_string(), Value::from(self.display_label.clone()));
        row.insert("total".to_string(), Value::from(self.total_quantity));
        row.insert("values".to_string(), Value::Object(values));
        row
    }
}
