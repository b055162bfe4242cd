// ==========================================
// 生产计划看板 - 交互索引
// ==========================================
// 职责: 悬停/点击/提示框的反查表
// - machine_key → 显示名
// - machine_key → 排序后的明细
// - 全部明细按 sequence_order 重排（未选中机台时展示）
// 选中状态（悬停 or 固定）由调用方维护，这里只回答“给定 key 展示什么”
// ==========================================

use crate::domain::series::{MachineSeries, PlanDetail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionIndex {
    pub machine_key_to_label: BTreeMap<String, String>,
    pub machine_key_to_details: BTreeMap<String, Vec<PlanDetail>>,
    pub global_ordered_details: Vec<PlanDetail>,
}

impl InteractionIndex {
    /// 从最终序列构建
    pub fn build(series: &[MachineSeries]) -> Self {
        let machine_key_to_label = series
            .iter()
            .map(|s| (s.machine_key.clone(), s.display_label.clone()))
            .collect();

        let machine_key_to_details = series
            .iter()
            .map(|s| (s.machine_key.clone(), s.ordered_plans.clone()))
            .collect();

        // 行顺序拼接后稳定排序，同名次按行顺序
        let mut global_ordered_details: Vec<PlanDetail> = series
            .iter()
            .flat_map(|s| s.ordered_plans.iter().cloned())
            .collect();
        global_ordered_details.sort_by_key(|d| d.sequence_order);

        Self {
            machine_key_to_label,
            machine_key_to_details,
            global_ordered_details,
        }
    }

    pub fn label_for(&self, machine_key: &str) -> Option<&str> {
        self.machine_key_to_label.get(machine_key).map(String::as_str)
    }

    /// 给定当前激活的机台键，返回要展示的明细
    ///
    /// 未激活或键不存在时返回全局列表
    pub fn details_for(&self, active_key: Option<&str>) -> &[PlanDetail] {
        active_key
            .and_then(|key| self.machine_key_to_details.get(key))
            .map(Vec::as_slice)
            .unwrap_or(self.global_ordered_details.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str, machine: &str, seq: usize) -> PlanDetail {
        PlanDetail {
            id: id.to_string(),
            part_label: "P".to_string(),
            part_no: None,
            model_name: None,
            machine_label: machine.to_string(),
            quantity: 1.0,
            sequence_order: seq,
        }
    }

    fn series(key: &str, details: Vec<PlanDetail>) -> MachineSeries {
        MachineSeries {
            machine_key: key.to_string(),
            raw_machine_name: Some(key.to_string()),
            display_label: format!("{} label", key),
            segment_values: BTreeMap::new(),
            segment_order: BTreeMap::new(),
            segment_colors: BTreeMap::new(),
            ordered_plans: details,
            total_quantity: 0.0,
            base_color: String::new(),
            synthesized: false,
        }
    }

    #[test]
    fn test_global_details_interleave_by_sequence() {
        let index = InteractionIndex::build(&[
            series("M1", vec![detail("a0", "M1", 0), detail("a1", "M1", 1)]),
            series("M2", vec![detail("b0", "M2", 0)]),
        ]);
        let ids: Vec<&str> = index.global_ordered_details.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a0", "b0", "a1"]);
    }

    #[test]
    fn test_details_for_active_key() {
        let index = InteractionIndex::build(&[
            series("M1", vec![detail("a0", "M1", 0)]),
            series("M2", vec![detail("b0", "M2", 0)]),
        ]);
        assert_eq!(index.details_for(Some("M2"))[0].id, "b0");
        assert_eq!(index.details_for(None).len(), 2);
        assert_eq!(index.details_for(Some("missing")).len(), 2);
        assert_eq!(index.label_for("M1"), Some("M1 label"));
        assert_eq!(index.label_for("M9"), None);
    }
}
