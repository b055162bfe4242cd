// ==========================================
// 生产计划看板 - 固定产线补行
// ==========================================
// 仅命名产线域生效: 固定产线表中当天没有数据的产线补一行 0
// 补行后重新排序、按位置重新着色；重复执行不会再增加行
// ==========================================

use crate::domain::series::{ColumnOrder, MachineSeries, SegmentOrderMap};
use crate::domain::types::PlanDomain;
use crate::engine::color::ColorAssigner;
use crate::engine::ordering::OrderingPolicy;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct CanonicalRowSynthesizer {
    canonical_lines: Vec<String>,
}

impl CanonicalRowSynthesizer {
    pub fn new(canonical_lines: &[String]) -> Self {
        Self {
            canonical_lines: canonical_lines
                .iter()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
                .collect(),
        }
    }

    pub fn canonical_lines(&self) -> &[String] {
        &self.canonical_lines
    }

    /// 补齐固定产线行
    ///
    /// # 参数
    /// - series: 聚合后的序列
    /// - columns: 全局列顺序（补行的每列都置 0）
    /// - domain: 非命名产线域原样返回
    pub fn ensure_canonical_rows(
        &self,
        series: Vec<MachineSeries>,
        columns: &ColumnOrder,
        domain: PlanDomain,
        ordering: &OrderingPolicy,
        colors: &ColorAssigner,
    ) -> Vec<MachineSeries> {
        if !domain.has_canonical_rows() {
            return series;
        }

        let missing: Vec<MachineSeries> = self
            .canonical_lines
            .iter()
            .filter(|line| !series.iter().any(|s| s.matches_name(line)))
            .map(|line| placeholder_row(line, columns))
            .collect();

        if missing.is_empty() {
            return series;
        }

        tracing::debug!(domain = %domain, added = missing.len(), "补齐固定产线行");

        let merged: Vec<MachineSeries> = series.into_iter().chain(missing).collect();
        colors.paint(ordering.sort(merged), columns, domain)
    }
}

fn placeholder_row(line: &str, columns: &ColumnOrder) -> MachineSeries {
    MachineSeries {
        machine_key: line.to_string(),
        raw_machine_name: Some(line.to_string()),
        display_label: line.to_string(),
        segment_values: columns.iter().map(|c| (c.to_string(), 0.0)).collect(),
        segment_order: SegmentOrderMap::new(),
        segment_colors: BTreeMap::new(),
        ordered_plans: Vec::new(),
        total_quantity: 0.0,
        base_color: String::new(),
        synthesized: true,
    }
}
