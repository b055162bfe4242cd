// ==========================================
// 生产计划看板 - 计划聚合引擎
// ==========================================
// 输入: 单日、单计划域的计划明细
// 输出: 每机台一行、每料号一段的堆叠序列 + 全局列顺序
// 步骤:
// 1) 明细为空 → 改用机台日汇总做单列兜底
// 2) 一次遍历: 全局列顺序（料号首次出现） + 按机台键分组
// 3) 机台内按有效批次顺序升序，得到 sequence_order 与段名次
// 4) 每行补齐全部列（缺失为 0）
// 5) 按计划域排序策略排序，再按行位置着色
// 红线: 不抛错，所有脏数据回落为约定默认值
// ==========================================

use crate::config::BoardProfile;
use crate::domain::plan::{MachineGroup, PlanRecord, PlanSnapshot, PlanSummaryRecord};
use crate::domain::series::{ColumnOrder, MachineSeries, PlanDetail, SegmentOrderMap};
use crate::domain::types::PlanDomain;
use crate::engine::color::ColorAssigner;
use crate::engine::ordering::OrderingPolicy;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};


// ==========================================
// Aggregation - 聚合结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregation {
    pub columns: ColumnOrder,
    pub series: Vec<MachineSeries>,
    pub from_summary: bool, // 是否走了汇总兜底
}

// ==========================================
// PlanAggregator - 计划聚合器
// ==========================================
#[derive(Debug, Clone)]
pub struct PlanAggregator {
    domain: PlanDomain,
    ordering: OrderingPolicy,
    colors: ColorAssigner,
    placeholder_model_label: String,
    summary_column_label: String,
    unassigned_machine_label: String,
}

impl PlanAggregator {
    /// 按看板配置构造
    pub fn from_profile(domain: PlanDomain, profile: &BoardProfile) -> Self {
        Self {
            domain,
            ordering: OrderingPolicy::for_domain(domain, &profile.canonical_lines),
            colors: ColorAssigner::new(&profile.palette),
            placeholder_model_label: profile.placeholder_model_label.clone(),
            summary_column_label: profile.summary_column_label.clone(),
            unassigned_machine_label: profile.unassigned_machine_label.clone(),
        }
    }

    pub fn ordering(&self) -> &OrderingPolicy {
        &self.ordering
    }

    pub fn colors(&self) -> &ColorAssigner {
        &self.colors
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 聚合一个快照
    ///
    /// 明细非空走明细聚合；明细为空走汇总兜底；两者都空返回空结果
    pub fn aggregate(&self, snapshot: &PlanSnapshot) -> Aggregation {
        if snapshot.records.is_empty() {
            return self.aggregate_summaries(&snapshot.summaries, snapshot.plan_date);
        }

        let records: Vec<PlanRecord> = snapshot
            .records
            .iter()
            .enumerate()
            .map(|(index, raw)| PlanRecord::resolve(raw, index, &self.placeholder_model_label))
            .collect();

        self.aggregate_records(&records)
    }

    /// 明细聚合
    pub fn aggregate_records(&self, records: &[PlanRecord]) -> Aggregation {
        let columns =
            ColumnOrder::from_first_seen(records.iter().map(|r| r.part_identifier.as_str()));

        // 按分组键分组（只借用记录，分组表不外泄）
        let groups: BTreeMap<MachineGroup, Vec<&PlanRecord>> =
            records.iter().fold(BTreeMap::new(), |mut groups, record| {
                groups
                    .entry(record.machine_group())
                    .or_insert_with(Vec::new)
                    .push(record);
                groups
            });

        let keys = assign_machine_keys(groups.keys());
        let series = groups
            .into_iter()
            .zip(keys)
            .map(|((group, plans), machine_key)| {
                self.build_series(machine_key, &group, plans, &columns)
            })
            .collect();

        Aggregation {
            series: self.finish(series, &columns),
            columns,
            from_summary: false,
        }
    }

    /// 汇总兜底: 单列，列名为汇总列标签；丢失料号级明细
    pub fn aggregate_summaries(
        &self,
        summaries: &[PlanSummaryRecord],
        plan_date: Option<NaiveDate>,
    ) -> Aggregation {
        let totals: BTreeMap<MachineGroup, f64> = summaries
            .iter()
            .enumerate()
            .filter(|(_, s)| match (plan_date, s.plan_day()) {
                (Some(wanted), Some(day)) => wanted == day,
                _ => true,
            })
            .fold(BTreeMap::new(), |mut totals, (index, summary)| {
                let group = MachineGroup::of(summary.machine_name.as_deref(), index);
                *totals.entry(group).or_insert(0.0) += summary.quantity();
                totals
            });

        if totals.is_empty() {
            return Aggregation {
                from_summary: true,
                ..Aggregation::default()
            };
        }

        tracing::warn!(
            domain = %self.domain,
            machines = totals.len(),
            "计划明细为空，使用机台日汇总兜底（无料号明细）"
        );

        let column = self.summary_column_label.clone();
        let columns = ColumnOrder::from_first_seen([column.as_str()]);

        let keys = assign_machine_keys(totals.keys());
        let series = totals
            .into_iter()
            .zip(keys)
            .map(|((group, total), machine_key)| MachineSeries {
                display_label: self.display_label(&group),
                machine_key,
                raw_machine_name: group.raw_name().map(str::to_string),
                segment_values: BTreeMap::from([(column.clone(), total)]),
                segment_order: SegmentOrderMap::from([(column.clone(), 0)]),
                segment_colors: BTreeMap::new(),
                ordered_plans: Vec::new(),
                total_quantity: total,
                base_color: String::new(),
                synthesized: false,
            })
            .collect();

        Aggregation {
            series: self.finish(series, &columns),
            columns,
            from_summary: true,
        }
    }

    // ==========================================
    // 内部方法
    // ==========================================

    fn build_series(
        &self,
        machine_key: String,
        machine_group: &MachineGroup,
        mut group: Vec<&PlanRecord>,
        columns: &ColumnOrder,
    ) -> MachineSeries {
        // 有效批次顺序升序；同批次按输入位置，保证确定性
        group.sort_by_key(|r| (r.effective_lot_order(), r.source_index));

        let raw_machine_name = machine_group.raw_name().map(str::to_string);
        let display_label = self.display_label(machine_group);

        let segment_order: SegmentOrderMap =
            group.iter().fold(SegmentOrderMap::new(), |mut order, r| {
                let next = order.len();
                order.entry(r.part_identifier.clone()).or_insert(next);
                order
            });

        let segment_values: BTreeMap<String, f64> = group.iter().fold(
            columns.iter().map(|c| (c.to_string(), 0.0)).collect(),
            |mut values: BTreeMap<String, f64>, r| {
                *values.entry(r.part_identifier.clone()).or_insert(0.0) += r.planned_quantity;
                values
            },
        );

        let ordered_plans = group
            .iter()
            .enumerate()
            .map(|(sequence_order, r)| PlanDetail {
                id: format!("{}-{}", machine_key, r.source_index),
                part_label: r.part_identifier.clone(),
                part_no: r.part_no.clone(),
                model_name: r.model_name.clone(),
                machine_label: display_label.clone(),
                quantity: r.planned_quantity,
                sequence_order,
            })
            .collect();

        MachineSeries {
            total_quantity: segment_values.values().sum(),
            machine_key,
            raw_machine_name,
            display_label,
            segment_values,
            segment_order,
            segment_colors: BTreeMap::new(),
            ordered_plans,
            base_color: String::new(),
            synthesized: false,
        }
    }

    fn display_label(&self, group: &MachineGroup) -> String {
        match group {
            MachineGroup::Named(name) => name.clone(),
            MachineGroup::Positional(index) => {
                format!("{} #{}", self.unassigned_machine_label, index + 1)
            }
        }
    }

    fn finish(&self, series: Vec<MachineSeries>, columns: &ColumnOrder) -> Vec<MachineSeries> {
        let sorted = self.ordering.sort(series);
        self.colors.paint(sorted, columns, self.domain)
    }
}

/// 为各分组分配机台键（顺序与输入一致）
///
/// 有名分组直接用机台名；无名分组用 "machine-<index>"，
/// 与已有键冲突时追加 "-<n>"，直到唯一
fn assign_machine_keys<'a, I>(groups: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a MachineGroup>,
{
    let groups: Vec<&MachineGroup> = groups.into_iter().collect();
    let mut taken: BTreeSet<String> = groups
        .iter()
        .filter_map(|g| g.raw_name().map(str::to_string))
        .collect();

    groups
        .into_iter()
        .map(|group| match group {
            MachineGroup::Named(name) => name.clone(),
            MachineGroup::Positional(_) => {
                let preferred = group.preferred_key();
                let mut key = preferred.clone();
                let mut suffix = 1;
                while taken.contains(&key) {
                    key = format!("{}-{}", preferred, suffix);
                    suffix += 1;
                }
                taken.insert(key.clone());
                key
            }
        })
        .collect()
}
