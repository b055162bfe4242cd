// ==========================================
// 生产计划看板 - 看板编排
// ==========================================
// 流程: 计划明细 → 聚合（排序+配色） → 固定产线补行 → 布局估算 → 交互索引
// 每次调用都是输入快照的纯函数，两个计划域互不影响
// ==========================================

use crate::config::BoardProfile;
use crate::domain::plan::PlanSnapshot;
use crate::domain::series::{ColumnOrder, MachineSeries, PlanDetail};
use crate::domain::types::PlanDomain;
use crate::engine::aggregator::PlanAggregator;
use crate::engine::interaction::InteractionIndex;
use crate::engine::layout::{LayoutDimensions, LayoutEstimator};
use crate::engine::placeholder::CanonicalRowSynthesizer;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

// ==========================================
// DomainBoard - 单个计划域的看板数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainBoard {
    pub domain: PlanDomain,
    pub plan_date: Option<NaiveDate>,
    pub columns: ColumnOrder,
    pub series: Vec<MachineSeries>,
    pub layout: LayoutDimensions,
    pub interaction: InteractionIndex,
    pub from_summary: bool,
}

impl DomainBoard {
    /// 图表用的堆叠数据（每列一个字段）
    pub fn stacked_rows(&self) -> Vec<Map<String, Value>> {
        self.series
            .iter()
            .map(|s| s.stacked_row(&self.columns))
            .collect()
    }

    /// 交互: 给定激活的机台键返回明细（None → 全部）
    pub fn select_details(&self, active_key: Option<&str>) -> &[PlanDetail] {
        self.interaction.details_for(active_key)
    }

    pub fn total_quantity(&self) -> f64 {
        self.series.iter().map(|s| s.total_quantity).sum()
    }
}

// ==========================================
// DayBoard - 左右并排的两个计划域
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBoard {
    pub plan_date: NaiveDate,
    pub machine: DomainBoard,
    pub named_line: DomainBoard,
    pub unified_layout: LayoutDimensions,
}

impl DayBoard {
    /// 对齐两域布局: 各自估算后取最大值，两域共用
    pub fn align(plan_date: NaiveDate, mut machine: DomainBoard, mut named_line: DomainBoard) -> Self {
        let unified_layout = machine.layout.unify(&named_line.layout);
        machine.layout = unified_layout;
        named_line.layout = unified_layout;
        Self {
            plan_date,
            machine,
            named_line,
            unified_layout,
        }
    }

    pub fn board(&self, domain: PlanDomain) -> &DomainBoard {
        match domain {
            PlanDomain::Machine => &self.machine,
            PlanDomain::NamedLine => &self.named_line,
        }
    }
}

// ==========================================
// BoardBuilder - 看板构建器
// ==========================================
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    profile: BoardProfile,
    estimator: LayoutEstimator,
    synthesizer: CanonicalRowSynthesizer,
}

impl BoardBuilder {
    pub fn new(profile: BoardProfile) -> Self {
        Self {
            estimator: LayoutEstimator::new(profile.layout.clone()),
            synthesizer: CanonicalRowSynthesizer::new(&profile.canonical_lines),
            profile,
        }
    }

    pub fn profile(&self) -> &BoardProfile {
        &self.profile
    }

    /// 构建单个计划域的看板
    pub fn build(&self, domain: PlanDomain, snapshot: &PlanSnapshot) -> DomainBoard {
        let aggregator = PlanAggregator::from_profile(domain, &self.profile);

        let aggregation = aggregator.aggregate(snapshot);
        tracing::debug!(
            domain = %domain,
            records = snapshot.records.len(),
            rows = aggregation.series.len(),
            columns = aggregation.columns.len(),
            "聚合完成"
        );

        let series = self.synthesizer.ensure_canonical_rows(
            aggregation.series,
            &aggregation.columns,
            domain,
            aggregator.ordering(),
            aggregator.colors(),
        );

        let layout = self.estimator.estimate(series.len(), domain);
        let interaction = InteractionIndex::build(&series);

        DomainBoard {
            domain,
            plan_date: snapshot.plan_date,
            columns: aggregation.columns,
            series,
            layout,
            interaction,
            from_summary: aggregation.from_summary,
        }
    }

    /// 构建并对齐两个计划域
    pub fn build_day(
        &self,
        plan_date: NaiveDate,
        machine_snapshot: &PlanSnapshot,
        line_snapshot: &PlanSnapshot,
    ) -> DayBoard {
        let machine = self.build(PlanDomain::Machine, machine_snapshot);
        let named_line = self.build(PlanDomain::NamedLine, line_snapshot);
        DayBoard::align(plan_date, machine, named_line)
    }
}
