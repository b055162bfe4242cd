// ==========================================
// 生产计划看板 - 布局估算
// ==========================================
// 职责: 按行数估算图表高度及两个联动面板（明细面板、滚动列表面板）高度
// 并排展示两个计划域时，四个尺寸分别取两域最大值，保证左右两栏对齐
// ==========================================

use crate::domain::types::PlanDomain;
use serde::{Deserialize, Serialize};

// ==========================================
// LayoutParams - 布局参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub row_unit_px: f64,           // 单行高度
    pub min_chart_height_px: f64,   // 图表最小高度
    pub machine_row_density: f64,   // 机台域行密度系数（< 1，行更紧凑）
    pub bottom_padding_px: f64,     // 图表底部留白（坐标轴/图例）
    pub detail_panel_ratio: f64,    // 明细面板 = 列高 × 系数
    pub list_panel_ratio: f64,      // 滚动列表面板 = 列高 × 系数（大于明细面板）
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            row_unit_px: 44.0,
            min_chart_height_px: 240.0,
            machine_row_density: 0.75,
            bottom_padding_px: 56.0,
            detail_panel_ratio: 0.6,
            list_panel_ratio: 1.2,
        }
    }
}

impl LayoutParams {
    /// 非法参数（非有限、非正数）逐项回落为默认值
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
        let non_negative = |v: f64, fallback: f64| if v.is_finite() && v >= 0.0 { v } else { fallback };
        let mut params = Self {
            row_unit_px: positive(self.row_unit_px, defaults.row_unit_px),
            min_chart_height_px: non_negative(self.min_chart_height_px, defaults.min_chart_height_px),
            machine_row_density: positive(self.machine_row_density, defaults.machine_row_density),
            bottom_padding_px: non_negative(self.bottom_padding_px, defaults.bottom_padding_px),
            detail_panel_ratio: positive(self.detail_panel_ratio, defaults.detail_panel_ratio),
            list_panel_ratio: positive(self.list_panel_ratio, defaults.list_panel_ratio),
        };
        // 列表面板必须高于明细面板
        if params.list_panel_ratio <= params.detail_panel_ratio {
            params.detail_panel_ratio = defaults.detail_panel_ratio;
            params.list_panel_ratio = defaults.list_panel_ratio;
        }
        params
    }

    fn density(&self, domain: PlanDomain) -> f64 {
        match domain {
            PlanDomain::Machine => self.machine_row_density,
            PlanDomain::NamedLine => 1.0,
        }
    }
}

// ==========================================
// LayoutDimensions - 布局尺寸（像素）
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDimensions {
    pub chart_height: u32,
    pub column_height: u32,
    pub detail_panel_height: u32,
    pub list_panel_height: u32,
}

impl LayoutDimensions {
    /// 两域对齐: 每个尺寸取最大值（满足交换律、幂等）
    pub fn unify(&self, other: &LayoutDimensions) -> LayoutDimensions {
        LayoutDimensions {
            chart_height: self.chart_height.max(other.chart_height),
            column_height: self.column_height.max(other.column_height),
            detail_panel_height: self.detail_panel_height.max(other.detail_panel_height),
            list_panel_height: self.list_panel_height.max(other.list_panel_height),
        }
    }

    /// 多域对齐
    pub fn unify_all<'a, I>(dimensions: I) -> LayoutDimensions
    where
        I: IntoIterator<Item = &'a LayoutDimensions>,
    {
        dimensions
            .into_iter()
            .fold(LayoutDimensions::default(), |acc, d| acc.unify(d))
    }
}

// ==========================================
// LayoutEstimator - 布局估算器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct LayoutEstimator {
    params: LayoutParams,
}

impl LayoutEstimator {
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params: params.sanitized(),
        }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// 估算单个计划域的布局
    ///
    /// chart = max(最小高度, 行数 × 行高 × 密度)
    /// column = chart + 底部留白
    /// detail / list = column × 各自系数
    pub fn estimate(&self, row_count: usize, domain: PlanDomain) -> LayoutDimensions {
        let p = &self.params;
        let raw = row_count as f64 * p.row_unit_px * p.density(domain);
        let chart = raw.max(p.min_chart_height_px).ceil();
        let column = chart + p.bottom_padding_px.round();

        LayoutDimensions {
            chart_height: to_px(chart),
            column_height: to_px(column),
            detail_panel_height: to_px(column * p.detail_panel_ratio),
            list_panel_height: to_px(column * p.list_panel_ratio),
        }
    }
}

fn to_px(value: f64) -> u32 {
    value.round().clamp(0.0, u32::MAX as f64) as u32
}
