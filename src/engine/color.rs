// ==========================================
// 生产计划看板 - 配色
// ==========================================
// 行基色: 固定调色板按行位置循环 (i mod N)
// 段着色:
// - 机台域: 同一机台内按段名次向白色混合，首段为基色，最多淡化 55%
// - 产线域: 按料号所在列位置取调色板颜色（同一料号跨产线同色）
// ==========================================

use crate::domain::series::{ColumnOrder, MachineSeries};
use crate::domain::types::PlanDomain;

/// 默认调色板
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de",
    "#3ba272", "#fc8452", "#9a60b4", "#ea7ccc", "#2f4554",
];

/// 段着色最大淡化比例
pub const MAX_SHADE: f64 = 0.55;

/// 第 rank 段（共 segment_count 段）的淡化比例
///
/// segment_count <= 1 时返回 0（除数至少为 1）
pub fn shade_amount(rank: usize, segment_count: usize) -> f64 {
    let divisor = segment_count.saturating_sub(1).max(1) as f64;
    (rank as f64 / divisor * MAX_SHADE).min(MAX_SHADE)
}

/// 向白色混合 amount（0..=1）
///
/// 支持 "#rgb" / "#rrggbb"，其他颜色记号原样返回
pub fn lighten(color: &str, amount: f64) -> String {
    let Some((r, g, b)) = parse_hex(color) else {
        return color.to_string();
    };
    let amount = if amount.is_finite() { amount.clamp(0.0, 1.0) } else { 0.0 };
    let blend = |c: u8| -> u8 {
        let c = c as f64;
        (c + (255.0 - c) * amount).round().clamp(0.0, 255.0) as u8
    };
    format!("#{:02x}{:02x}{:02x}", blend(r), blend(g), blend(b))
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

// ==========================================
// ColorAssigner - 调色板分配器
// ==========================================
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    palette: Vec<String>,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl ColorAssigner {
    /// 空调色板回落为默认调色板
    pub fn new(palette: &[String]) -> Self {
        let palette: Vec<String> = palette
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
        } else {
            palette
        };
        Self { palette }
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn color_for_index(&self, index: usize) -> String {
        self.palette[index % self.palette.len()].clone()
    }

    /// 按最终行位置重新着色（基色 + 每段颜色）
    pub fn paint(
        &self,
        series: Vec<MachineSeries>,
        columns: &ColumnOrder,
        domain: PlanDomain,
    ) -> Vec<MachineSeries> {
        series
            .into_iter()
            .enumerate()
            .map(|(row, mut s)| {
                s.base_color = self.color_for_index(row);
                s.segment_colors = columns
                    .iter()
                    .enumerate()
                    .map(|(column_index, column)| {
                        let color = match domain {
                            PlanDomain::Machine => {
                                let rank = s.segment_order.get(column).copied().unwrap_or(0);
                                lighten(
                                    &s.base_color,
                                    shade_amount(rank, s.segment_order.len()),
                                )
                            }
                            PlanDomain::NamedLine => self.color_for_index(column_index),
                        };
                        (column.to_string(), color)
                    })
                    .collect();
                s
            })
            .collect()
    }
}
