// ==========================================
// 生产计划看板 - 计划明细领域模型
// ==========================================
// 输入: 上游接口返回的计划明细（字段均可能缺失）
// 红线: 缺省值替换只在聚合边界做一次，渲染层不再判空
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// NumberOrText - 数值/文本兼容字段
// ==========================================
// 上游接口的数量、批次号字段有时是数字，有时是字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    /// 解析为有限浮点数
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumberOrText::Number(n) => *n,
            NumberOrText::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// 解析为整数
    ///
    /// - 数字: 截断小数部分
    /// - 文本: 取开头的带符号数字串（"12-A" → 12），开头不是数字则失败
    pub fn as_leading_int(&self) -> Option<i64> {
        match self {
            NumberOrText::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            NumberOrText::Number(_) => None,
            NumberOrText::Text(s) => parse_leading_int(s),
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|v| v * sign)
}

/// 去除首尾空白后非空才算有值
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// 机台键: 机台名（去空白）或按输入位置合成的 "machine-<index>"
///
/// 缺失机台名的记录各占一行，不合并成一个“未知机台”
pub fn machine_key_for(machine_name: Option<&str>, source_index: usize) -> String {
    non_blank(machine_name).unwrap_or_else(|| format!("machine-{}", source_index))
}

// ==========================================
// MachineGroup - 聚合分组键
// ==========================================
// 有机台名按名称分组；无机台名按输入位置各成一组
// 分组不依赖展示用的机台键，真实机台名恰好是 "machine-<n>" 也不会并组
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum MachineGroup {
    Named(String),     // 去空白后的机台名
    Positional(usize), // 无机台名记录的输入位置
}

impl MachineGroup {
    pub fn of(machine_name: Option<&str>, source_index: usize) -> Self {
        match non_blank(machine_name) {
            Some(name) => MachineGroup::Named(name),
            None => MachineGroup::Positional(source_index),
        }
    }

    pub fn raw_name(&self) -> Option<&str> {
        match self {
            MachineGroup::Named(name) => Some(name),
            MachineGroup::Positional(_) => None,
        }
    }

    /// 首选机台键（未去重）
    pub fn preferred_key(&self) -> String {
        match self {
            MachineGroup::Named(name) => name.clone(),
            MachineGroup::Positional(index) => machine_key_for(None, *index),
        }
    }
}

// ==========================================
// RawPlanRecord - 上游计划明细（原始形态）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlanRecord {
    pub machine_name: Option<String>,                // 机台/产线名
    pub part_no: Option<String>,                     // 料号
    pub model_name: Option<String>,                  // 机型
    pub part_spec: Option<String>,                   // 规格描述
    #[serde(alias = "plan_qty")]
    pub planned_quantity: Option<NumberOrText>,      // 计划数量
    pub lot_no: Option<NumberOrText>,                // 批次顺序
}

// ==========================================
// PlanRecord - 计划明细（边界归一化后）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub machine_name: Option<String>, // 去空白后的机台名
    pub part_identifier: String,      // 料号 → 机型 → 规格 → 占位标签，保证非空
    pub part_no: Option<String>,
    pub model_name: Option<String>,
    pub planned_quantity: f64,        // 缺失/非法 → 0
    pub lot_order: Option<i64>,       // 缺失/非法 → None
    pub source_index: usize,          // 输入数组中的位置
}

impl PlanRecord {
    /// 从原始记录归一化
    ///
    /// # 参数
    /// - raw: 原始记录
    /// - source_index: 在输入数组中的位置
    /// - model_label: 占位标签前缀（如 "机型"），生成 "<model_label> #<n>"，n 从 1 开始
    pub fn resolve(raw: &RawPlanRecord, source_index: usize, model_label: &str) -> Self {
        let part_no = non_blank(raw.part_no.as_deref());
        let model_name = non_blank(raw.model_name.as_deref());
        let part_identifier = part_no
            .clone()
            .or_else(|| model_name.clone())
            .or_else(|| non_blank(raw.part_spec.as_deref()))
            .unwrap_or_else(|| format!("{} #{}", model_label.trim(), source_index + 1));

        Self {
            machine_name: non_blank(raw.machine_name.as_deref()),
            part_identifier,
            part_no,
            model_name,
            planned_quantity: raw
                .planned_quantity
                .as_ref()
                .and_then(NumberOrText::as_f64)
                .unwrap_or(0.0),
            lot_order: raw.lot_no.as_ref().and_then(NumberOrText::as_leading_int),
            source_index,
        }
    }

    /// 分组键
    pub fn machine_group(&self) -> MachineGroup {
        MachineGroup::of(self.machine_name.as_deref(), self.source_index)
    }

    /// 有效批次顺序: 批次号缺失时回落为输入位置
    pub fn effective_lot_order(&self) -> i64 {
        self.lot_order.unwrap_or(self.source_index as i64)
    }
}

// ==========================================
// PlanSummaryRecord - 机台日汇总（明细为空时的兜底数据源）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSummaryRecord {
    pub machine_name: Option<String>,
    pub plan_date: Option<String>,        // "YYYY-MM-DD" 或带时间的日期串
    pub plan_qty: Option<NumberOrText>,
}

impl PlanSummaryRecord {
    /// 解析计划日期（只取前 10 位）
    pub fn plan_day(&self) -> Option<NaiveDate> {
        let raw = self.plan_date.as_deref()?.trim();
        let day = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    pub fn quantity(&self) -> f64 {
        self.plan_qty
            .as_ref()
            .and_then(NumberOrText::as_f64)
            .unwrap_or(0.0)
    }
}

// ==========================================
// PlanSnapshot - 单个计划域、单日的数据快照
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    #[serde(default)]
    pub plan_date: Option<NaiveDate>,
    #[serde(default)]
    pub records: Vec<RawPlanRecord>,
    #[serde(default)]
    pub summaries: Vec<PlanSummaryRecord>,
}

impl PlanSnapshot {
    pub fn from_records(records: Vec<RawPlanRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }
}
