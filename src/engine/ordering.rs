// ==========================================
// 生产计划看板 - 排序策略
// ==========================================
// 职责: 为机台/产线计算排序名次，并给出最终比较器
// 机台域: 取标识中的第一段数字（"3号机" → 3, "M12" → 12）
// 产线域: 固定产线表中的位置
// 无法识别的一律排在最后（UNRANKED = +∞），永不失败
// ==========================================

use crate::domain::series::MachineSeries;
use crate::domain::types::PlanDomain;
use std::cmp::Ordering;

/// 未识别名次
pub const UNRANKED: f64 = f64::INFINITY;

/// 机台编号名次: 标识中第一段连续数字
pub fn machine_number_rank(identifier: Option<&str>) -> f64 {
    let Some(identifier) = identifier else {
        return UNRANKED;
    };
    let digits: String = identifier
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<f64>().unwrap_or(UNRANKED)
}

/// 产线名次: 在固定产线表中的位置（忽略大小写与首尾空白）
pub fn named_line_rank(name: Option<&str>, rank_table: &[String]) -> f64 {
    let Some(name) = name else {
        return UNRANKED;
    };
    let wanted = name.trim().to_lowercase();
    rank_table
        .iter()
        .position(|line| line.trim().to_lowercase() == wanted)
        .map(|pos| pos as f64)
        .unwrap_or(UNRANKED)
}

// ==========================================
// 标签比较（自然序）
// ==========================================
// 忽略大小写；连续数字按数值比较（"M2" < "M10"）；最后按原串兜底保证全序
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    natural_cmp(&a.to_lowercase(), &b.to_lowercase()).then_with(|| a.cmp(b))
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digit_run(&mut left);
                let r_run = take_digit_run(&mut right);
                let ord = compare_digit_runs(&l_run, &r_run);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        .then_with(|| a.len().cmp(&b.len()))
}

// ==========================================
// OrderingPolicy - 计划域排序策略
// ==========================================
#[derive(Debug, Clone)]
pub struct OrderingPolicy {
    domain: PlanDomain,
    line_rank_table: Vec<String>,
}

impl OrderingPolicy {
    /// 按计划域构造
    ///
    /// # 参数
    /// - domain: 计划域
    /// - line_rank_table: 产线域的固定名次表（机台域忽略）
    pub fn for_domain(domain: PlanDomain, line_rank_table: &[String]) -> Self {
        Self {
            domain,
            line_rank_table: line_rank_table.to_vec(),
        }
    }

    pub fn domain(&self) -> PlanDomain {
        self.domain
    }

    /// 名次: 越小越靠前
    pub fn rank(&self, identifier: Option<&str>) -> f64 {
        match self.domain {
            PlanDomain::Machine => machine_number_rank(identifier),
            PlanDomain::NamedLine => named_line_rank(identifier, &self.line_rank_table),
        }
    }

    // 缺失机台名的行按 UNRANKED 处理，不用合成的显示名参与排名
    fn series_rank(&self, series: &MachineSeries) -> f64 {
        self.rank(series.raw_machine_name.as_deref())
    }

    /// 比较器: 名次 → 显示名（自然序） → 机台键
    pub fn compare(&self, a: &MachineSeries, b: &MachineSeries) -> Ordering {
        self.series_rank(a)
            .total_cmp(&self.series_rank(b))
            .then_with(|| compare_labels(&a.display_label, &b.display_label))
            .then_with(|| compare_labels(&a.machine_key, &b.machine_key))
    }

    /// 排序整行序列
    pub fn sort(&self, mut series: Vec<MachineSeries>) -> Vec<MachineSeries> {
        series.sort_by(|a, b| self.compare(a, b));
        series
    }
}
