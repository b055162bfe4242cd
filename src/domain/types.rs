// ==========================================
// 生产计划看板 - 领域类型定义
// ==========================================
// 计划域: 离散机台（按机台编号排序） / 命名产线（按固定产线表排序）
// 两个计划域相互独立计算，各自拥有排序策略与补行规则
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 计划域 (Plan Domain)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与前端看板参数一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanDomain {
    Machine,   // 离散机台（编号机台）
    NamedLine, // 命名产线
}

impl PlanDomain {
    /// 全部计划域（看板左右两栏的固定顺序）
    pub const ALL: [PlanDomain; 2] = [PlanDomain::Machine, PlanDomain::NamedLine];

    /// 是否需要补齐固定产线行
    pub fn has_canonical_rows(&self) -> bool {
        matches!(self, PlanDomain::NamedLine)
    }
}

impl fmt::Display for PlanDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanDomain::Machine => write!(f, "MACHINE"),
            PlanDomain::NamedLine => write!(f, "NAMED_LINE"),
        }
    }
}

impl FromStr for PlanDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "MACHINE" => Ok(PlanDomain::Machine),
            "NAMED_LINE" | "LINE" => Ok(PlanDomain::NamedLine),
            other => Err(format!("未知计划域: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_domain_round_trip_through_display() {
        for domain in PlanDomain::ALL {
            let parsed: PlanDomain = domain.to_string().parse().unwrap();
            assert_eq!(parsed, domain);
        }
    }

    #[test]
    fn test_plan_domain_parse_is_lenient() {
        assert_eq!("named-line".parse::<PlanDomain>().unwrap(), PlanDomain::NamedLine);
        assert_eq!(" machine ".parse::<PlanDomain>().unwrap(), PlanDomain::Machine);
        assert!("furnace".parse::<PlanDomain>().is_err());
    }

    #[test]
    fn test_only_named_line_has_canonical_rows() {
        assert!(PlanDomain::NamedLine.has_canonical_rows());
        assert!(!PlanDomain::Machine.has_canonical_rows());
    }
}
