// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use production_plan_board::config::BoardProfile;
use production_plan_board::domain::{NumberOrText, PlanSummaryRecord, RawPlanRecord};

/// 英文文案的看板配置（断言显示名时使用，不受当前语言影响）
pub fn english_profile() -> BoardProfile {
    BoardProfile {
        placeholder_model_label: "Model".to_string(),
        summary_column_label: "Planned".to_string(),
        unassigned_machine_label: "Unassigned".to_string(),
        ..BoardProfile::default()
    }
}

// ==========================================
// RawPlanRecord 构建器
// ==========================================

pub struct PlanRecordBuilder {
    record: RawPlanRecord,
}

impl PlanRecordBuilder {
    pub fn new(machine_name: &str) -> Self {
        Self {
            record: RawPlanRecord {
                machine_name: Some(machine_name.to_string()),
                ..RawPlanRecord::default()
            },
        }
    }

    /// 无机台名
    pub fn unassigned() -> Self {
        Self {
            record: RawPlanRecord::default(),
        }
    }

    pub fn part_no(mut self, part_no: &str) -> Self {
        self.record.part_no = Some(part_no.to_string());
        self
    }

    pub fn model_name(mut self, model_name: &str) -> Self {
        self.record.model_name = Some(model_name.to_string());
        self
    }

    pub fn part_spec(mut self, part_spec: &str) -> Self {
        self.record.part_spec = Some(part_spec.to_string());
        self
    }

    pub fn qty(mut self, qty: f64) -> Self {
        self.record.planned_quantity = Some(NumberOrText::Number(qty));
        self
    }

    pub fn lot(mut self, lot: i64) -> Self {
        self.record.lot_no = Some(NumberOrText::Number(lot as f64));
        self
    }

    pub fn lot_text(mut self, lot: &str) -> Self {
        self.record.lot_no = Some(NumberOrText::Text(lot.to_string()));
        self
    }

    pub fn build(self) -> RawPlanRecord {
        self.record
    }
}

/// 机台日汇总
pub fn summary(machine_name: &str, plan_date: &str, qty: f64) -> PlanSummaryRecord {
    PlanSummaryRecord {
        machine_name: Some(machine_name.to_string()),
        plan_date: Some(plan_date.to_string()),
        plan_qty: Some(NumberOrText::Number(qty)),
    }
}
