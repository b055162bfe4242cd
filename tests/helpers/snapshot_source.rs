// ==========================================
// 内存快照数据源 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use chrono::NaiveDate;
use production_plan_board::api::{PlanSnapshotSource, SourceError};
use production_plan_board::domain::{PlanDomain, PlanSnapshot};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct InMemorySnapshotSource {
    pub machine: PlanSnapshot,
    pub named_line: PlanSnapshot,
    pub unavailable: Option<PlanDomain>,
    pub fetch_count: AtomicUsize,
}

impl InMemorySnapshotSource {
    pub fn new(machine: PlanSnapshot, named_line: PlanSnapshot) -> Self {
        Self {
            machine,
            named_line,
            ..Self::default()
        }
    }

    /// 指定计划域取数失败
    pub fn unavailable_for(mut self, domain: PlanDomain) -> Self {
        self.unavailable = Some(domain);
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanSnapshotSource for InMemorySnapshotSource {
    async fn fetch_snapshot(
        &self,
        domain: PlanDomain,
        _plan_date: NaiveDate,
    ) -> Result<PlanSnapshot, SourceError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.unavailable == Some(domain) {
            return Err(SourceError::Unavailable(format!("{} 接口超时", domain)));
        }
        Ok(match domain {
            PlanDomain::Machine => self.machine.clone(),
            PlanDomain::NamedLine => self.named_line.clone(),
        })
    }
}
