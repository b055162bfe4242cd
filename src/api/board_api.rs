// ==========================================
// 生产计划看板 - 看板 API
// ==========================================
// 职责: 取数（两个计划域并发） → 构建看板 → 两域布局对齐
// 架构: API 层 → PlanSnapshotSource（外部取数） + BoardBuilder（纯引擎）
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::try_join;

use crate::api::error::{ApiError, ApiResult};
use crate::api::plan_source::PlanSnapshotSource;
use crate::config::{BoardConfigReader, BoardProfile};
use crate::domain::types::PlanDomain;
use crate::engine::orchestrator::{BoardBuilder, DayBoard, DomainBoard};
use crate::perf::PerfGuard;

// ==========================================
// BoardApi - 看板 API
// ==========================================
pub struct BoardApi {
    source: Arc<dyn PlanSnapshotSource>,
    config: Arc<dyn BoardConfigReader>,
}

impl BoardApi {
    /// 创建新的BoardApi实例
    ///
    /// # 参数
    /// - source: 计划快照数据源
    /// - config: 看板配置读取器
    pub fn new(source: Arc<dyn PlanSnapshotSource>, config: Arc<dyn BoardConfigReader>) -> Self {
        Self { source, config }
    }

    /// 解析前端传入的日期（YYYY-MM-DD）
    pub fn parse_plan_date(raw: &str) -> ApiResult<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ApiError::InvalidInput("计划日期不能为空".to_string()));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| ApiError::InvalidInput(format!("计划日期格式错误({}): {}", raw, e)))
    }

    async fn load_profile(&self) -> ApiResult<BoardProfile> {
        self.config
            .load_board_profile()
            .await
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }

    /// 构建单个计划域的看板（不做跨域对齐）
    pub async fn build_domain_board(
        &self,
        domain: PlanDomain,
        plan_date: NaiveDate,
    ) -> ApiResult<DomainBoard> {
        let profile = self.load_profile().await?;
        let mut snapshot = self.source.fetch_snapshot(domain, plan_date).await?;
        snapshot.plan_date.get_or_insert(plan_date);

        let mut perf = PerfGuard::new("build_domain_board");
        let board = BoardBuilder::new(profile).build(domain, &snapshot);
        perf.set_rows(board.series.len());

        Ok(board)
    }

    /// 构建单日看板（两个计划域并排，布局对齐）
    pub async fn build_day_board(&self, plan_date: NaiveDate) -> ApiResult<DayBoard> {
        let profile = self.load_profile().await?;

        let (mut machine_snapshot, mut line_snapshot) = try_join(
            self.source.fetch_snapshot(PlanDomain::Machine, plan_date),
            self.source.fetch_snapshot(PlanDomain::NamedLine, plan_date),
        )
        .await?;
        machine_snapshot.plan_date.get_or_insert(plan_date);
        line_snapshot.plan_date.get_or_insert(plan_date);

        let mut perf = PerfGuard::new("build_day_board");
        let board = BoardBuilder::new(profile).build_day(plan_date, &machine_snapshot, &line_snapshot);
        perf.set_rows(board.machine.series.len() + board.named_line.series.len());

        tracing::info!(
            %plan_date,
            machine_rows = board.machine.series.len(),
            line_rows = board.named_line.series.len(),
            chart_height = board.unified_layout.chart_height,
            "看板构建完成"
        );

        Ok(board)
    }
}
