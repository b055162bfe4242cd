// ==========================================
// 生产计划看板 - 计划快照数据源
// ==========================================
// 职责: 外部取数协作方的接口（后端接口、文件等）
// 看板只消费已取回的快照，网络 I/O 与重试不在这里处理
// ==========================================

use crate::domain::plan::PlanSnapshot;
use crate::domain::types::PlanDomain;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 数据源错误
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("计划快照不存在: {0}")]
    NotFound(String),

    #[error("读取计划快照失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("计划快照格式错误: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("数据源不可用: {0}")]
    Unavailable(String),
}

// ==========================================
// PlanSnapshotSource Trait
// ==========================================
#[async_trait]
pub trait PlanSnapshotSource: Send + Sync {
    /// 取回指定计划域、指定日期的快照
    async fn fetch_snapshot(
        &self,
        domain: PlanDomain,
        plan_date: NaiveDate,
    ) -> Result<PlanSnapshot, SourceError>;
}

// ==========================================
// DaySnapshotFile - 单日快照文件格式
// ==========================================
// { "plan_date": "2026-05-06", "machine": {...}, "named_line": {...} }
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaySnapshotFile {
    #[serde(default)]
    pub plan_date: Option<NaiveDate>,
    #[serde(default)]
    pub machine: PlanSnapshot,
    #[serde(default)]
    pub named_line: PlanSnapshot,
}

impl DaySnapshotFile {
    pub fn snapshot(&self, domain: PlanDomain) -> &PlanSnapshot {
        match domain {
            PlanDomain::Machine => &self.machine,
            PlanDomain::NamedLine => &self.named_line,
        }
    }
}

// ==========================================
// JsonFileSnapshotSource - JSON 文件数据源（CLI 使用）
// ==========================================
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotSource {
    path: PathBuf,
}

impl JsonFileSnapshotSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 读取并解析整份文件
    pub async fn load(&self) -> Result<DaySnapshotFile, SourceError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(SourceError::Io(e)),
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl PlanSnapshotSource for JsonFileSnapshotSource {
    async fn fetch_snapshot(
        &self,
        domain: PlanDomain,
        plan_date: NaiveDate,
    ) -> Result<PlanSnapshot, SourceError> {
        let file = self.load().await?;
        let snapshot = file.snapshot(domain);

        // 文件级、计划域级日期任一与请求日期不一致时视为无数据
        let mismatch = [file.plan_date, snapshot.plan_date]
            .into_iter()
            .flatten()
            .find(|date| *date != plan_date);
        if let Some(snapshot_date) = mismatch {
            tracing::warn!(%domain, %snapshot_date, %plan_date, "快照日期与请求日期不一致");
            return Ok(PlanSnapshot {
                plan_date: Some(plan_date),
                ..PlanSnapshot::default()
            });
        }

        let mut snapshot = snapshot.clone();
        snapshot.plan_date = Some(plan_date);
        Ok(snapshot)
    }
}
