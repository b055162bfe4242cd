// ==========================================
// 生产计划看板 - 命令行入口
// ==========================================
// 用法: production-board <snapshot.json> [YYYY-MM-DD]
// 读取单日快照文件，输出两个计划域的看板 JSON
// 配置库: PRODUCTION_BOARD_DB 指定路径；未指定时使用默认路径（不存在则用内置配置）
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use production_plan_board::api::{BoardApi, JsonFileSnapshotSource};
use production_plan_board::config::{
    default_config_db_path, BoardConfigReader, BoardProfile, ConfigManager,
};
use production_plan_board::logging;

fn open_config() -> Result<Arc<dyn BoardConfigReader>> {
    let db_path = std::env::var("PRODUCTION_BOARD_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_db_path());

    if !db_path.exists() {
        tracing::info!(path = %db_path.display(), "配置库不存在，使用内置配置");
        return Ok(Arc::new(BoardProfile::default()));
    }

    tracing::info!(path = %db_path.display(), "使用配置库");
    let manager = ConfigManager::new(&db_path.to_string_lossy())
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("无法打开配置库: {}", db_path.display()))?;
    Ok(Arc::new(manager))
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    tracing::info!("生产计划看板 v{}", production_plan_board::VERSION);

    let mut args = std::env::args().skip(1);
    let Some(snapshot_path) = args.next() else {
        bail!("用法: production-board <snapshot.json> [YYYY-MM-DD]");
    };

    let source = JsonFileSnapshotSource::new(&snapshot_path);

    // 未指定日期时取文件内日期，再退回今天
    let plan_date = match args.next() {
        Some(raw) => BoardApi::parse_plan_date(&raw)?,
        None => source
            .load()
            .await
            .with_context(|| format!("读取快照失败: {}", snapshot_path))?
            .plan_date
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    };

    let api = BoardApi::new(Arc::new(source), open_config()?);
    let board = api.build_day_board(plan_date).await?;

    println!("{}", serde_json::to_string_pretty(&board)?);
    Ok(())
}
