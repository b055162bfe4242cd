use rusqlite::Connection;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static SLOW_SQL_THRESHOLD_MS: AtomicU64 = AtomicU64::new(0);

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

fn truncate_sql(sql: &str, max_len: usize) -> String {
    let s = sql.trim().replace('\n', " ");
    match s.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}…", &s[..cut]),
        None => s,
    }
}

/// 安装 SQLite 慢查询日志（配置库读写）
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭
/// - `PRODUCTION_BOARD_PERF_SQL=1` 强制开启
/// - `PRODUCTION_BOARD_SLOW_SQL_MS=50` 配置慢 SQL 阈值（毫秒）
pub fn install_sqlite_tracing(conn: &mut Connection) {
    let enabled = match std::env::var("PRODUCTION_BOARD_PERF_SQL") {
        Ok(v) => is_true(&v),
        Err(_) => cfg!(debug_assertions),
    };

    if !enabled {
        conn.profile(None);
        return;
    }

    let slow_ms = std::env::var("PRODUCTION_BOARD_SLOW_SQL_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(if cfg!(debug_assertions) { 50 } else { 200 });
    SLOW_SQL_THRESHOLD_MS.store(slow_ms, Ordering::Relaxed);

    conn.profile(Some(sql_profile_callback));
}

fn sql_profile_callback(sql: &str, duration: Duration) {
    let ms = duration.as_millis() as u64;
    let threshold = SLOW_SQL_THRESHOLD_MS.load(Ordering::Relaxed);
    if threshold > 0 && ms >= threshold {
        tracing::warn!(
            target: "slow_sql",
            duration_ms = ms,
            sql = %truncate_sql(sql, 420),
            "slow sql"
        );
    }
}

/// 性能统计 Guard：记录 elapsed_ms + 处理的行数
///
/// 使用方式：
/// ```ignore
/// let mut perf = production_plan_board::perf::PerfGuard::new("build_domain_board");
/// perf.set_rows(series.len());
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    rows: usize,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            rows: 0,
        }
    }

    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows;
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            rows = self.rows,
            "done"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_sql_respects_char_boundaries() {
        assert_eq!(truncate_sql("SELECT 1", 100), "SELECT 1");
        assert_eq!(truncate_sql("SELECT\n'看板'", 8), "SELECT '…");
    }

    #[test]
    fn test_is_true() {
        assert!(is_true(" YES "));
        assert!(!is_true("0"));
    }
}
