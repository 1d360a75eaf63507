//! Retention sweeper
//!
//! Deletes ledger rows that are both terminal (`completed`/`canceled`) AND
//! dated before today. Idempotent: a run with nothing to do removes 0 rows.
//! The admin trigger endpoint and the daily background task both call
//! [`purge_expired`]; only the schedule differs.

use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;

use crate::core::ServerState;
use crate::db::repository::RepoResult;
use crate::utils::time;

/// Delete terminal appointments dated strictly before `today` (YYYY-MM-DD)
///
/// `pending`/`confirmed` rows are never touched, regardless of date.
/// Returns the number of rows removed.
pub async fn purge_expired(pool: &SqlitePool, today: &str) -> RepoResult<u64> {
    let result = sqlx::query(
        "DELETE FROM appointment WHERE date < ? AND status IN ('completed', 'canceled')",
    )
    .bind(today)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// 每日清理循环 (Periodic 后台任务)
///
/// 睡到配置的本地时刻 (PURGE_HOUR:PURGE_MINUTE)，执行 [`purge_expired`]，
/// 然后等下一天。单次失败只记日志，下个周期重试；收到取消信号立即退出。
pub async fn run_daily_purge(state: ServerState, shutdown: CancellationToken) {
    loop {
        let delay = std::time::Duration::from_millis(time::ms_until_next(
            state.config.purge_hour,
            state.config.purge_minute,
        ));
        tracing::debug!(
            next_run_in_secs = delay.as_secs(),
            "Daily purge scheduled"
        );

        tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::info!("Daily purge task stopping");
                return;
            }
            _ = tokio::time::sleep(delay) => {}
        }

        match purge_expired(&state.pool, &time::today_string()).await {
            Ok(removed) => {
                tracing::info!(removed, "Daily retention purge completed");
            }
            Err(e) => {
                // Not fatal: retried on the next cycle
                tracing::error!(error = %e, "Daily retention purge failed");
            }
        }
    }
}
