use std::sync::Arc;
use chrono::Utc;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};
use busline_order::SessionManager;

/// Periodically drops seat sessions nobody has touched within the idle timeout.
pub async fn start_session_sweeper(sessions: Arc<RwLock<SessionManager>>, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Session sweeper started, running every {:?}", period);

    loop {
        ticker.tick().await;
        let removed = sweep_once(&sessions).await;
        debug!(removed, "Session sweep finished");
    }
}

async fn sweep_once(sessions: &RwLock<SessionManager>) -> usize {
    sessions.write().await.cleanup_expired(Utc::now())
}
