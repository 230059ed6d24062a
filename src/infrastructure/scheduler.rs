// Periodic refresh schedule
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::application::fitness_service::FitnessDataService;

/// A zero interval would panic inside `tokio::time::interval`.
const MIN_INTERVAL: Duration = Duration::from_secs(60);

/// Requests an update immediately and then on every interval tick, for the
/// lifetime of the panel. Failures are logged and dropped; the next tick
/// tries again.
pub fn spawn_update_schedule(
    service: Arc<dyn FitnessDataService>,
    interval: Duration,
) -> JoinHandle<()> {
    let interval = if interval < MIN_INTERVAL {
        tracing::warn!(
            configured_secs = interval.as_secs(),
            "refresh interval below one minute, clamping"
        );
        MIN_INTERVAL
    } else {
        interval
    };

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if let Err(err) = service.request_update().await {
                tracing::warn!(error = %err, "refresh request failed");
            }
        }
    })
}
