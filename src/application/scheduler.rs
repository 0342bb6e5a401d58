// Timers driving the controller - background updates and delayed refresh
use crate::application::controller::DashboardController;
use crate::domain::metric::KpiId;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub type SharedController = Arc<Mutex<DashboardController>>;

/// Every `period`, give the controller a chance to simulate a live update.
/// The first update is considered one full period after start.
pub fn spawn_realtime_updates(controller: SharedController, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let start = tokio::time::Instant::now() + period;
        let mut ticker = tokio::time::interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let updated = controller.lock().await.maybe_simulate_realtime_update();
            match updated {
                Some(kpi) => tracing::debug!(kpi = kpi.element_key(), "Real-time tick updated KPI"),
                None => tracing::trace!("Real-time tick skipped"),
            }
        }
    })
}

/// Refresh after a simulated fetch latency. The controller is not locked while waiting.
pub fn spawn_refresh(
    controller: SharedController,
    latency: Duration,
) -> JoinHandle<Vec<(KpiId, u64)>> {
    tokio::spawn(async move {
        tracing::debug!(latency_ms = latency.as_millis() as u64, "Refresh requested");
        tokio::time::sleep(latency).await;
        controller.lock().await.apply_refresh()
    })
}
