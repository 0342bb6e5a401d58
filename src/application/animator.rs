// Value animator - eased interpolation of displayed KPI numbers
use crate::application::render_surface::RenderSurface;
use crate::domain::metric::{parse_displayed, DisplayFormat, MetricValue};
use crate::infrastructure::config::AnimationSettings;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Quartic ease-out: fast start, decelerating towards 1.
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub value: MetricValue,
    pub progress: f64,
}

impl Frame {
    pub fn is_final(&self) -> bool {
        self.progress >= 1.0
    }
}

/// One interpolation from `from` to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: u64,
    to: u64,
    format: DisplayFormat,
    duration: Duration,
}

impl Animation {
    /// `duration` must be non-zero.
    pub fn new(from: u64, target: MetricValue, duration: Duration) -> Self {
        Self {
            from,
            to: target.magnitude,
            format: target.format,
            duration,
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn frame(&self, elapsed: Duration) -> Frame {
        let progress = self.progress(elapsed);
        // The last frame lands on the target itself; f64 cannot hold every u64.
        let current = if progress >= 1.0 {
            self.to
        } else {
            let eased = ease_out_quart(progress);
            let from = self.from as f64;
            (from + (self.to as f64 - from) * eased).round() as u64
        };
        Frame {
            value: MetricValue::new(current, self.format),
            progress,
        }
    }
}

/// Drives animations against a render surface, one task per element.
///
/// Starting an animation on an element that is still animating aborts the
/// earlier task before the new one is spawned, so two animations never write
/// to the same element. Tasks must run on a current-thread runtime for the
/// abort to take effect before the old task can poll again.
pub struct ValueAnimator {
    surface: Arc<dyn RenderSurface>,
    duration: Duration,
    frame_interval: Duration,
    in_flight: HashMap<String, AbortHandle>,
}

impl ValueAnimator {
    pub fn new(surface: Arc<dyn RenderSurface>, settings: &AnimationSettings) -> Self {
        Self {
            surface,
            duration: settings.duration(),
            frame_interval: settings.frame_interval(),
            in_flight: HashMap::new(),
        }
    }

    /// Animate the element's displayed number to `target`.
    /// Returns `false` when nothing was started (missing element or non-numeric text).
    pub fn animate(&mut self, key: &str, target: MetricValue) -> bool {
        let Some(text) = self.surface.get_text(key) else {
            tracing::debug!(element = key, "Skipping animation - element not found");
            return false;
        };
        let Some(from) = parse_displayed(&text) else {
            tracing::warn!(
                element = key,
                text = %text,
                "Skipping animation - displayed text is not numeric"
            );
            return false;
        };

        if let Some(previous) = self.in_flight.remove(key) {
            if !previous.is_finished() {
                tracing::debug!(element = key, "Superseding in-flight animation");
            }
            previous.abort();
        }

        let animation = Animation::new(from, target, self.duration);
        tracing::debug!(element = key, from, to = target.magnitude, "Starting animation");

        let handle = tokio::spawn(run_animation(
            self.surface.clone(),
            key.to_string(),
            animation,
            self.frame_interval,
        ));
        self.in_flight.insert(key.to_string(), handle.abort_handle());
        true
    }

    /// Keys of elements whose animation has not finished yet.
    pub fn animating(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .in_flight
            .iter()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }
}

impl Drop for ValueAnimator {
    fn drop(&mut self) {
        for handle in self.in_flight.values() {
            handle.abort();
        }
    }
}

async fn run_animation(
    surface: Arc<dyn RenderSurface>,
    key: String,
    animation: Animation,
    frame_interval: Duration,
) {
    let start = Instant::now();
    let mut ticker = tokio::time::interval(frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        let frame = animation.frame(start.elapsed());
        if !surface.set_text(&key, &frame.value.render()) {
            tracing::debug!(element = %key, "Element removed mid-animation");
            return;
        }
        if frame.is_final() {
            break;
        }
    }
}
