use std::time::Duration;

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// An in-flight max-height animation, timed on the document clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActiveTransition {
    pub from: u16,
    pub to: u16,
    pub start: Duration,
    pub config: TransitionConfig,
}

impl ActiveTransition {
    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.config.duration
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Duration) -> u16 {
        if self.is_finished(now) || self.config.duration.is_zero() {
            return self.to;
        }

        let elapsed = now.saturating_sub(self.start).as_secs_f32();
        let t = (elapsed / self.config.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = self.config.easing.apply(t);

        let from = f32::from(self.from);
        let to = f32::from(self.to);
        (from + (to - from) * eased).round().clamp(0.0, f32::from(u16::MAX)) as u16
    }
}
