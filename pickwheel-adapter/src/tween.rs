/// A small tween helper for adapter-driven settle transitions.
///
/// Offsets are signed: picker columns translate into negative territory as the
/// selection moves down the list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        self.from + (self.to - self.from) * eased
    }

    /// Redirects an in-flight tween toward a new target, continuing from the
    /// currently sampled position.
    pub fn retarget(&mut self, now_ms: u64, new_to: f64, duration_ms: u64) {
        let current = self.sample(now_ms);
        *self = Self::new(current, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    /// Fast start, gentle landing; the closest match to a CSS settle curve.
    EaseOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}
