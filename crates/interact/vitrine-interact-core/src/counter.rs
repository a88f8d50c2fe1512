//! Counter animator: linear count-up from 0 to a target over a fixed duration.
//!
//! Display value at elapsed t is floor(end * clamp(t/duration, 0, 1)); once
//! the duration elapses the exact end value is written so no floating-point
//! drift survives at completion. The displayed value is monotonically
//! non-decreasing for non-decreasing time.

#[derive(Debug, Clone)]
pub struct CounterAnimator {
    end_value: u64,
    duration_ms: f64,
    started_at: f64,
    shown: Option<u64>,
    done: bool,
}

impl CounterAnimator {
    pub fn new(end_value: u64, duration_ms: f64, started_at: f64) -> Self {
        Self {
            end_value,
            duration_ms,
            started_at,
            shown: None,
            done: false,
        }
    }

    #[inline]
    pub fn end_value(&self) -> u64 {
        self.end_value
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Value that should be displayed at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> u64 {
        if self.duration_ms <= 0.0 {
            return self.end_value;
        }
        let progress = ((now_ms - self.started_at) / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.end_value
        } else {
            (self.end_value as f64 * progress).floor() as u64
        }
    }

    /// Advance to `now_ms`; returns the new display value only when it differs
    /// from what is already shown. Marks the animator done once the duration
    /// has elapsed and the terminal value is handed out.
    pub fn advance(&mut self, now_ms: f64) -> Option<u64> {
        if self.done {
            return None;
        }
        let value = self.sample(now_ms);
        if value == self.end_value && now_ms - self.started_at >= self.duration_ms {
            self.done = true;
        }
        if self.shown == Some(value) && !self.done {
            return None;
        }
        let changed = self.shown != Some(value);
        self.shown = Some(value);
        // The terminal frame always reports, so the exact end value is written
        // even when the floor already reached it.
        if changed || self.done {
            Some(value)
        } else {
            None
        }
    }
}

/// Group thousands with commas, the way the storefront rendered counters.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
