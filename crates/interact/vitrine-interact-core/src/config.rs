//! Engine configuration.
//!
//! Defaults carry the storefront's original tuning (2000 ms counters, 100 px
//! swipe threshold, 250 ms resize debounce, ...); every knob is adjustable by
//! the host. All durations are in milliseconds to match the host timestamp
//! model.

use crate::error::InteractError;
use serde::{Deserialize, Serialize};
use vitrine_api_core::Margin;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Visible fraction at which cards and sections reveal.
    pub reveal_threshold: f32,
    /// Viewport expansion used while watching for reveals.
    pub reveal_margin: Margin,
    /// Visible fraction at which counters start.
    pub counter_threshold: f32,
    /// Counter run length.
    pub counter_duration_ms: f64,
    /// Early-load margin for deferred images.
    pub lazy_margin: Margin,
    /// Scroll offset past which the header condenses.
    pub header_scroll_threshold: f32,
    /// Drag distance that closes a drawer.
    pub swipe_threshold_px: f32,
    /// Quiet period before resize work runs.
    pub resize_debounce_ms: f64,
    /// Settle delay for section reloads and orientation changes.
    pub settle_delay_ms: f64,
    /// Auto-dismiss delay for cart notices.
    pub notice_duration_ms: f64,
    /// Snap-back transition length after an under-threshold swipe.
    pub drawer_transition_ms: f64,
    /// Pointer-follow factor for primary buttons.
    pub magnetic_strength: f32,
    /// Card tilt amplitude in degrees.
    pub tilt_max_deg: f32,
    pub tilt_perspective_px: f32,
    /// Lift along z while tilted.
    pub tilt_lift_px: f32,
    /// Touch feedback scale for cards.
    pub press_scale: f32,
    /// Swatch hover zoom.
    pub swatch_scale: f32,
    /// Per-item animation delay step for staggered grids.
    pub stagger_step_ms: f64,
    /// Gap kept below the header when scrolling to an anchor.
    pub anchor_gap_px: f32,
    /// Lazy-image fade-in transition length.
    pub image_fade_ms: f32,
    /// Breakpoints (inclusive upper bounds).
    pub mobile_max_width: f32,
    pub tablet_max_width: f32,
    /// Width above which the dense hero particle count applies.
    pub particle_width_cutoff: f32,
    pub particles_dense: u32,
    pub particles_sparse: u32,
    pub tablet_grid_columns: u8,
    pub haptic_pulse_ms: u32,
    /// Seed for particle placement; fixed so output is reproducible.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            reveal_margin: Margin::bottom_only(-50.0),
            counter_threshold: 0.5,
            counter_duration_ms: 2000.0,
            lazy_margin: Margin::all(50.0),
            header_scroll_threshold: 100.0,
            swipe_threshold_px: 100.0,
            resize_debounce_ms: 250.0,
            settle_delay_ms: 100.0,
            notice_duration_ms: 3000.0,
            drawer_transition_ms: 300.0,
            magnetic_strength: 0.2,
            tilt_max_deg: 5.0,
            tilt_perspective_px: 1000.0,
            tilt_lift_px: 10.0,
            press_scale: 0.98,
            swatch_scale: 1.2,
            stagger_step_ms: 100.0,
            anchor_gap_px: 20.0,
            image_fade_ms: 500.0,
            mobile_max_width: 749.0,
            tablet_max_width: 989.0,
            particle_width_cutoff: 768.0,
            particles_dense: 20,
            particles_sparse: 10,
            tablet_grid_columns: 3,
            haptic_pulse_ms: 10,
            seed: 0x5eed_beef,
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), InteractError> {
        fn unit(name: &str, v: f32) -> Result<(), InteractError> {
            if !(0.0..=1.0).contains(&v) || !v.is_finite() {
                return Err(InteractError::InvalidConfig {
                    reason: format!("{name} must lie in [0, 1]"),
                });
            }
            Ok(())
        }
        fn positive_ms(name: &str, v: f64) -> Result<(), InteractError> {
            if v <= 0.0 || !v.is_finite() {
                return Err(InteractError::InvalidConfig {
                    reason: format!("{name} must be positive and finite"),
                });
            }
            Ok(())
        }

        unit("reveal_threshold", self.reveal_threshold)?;
        unit("counter_threshold", self.counter_threshold)?;
        positive_ms("counter_duration_ms", self.counter_duration_ms)?;
        positive_ms("resize_debounce_ms", self.resize_debounce_ms)?;
        positive_ms("settle_delay_ms", self.settle_delay_ms)?;
        positive_ms("notice_duration_ms", self.notice_duration_ms)?;
        positive_ms("drawer_transition_ms", self.drawer_transition_ms)?;
        positive_ms("stagger_step_ms", self.stagger_step_ms)?;

        if self.swipe_threshold_px <= 0.0 || !self.swipe_threshold_px.is_finite() {
            return Err(InteractError::InvalidConfig {
                reason: "swipe_threshold_px must be positive and finite".into(),
            });
        }
        if !self.magnetic_strength.is_finite() {
            return Err(InteractError::InvalidConfig {
                reason: "magnetic_strength must be finite".into(),
            });
        }
        if self.press_scale <= 0.0 || self.press_scale > 1.0 {
            return Err(InteractError::InvalidConfig {
                reason: "press_scale must lie in (0, 1]".into(),
            });
        }
        if self.swatch_scale < 1.0 || !self.swatch_scale.is_finite() {
            return Err(InteractError::InvalidConfig {
                reason: "swatch_scale must be >= 1".into(),
            });
        }
        if self.mobile_max_width >= self.tablet_max_width {
            return Err(InteractError::InvalidConfig {
                reason: "mobile_max_width must be below tablet_max_width".into(),
            });
        }
        if self.tablet_grid_columns == 0 {
            return Err(InteractError::InvalidConfig {
                reason: "tablet_grid_columns must be greater than 0".into(),
            });
        }
        Ok(())
    }

    /// Set the counter run length
    #[inline]
    pub fn with_counter_duration_ms(mut self, ms: f64) -> Self {
        self.counter_duration_ms = ms;
        self
    }

    /// Set the drag distance that closes a drawer
    #[inline]
    pub fn with_swipe_threshold_px(mut self, px: f32) -> Self {
        self.swipe_threshold_px = px;
        self
    }

    /// Set the resize quiet period
    #[inline]
    pub fn with_resize_debounce_ms(mut self, ms: f64) -> Self {
        self.resize_debounce_ms = ms;
        self
    }

    /// Set the reveal visibility threshold
    #[inline]
    pub fn with_reveal_threshold(mut self, threshold: f32) -> Self {
        self.reveal_threshold = threshold;
        self
    }

    /// Set the notice auto-dismiss delay
    #[inline]
    pub fn with_notice_duration_ms(mut self, ms: f64) -> Self {
        self.notice_duration_ms = ms;
        self
    }

    /// Set the particle RNG seed
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let cfg = Config::default().with_reveal_threshold(1.5);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_inverted_breakpoints() {
        let mut cfg = Config::default();
        cfg.mobile_max_width = 1000.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn serde_roundtrip_with_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        let s = serde_json::to_string(&cfg).unwrap();
        let back: Config = serde_json::from_str(&s).unwrap();
        assert_eq!(cfg, back);
    }
}
