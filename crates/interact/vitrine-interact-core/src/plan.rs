//! Activation plan: which mechanisms get registered for a capability snapshot.
//!
//! This is the policy table made explicit and serializable. The plan is built
//! once from the startup Capabilities and never rebuilt; re-initialization
//! after a section reload reuses the original plan.

use crate::env::{Capabilities, DeviceClass};
use crate::config::Config;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivationPlan {
    // Animation mechanisms (suppressed wholesale by reduced motion).
    pub reveal: bool,
    pub parallax: bool,
    pub particles: bool,
    pub stagger: bool,
    pub tilt: bool,
    // Pointer mechanisms.
    pub magnetic: bool,
    pub swatch_hover: bool,
    // Touch bundle.
    pub touch_feedback: bool,
    pub swipe_gestures: bool,
    pub haptics: bool,
    pub menu_scroll_lock: bool,
    pub shimmer_lazy_load: bool,
    // Always-on surfaces (register regardless of reduced motion).
    pub counters: bool,
    pub header_condense: bool,
    pub anchors: bool,
    pub image_fade: bool,
    pub notices: bool,
    // Layout overrides.
    pub tablet_grid: bool,
    /// Applied after initial registration, not a registration gate.
    pub reduced_animation_override: bool,
}

impl ActivationPlan {
    pub fn build(caps: &Capabilities, _cfg: &Config) -> Self {
        let motion = !caps.reduced_motion;
        let mobile = caps.device == DeviceClass::Mobile;
        let touch_bundle = mobile || caps.touch;
        Self {
            reveal: motion && caps.observation,
            parallax: motion && !mobile,
            particles: motion && !mobile,
            stagger: motion,
            tilt: motion && !caps.touch && caps.device == DeviceClass::Desktop,
            magnetic: !caps.touch,
            swatch_hover: true,
            touch_feedback: touch_bundle,
            swipe_gestures: touch_bundle,
            haptics: touch_bundle && caps.haptics,
            menu_scroll_lock: touch_bundle,
            shimmer_lazy_load: touch_bundle && caps.observation,
            counters: caps.observation,
            header_condense: true,
            anchors: true,
            image_fade: true,
            notices: true,
            tablet_grid: caps.device == DeviceClass::Tablet,
            reduced_animation_override: caps.slow_connection,
        }
    }

    /// Names of the enabled mechanisms, for the startup event and log line.
    pub fn mechanisms(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut add = |on: bool, name: &'static str| {
            if on {
                out.push(name);
            }
        };
        add(self.reveal, "reveal");
        add(self.parallax, "parallax");
        add(self.particles, "particles");
        add(self.stagger, "stagger");
        add(self.tilt, "tilt");
        add(self.magnetic, "magnetic");
        add(self.swatch_hover, "swatch-hover");
        add(self.touch_feedback, "touch-feedback");
        add(self.swipe_gestures, "swipe-gestures");
        add(self.haptics, "haptics");
        add(self.menu_scroll_lock, "menu-scroll-lock");
        add(self.shimmer_lazy_load, "shimmer-lazy-load");
        add(self.counters, "counters");
        add(self.header_condense, "header-condense");
        add(self.anchors, "anchors");
        add(self.image_fade, "image-fade");
        add(self.notices, "notices");
        add(self.tablet_grid, "tablet-grid");
        out
    }

    /// True when no watcher-driven or frame-driven animation runs at all.
    pub fn animations_suppressed(&self) -> bool {
        !self.reveal && !self.parallax && !self.particles && !self.stagger && !self.tilt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnvProbe;

    fn plan_for(probe: EnvProbe) -> ActivationPlan {
        let cfg = Config::default();
        ActivationPlan::build(&Capabilities::classify(&probe, &cfg), &cfg)
    }

    #[test]
    fn reduced_motion_suppresses_all_animation_mechanisms() {
        let mut probe = EnvProbe::desktop(1400.0, 900.0);
        probe.prefers_reduced_motion = true;
        let plan = plan_for(probe);
        assert!(plan.animations_suppressed());
        // Non-animation surfaces stay registered.
        assert!(plan.anchors);
        assert!(plan.swatch_hover);
        assert!(plan.counters);
        assert!(plan.header_condense);
    }

    #[test]
    fn touch_suppresses_hover_only_mechanisms() {
        let mut probe = EnvProbe::desktop(1400.0, 900.0);
        probe.touch = true;
        probe.vibration = true;
        let plan = plan_for(probe);
        assert!(!plan.magnetic);
        assert!(!plan.tilt);
        assert!(plan.touch_feedback);
        assert!(plan.swipe_gestures);
        assert!(plan.haptics);
    }

    #[test]
    fn mobile_suppresses_parallax_and_particles() {
        let plan = plan_for(EnvProbe::desktop(390.0, 844.0));
        assert!(!plan.parallax);
        assert!(!plan.particles);
        assert!(plan.reveal);
        assert!(plan.menu_scroll_lock);
    }

    #[test]
    fn tablet_gets_grid_override_but_no_tilt() {
        let plan = plan_for(EnvProbe::desktop(800.0, 1024.0));
        assert!(plan.tablet_grid);
        assert!(!plan.tilt);
        assert!(plan.parallax);
    }

    #[test]
    fn missing_observation_degrades_watcher_mechanisms() {
        let mut probe = EnvProbe::desktop(1400.0, 900.0);
        probe.observation = false;
        let plan = plan_for(probe);
        assert!(!plan.reveal);
        assert!(!plan.counters);
        assert!(!plan.shimmer_lazy_load);
        // Image fade preparation does not need observation.
        assert!(plan.image_fade);
    }

    #[test]
    fn haptics_need_vibration_support() {
        let mut probe = EnvProbe::desktop(390.0, 844.0);
        probe.touch = true;
        probe.vibration = false;
        assert!(!plan_for(probe).haptics);
    }
}
