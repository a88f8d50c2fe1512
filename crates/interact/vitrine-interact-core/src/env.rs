//! Environment probing and one-time capability classification.
//!
//! The host reads its environment (media queries, touch points, connection
//! API, vibration API, observer support) once at startup and hands the raw
//! readings over as an EnvProbe. `Capabilities::classify` turns them into the
//! fixed snapshot that gates mechanism registration; it is a pure function of
//! probe and config and is never re-evaluated afterwards, so a device rotated
//! mid-session keeps its original classification.

use crate::config::Config;
use serde::{Deserialize, Serialize};

/// Effective connection type as reported by the host's connection API.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConnectionQuality {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
}

/// Raw environment readings supplied by the host once at startup.
/// `connection: None` means the connection API is unavailable, which is
/// treated the same as a fast connection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvProbe {
    pub viewport_width: f32,
    pub viewport_height: f32,
    #[serde(default)]
    pub touch: bool,
    #[serde(default)]
    pub prefers_reduced_motion: bool,
    #[serde(default)]
    pub connection: Option<ConnectionQuality>,
    #[serde(default)]
    pub vibration: bool,
    /// Whether the host can observe element visibility at all.
    #[serde(default = "default_true")]
    pub observation: bool,
}

fn default_true() -> bool {
    true
}

impl EnvProbe {
    /// A desktop probe with every capability present; handy default for hosts
    /// that only care about a subset of readings.
    pub fn desktop(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            touch: false,
            prefers_reduced_motion: false,
            connection: Some(ConnectionQuality::FourG),
            vibration: false,
            observation: true,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

/// Fixed snapshot of environment predicates computed at startup.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    pub device: DeviceClass,
    pub touch: bool,
    pub reduced_motion: bool,
    pub slow_connection: bool,
    pub haptics: bool,
    pub observation: bool,
}

impl Capabilities {
    /// Pure classification of a probe against the configured breakpoints.
    pub fn classify(probe: &EnvProbe, cfg: &Config) -> Self {
        let device = if probe.viewport_width <= cfg.mobile_max_width {
            DeviceClass::Mobile
        } else if probe.viewport_width <= cfg.tablet_max_width {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        };
        let slow_connection = matches!(
            probe.connection,
            Some(ConnectionQuality::Slow2g) | Some(ConnectionQuality::TwoG)
        );
        Self {
            device,
            touch: probe.touch,
            reduced_motion: probe.prefers_reduced_motion,
            slow_connection,
            haptics: probe.vibration,
            observation: probe.observation,
        }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.device == DeviceClass::Mobile
    }

    #[inline]
    pub fn is_tablet(&self) -> bool {
        self.device == DeviceClass::Tablet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive_upper_bounds() {
        let cfg = Config::default();
        let caps = |w: f32| Capabilities::classify(&EnvProbe::desktop(w, 800.0), &cfg).device;
        assert_eq!(caps(749.0), DeviceClass::Mobile);
        assert_eq!(caps(750.0), DeviceClass::Tablet);
        assert_eq!(caps(989.0), DeviceClass::Tablet);
        assert_eq!(caps(990.0), DeviceClass::Desktop);
    }

    #[test]
    fn slow_connection_detection() {
        let cfg = Config::default();
        let mut probe = EnvProbe::desktop(1200.0, 800.0);
        probe.connection = Some(ConnectionQuality::TwoG);
        assert!(Capabilities::classify(&probe, &cfg).slow_connection);
        probe.connection = Some(ConnectionQuality::ThreeG);
        assert!(!Capabilities::classify(&probe, &cfg).slow_connection);
        // API unavailable counts as fast.
        probe.connection = None;
        assert!(!Capabilities::classify(&probe, &cfg).slow_connection);
    }

    #[test]
    fn probe_serde_fills_defaults() {
        let probe: EnvProbe =
            serde_json::from_str(r#"{"viewport_width":390.0,"viewport_height":844.0}"#).unwrap();
        assert!(probe.observation);
        assert!(!probe.touch);
        assert!(probe.connection.is_none());
    }

    #[test]
    fn connection_quality_serde_names() {
        let q: ConnectionQuality = serde_json::from_str("\"slow-2g\"").unwrap();
        assert_eq!(q, ConnectionQuality::Slow2g);
        assert_eq!(serde_json::to_string(&ConnectionQuality::FourG).unwrap(), "\"4g\"");
    }
}
