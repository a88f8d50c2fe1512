//! Visual effects emitted by the interaction engine.
//!
//! Effect is the typed vocabulary of visual-state changes a host applies to the
//! element addressed by a TargetPath. EffectOp serializes to JSON as:
//!   { "path": "page/hero/StatCounter0", "effect": { "type": "Text", "data": "1,500" } }
//!
//! EffectBatch is a simple Vec<EffectOp> with helpers; the engine emits one
//! batch per frame and hosts apply it idempotently.

use crate::target_path::TargetPath;
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_scale() -> f32 {
    1.0
}

/// Declarative 2.5-D transform. Hosts render it as a CSS transform string;
/// the engine only ever fills the components a given mechanism needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2d {
    #[serde(default)]
    pub translate_x_px: f32,
    #[serde(default)]
    pub translate_y_px: f32,
    #[serde(default)]
    pub translate_z_px: f32,
    #[serde(default)]
    pub rotate_x_deg: f32,
    #[serde(default)]
    pub rotate_y_deg: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective_px: Option<f32>,
}

impl Default for Transform2d {
    fn default() -> Self {
        Self {
            translate_x_px: 0.0,
            translate_y_px: 0.0,
            translate_z_px: 0.0,
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            scale: 1.0,
            perspective_px: None,
        }
    }
}

impl Transform2d {
    /// Plain 2-D translation (magnetic pull, swipe offset).
    pub fn translate(x_px: f32, y_px: f32) -> Self {
        Self {
            translate_x_px: x_px,
            translate_y_px: y_px,
            ..Self::default()
        }
    }

    /// Vertical parallax shift.
    pub fn parallax(y_px: f32) -> Self {
        Self::translate(0.0, y_px)
    }

    /// Perspective tilt with lift; zero angles express the rest pose.
    pub fn tilt(rotate_x_deg: f32, rotate_y_deg: f32, lift_px: f32, perspective_px: f32) -> Self {
        Self {
            rotate_x_deg,
            rotate_y_deg,
            translate_z_px: lift_px,
            perspective_px: Some(perspective_px),
            ..Self::default()
        }
    }

    /// Uniform scale (press feedback, swatch zoom).
    pub fn scaled(scale: f32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }
}

/// Drop-shadow description for header glow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowSpec {
    pub x_px: f32,
    pub y_px: f32,
    pub blur_px: f32,
    pub color: String,
}

/// Transient notice lifecycle; ids are minted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NoticeAction {
    Show { id: u32, message: String },
    Dismiss { id: u32 },
}

/// One visual-state change for a target element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Effect {
    ClassAdd(String),
    ClassRemove(String),
    Transform(Transform2d),
    TransformClear,
    Opacity(f32),
    Transition {
        property: String,
        duration_ms: f32,
        easing: String,
    },
    TransitionClear,
    /// Replace the element's text content (counter display writes).
    Text(String),
    /// Per-item animation delay for staggered grids.
    AnimationDelay {
        seconds: f32,
    },
    CssVar {
        name: String,
        value: String,
    },
    MinHeightPx(f32),
    GridColumns(u8),
    /// Freeze or release body scrolling while a drawer is open.
    ScrollLock(bool),
    ScrollTo {
        top: f32,
        smooth: bool,
    },
    /// Swap in a deferred image source.
    ImageSource(String),
    Haptic {
        milliseconds: u32,
    },
    SpawnParticle {
        left_percent: f32,
        delay_s: f32,
        duration_s: f32,
    },
    Notice(NoticeAction),
    Shadow(Option<ShadowSpec>),
    BackdropBlur(Option<f32>),
}

/// Effect paired with the element it targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectOp {
    pub path: TargetPath,
    pub effect: Effect,
}

impl EffectOp {
    pub fn new(path: TargetPath, effect: Effect) -> Self {
        Self { path, effect }
    }
}

impl fmt::Display for EffectOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eff = serde_json::to_string(&self.effect).map_err(|_| fmt::Error)?;
        write!(f, "{{ path: {}, effect: {} }}", self.path, eff)
    }
}

/// A batch of effect operations. The engine emits one EffectBatch per frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectBatch(pub Vec<EffectOp>);

impl EffectBatch {
    pub fn new() -> Self {
        EffectBatch(Vec::new())
    }

    pub fn push(&mut self, op: EffectOp) {
        self.0.push(op);
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = EffectOp>) {
        self.0.extend(other);
    }

    pub fn into_vec(self) -> Vec<EffectOp> {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectOp> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Merge another batch in-place (append).
    pub fn append(&mut self, mut other: EffectBatch) {
        self.0.append(&mut other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> TargetPath {
        TargetPath::parse(s).unwrap()
    }

    #[test]
    fn effectop_roundtrip_json() {
        let op = EffectOp::new(path("page/hero/Counter0"), Effect::Text("1,500".into()));
        let s = serde_json::to_string(&op).unwrap();
        let parsed: EffectOp = serde_json::from_str(&s).unwrap();
        assert_eq!(op, parsed);
    }

    #[test]
    fn effect_json_is_type_data_tagged() {
        let e = Effect::ClassAdd("fade-in-up".into());
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["type"], "ClassAdd");
        assert_eq!(v["data"], "fade-in-up");
    }

    #[test]
    fn transform_defaults_omit_perspective() {
        let t = Transform2d::translate(3.0, -4.0);
        assert_eq!(t.scale, 1.0);
        let v = serde_json::to_value(Effect::Transform(t)).unwrap();
        assert!(v["data"].get("perspective_px").is_none());
        let back: Effect = serde_json::from_value(v).unwrap();
        assert_eq!(back, Effect::Transform(t));
    }

    #[test]
    fn effectbatch_json_array_roundtrip() {
        let mut b = EffectBatch::new();
        b.push(EffectOp::new(path("page/Card0"), Effect::TransformClear));
        b.push(EffectOp::new(
            path("page/Header"),
            Effect::Shadow(Some(ShadowSpec {
                x_px: 0.0,
                y_px: 4.0,
                blur_px: 30.0,
                color: "rgba(99, 102, 241, 0.15)".into(),
            })),
        ));
        let s = serde_json::to_string(&b).unwrap();
        let parsed: EffectBatch = serde_json::from_str(&s).unwrap();
        assert_eq!(b, parsed);
    }

    #[test]
    fn effectbatch_append_and_clear() {
        let mut a = EffectBatch::new();
        a.push(EffectOp::new(path("A"), Effect::Opacity(0.0)));
        let mut b = EffectBatch::new();
        b.push(EffectOp::new(path("B"), Effect::Opacity(1.0)));
        a.append(b);
        assert_eq!(a.len(), 2);
        a.clear();
        assert!(a.is_empty());
    }
}
