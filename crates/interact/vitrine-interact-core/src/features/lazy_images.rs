//! Deferred image handling: every lazy image is prepared for a fade-in at
//! registration (opacity 0 plus a transition); the load event fades it in.
//! On mobile/touch devices a zero-threshold watcher additionally applies a
//! shimmer placeholder and swaps in the deferred source just before the image
//! scrolls into range.

use crate::config::Config;
use crate::ids::ElemId;
use crate::outputs::Outputs;
use crate::page::ElementRole;
use crate::registry::{ElementRecord, ElementRegistry};
use crate::watcher::VisibilityWatcher;
use vitrine_api_core::{Effect, EffectOp, Rect};

pub const SHIMMER_CLASS: &str = "loading-shimmer";

#[derive(Debug)]
pub struct LazyImages {
    shimmer: VisibilityWatcher,
    shimmering: Vec<ElemId>,
    shimmer_enabled: bool,
    fade_ms: f32,
}

impl LazyImages {
    pub fn new(cfg: &Config, shimmer_enabled: bool) -> Self {
        Self {
            shimmer: VisibilityWatcher::new(0.0, cfg.lazy_margin),
            shimmering: Vec::new(),
            shimmer_enabled,
            fade_ms: cfg.image_fade_ms,
        }
    }

    /// Emit the fade preparation ops and arm the shimmer watcher.
    pub fn register(&mut self, registry: &ElementRegistry, out: &mut Outputs) {
        self.shimmer.unwatch_all();
        self.shimmering.clear();
        for record in registry.iter() {
            if !matches!(record.role, ElementRole::LazyImage { .. }) {
                continue;
            }
            out.push_op(EffectOp::new(record.path.clone(), Effect::Opacity(0.0)));
            out.push_op(EffectOp::new(
                record.path.clone(),
                Effect::Transition {
                    property: "opacity".to_string(),
                    duration_ms: self.fade_ms,
                    easing: "ease-in-out".to_string(),
                },
            ));
            if self.shimmer_enabled {
                self.shimmer.watch(record.id);
            }
        }
    }

    /// Shimmer pass: images entering the early-load band get the placeholder
    /// class and, when present, their deferred source.
    pub fn sweep(&mut self, viewport: &Rect, registry: &ElementRegistry, out: &mut Outputs) {
        for id in self.shimmer.sweep(viewport, registry) {
            let Some(record) = registry.get(id) else {
                continue;
            };
            out.push_op(EffectOp::new(
                record.path.clone(),
                Effect::ClassAdd(SHIMMER_CLASS.to_string()),
            ));
            if let ElementRole::LazyImage {
                source: Some(source),
            } = &record.role
            {
                out.push_op(EffectOp::new(
                    record.path.clone(),
                    Effect::ImageSource(source.clone()),
                ));
            }
            self.shimmering.push(id);
        }
    }

    /// Fade a finished image in; drops the shimmer placeholder if one was on.
    pub fn on_image_loaded(&mut self, record: &ElementRecord, out: &mut Outputs) {
        if !matches!(record.role, ElementRole::LazyImage { .. }) {
            return;
        }
        if let Some(pos) = self.shimmering.iter().position(|&id| id == record.id) {
            self.shimmering.swap_remove(pos);
            out.push_op(EffectOp::new(
                record.path.clone(),
                Effect::ClassRemove(SHIMMER_CLASS.to_string()),
            ));
        }
        out.push_op(EffectOp::new(record.path.clone(), Effect::Opacity(1.0)));
    }
}
