//! Visibility watcher: exactly-once reveal triggering.
//!
//! Each watched element transitions `Unregistered -> Registered ->
//! Triggered(terminal)`. A sweep computes every watched element's visible
//! fraction against the margin-expanded viewport and returns (and unregisters)
//! the ones that first meet the threshold; leaving and re-entering the
//! viewport can never re-trigger.

use crate::ids::ElemId;
use crate::registry::ElementRegistry;
use vitrine_api_core::{visible_fraction, Margin, Rect};

#[derive(Debug)]
pub struct VisibilityWatcher {
    threshold: f32,
    margin: Margin,
    watched: Vec<ElemId>,
}

impl VisibilityWatcher {
    pub fn new(threshold: f32, margin: Margin) -> Self {
        Self {
            threshold,
            margin,
            watched: Vec::new(),
        }
    }

    pub fn watch(&mut self, id: ElemId) {
        if !self.watched.contains(&id) {
            self.watched.push(id);
        }
    }

    pub fn unwatch_all(&mut self) {
        self.watched.clear();
    }

    #[inline]
    pub fn is_watching(&self, id: ElemId) -> bool {
        self.watched.contains(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.watched.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Return every watched element that first meets the threshold against the
    /// margin-expanded viewport, removing each from observation.
    pub fn sweep(&mut self, viewport: &Rect, registry: &ElementRegistry) -> Vec<ElemId> {
        if self.watched.is_empty() {
            return Vec::new();
        }
        let expanded = self.margin.expand(viewport);
        let threshold = self.threshold;
        let mut fired = Vec::new();
        self.watched.retain(|&id| {
            let Some(record) = registry.get(id) else {
                // Element vanished from the snapshot; drop the subscription.
                return false;
            };
            if triggers(threshold, visible_fraction(&record.rect, &expanded)) {
                fired.push(id);
                false
            } else {
                true
            }
        });
        fired
    }
}

/// Threshold 0 means "any overlap"; otherwise the visible fraction must meet
/// or exceed the threshold.
fn triggers(threshold: f32, fraction: f32) -> bool {
    if threshold <= 0.0 {
        fraction > 0.0
    } else {
        fraction >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ElementDesc, ElementRole, PageSnapshot};
    use vitrine_api_core::TargetPath;

    fn registry_with(rects: &[(&str, Rect)]) -> ElementRegistry {
        let mut reg = ElementRegistry::new();
        reg.load(&PageSnapshot {
            elements: rects
                .iter()
                .map(|(p, r)| ElementDesc {
                    path: TargetPath::parse(p).unwrap(),
                    rect: *r,
                    role: ElementRole::Section,
                    anchor: None,
                })
                .collect(),
        });
        reg
    }

    #[test]
    fn fires_once_and_never_retriggers() {
        let reg = registry_with(&[("page/S0", Rect::new(0.0, 900.0, 100.0, 100.0))]);
        let mut w = VisibilityWatcher::new(0.1, Margin::default());
        w.watch(ElemId(0));

        let above = Rect::new(0.0, 0.0, 1000.0, 800.0);
        assert!(w.sweep(&above, &reg).is_empty());

        let scrolled = Rect::new(0.0, 400.0, 1000.0, 800.0);
        assert_eq!(w.sweep(&scrolled, &reg), vec![ElemId(0)]);
        assert!(w.is_empty());

        // Leaves and re-enters: nothing left to fire.
        assert!(w.sweep(&above, &reg).is_empty());
        assert!(w.sweep(&scrolled, &reg).is_empty());
    }

    #[test]
    fn zero_threshold_means_any_overlap() {
        let reg = registry_with(&[("page/S0", Rect::new(0.0, 799.0, 100.0, 100.0))]);
        let mut w = VisibilityWatcher::new(0.0, Margin::default());
        w.watch(ElemId(0));
        let vp = Rect::new(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(w.sweep(&vp, &reg).len(), 1);
    }

    #[test]
    fn negative_bottom_margin_delays_trigger() {
        // Element fully inside the raw viewport but inside the trimmed strip.
        let reg = registry_with(&[("page/S0", Rect::new(0.0, 760.0, 100.0, 40.0))]);
        let mut w = VisibilityWatcher::new(0.1, Margin::bottom_only(-50.0));
        w.watch(ElemId(0));
        let vp = Rect::new(0.0, 0.0, 1000.0, 800.0);
        assert!(w.sweep(&vp, &reg).is_empty());
        let deeper = Rect::new(0.0, 100.0, 1000.0, 800.0);
        assert_eq!(w.sweep(&deeper, &reg).len(), 1);
    }

    #[test]
    fn duplicate_watch_is_ignored() {
        let reg = registry_with(&[("page/S0", Rect::new(0.0, 0.0, 100.0, 100.0))]);
        let mut w = VisibilityWatcher::new(0.1, Margin::default());
        w.watch(ElemId(0));
        w.watch(ElemId(0));
        let vp = Rect::new(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(w.sweep(&vp, &reg).len(), 1);
    }
}
