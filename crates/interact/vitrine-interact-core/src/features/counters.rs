//! Watcher-started counters: each counter element begins its count-up the
//! first time it scrolls into view and is advanced once per frame until the
//! exact end value lands.

use crate::config::Config;
use crate::counter::{format_grouped, CounterAnimator};
use crate::ids::ElemId;
use crate::outputs::{EngineEvent, Outputs};
use crate::page::ElementRole;
use crate::registry::ElementRegistry;
use crate::watcher::VisibilityWatcher;
use vitrine_api_core::{Effect, EffectOp, Margin, Rect};

#[derive(Debug)]
pub struct Counters {
    watcher: VisibilityWatcher,
    active: Vec<(ElemId, CounterAnimator)>,
    duration_ms: f64,
}

impl Counters {
    pub fn new(cfg: &Config) -> Self {
        Self {
            watcher: VisibilityWatcher::new(cfg.counter_threshold, Margin::default()),
            active: Vec::new(),
            duration_ms: cfg.counter_duration_ms,
        }
    }

    pub fn register(&mut self, registry: &ElementRegistry) {
        self.watcher.unwatch_all();
        self.active.clear();
        for record in registry.iter() {
            if matches!(record.role, ElementRole::Counter { .. }) {
                self.watcher.watch(record.id);
            }
        }
    }

    /// Start counters whose elements just became visible.
    pub fn sweep(
        &mut self,
        now_ms: f64,
        viewport: &Rect,
        registry: &ElementRegistry,
        out: &mut Outputs,
    ) {
        for id in self.watcher.sweep(viewport, registry) {
            let Some(record) = registry.get(id) else {
                continue;
            };
            let ElementRole::Counter { end_value } = record.role else {
                continue;
            };
            let mut anim = CounterAnimator::new(end_value, self.duration_ms, now_ms);
            out.push_event(EngineEvent::CounterStarted {
                path: record.path.clone(),
            });
            if let Some(v) = anim.advance(now_ms) {
                out.push_op(EffectOp::new(
                    record.path.clone(),
                    Effect::Text(format_grouped(v)),
                ));
            }
            if anim.is_done() {
                out.push_event(EngineEvent::CounterCompleted {
                    path: record.path.clone(),
                });
            } else {
                self.active.push((id, anim));
            }
        }
    }

    /// Advance running counters one frame; returns how many completed.
    pub fn advance(
        &mut self,
        now_ms: f64,
        registry: &ElementRegistry,
        out: &mut Outputs,
    ) -> u64 {
        let mut completed = 0;
        self.active.retain_mut(|(id, anim)| {
            let Some(record) = registry.get(*id) else {
                return false;
            };
            if let Some(v) = anim.advance(now_ms) {
                out.push_op(EffectOp::new(
                    record.path.clone(),
                    Effect::Text(format_grouped(v)),
                ));
            }
            if anim.is_done() {
                out.push_event(EngineEvent::CounterCompleted {
                    path: record.path.clone(),
                });
                completed += 1;
                false
            } else {
                true
            }
        });
        completed
    }

    #[inline]
    pub fn running(&self) -> usize {
        self.active.len()
    }
}
