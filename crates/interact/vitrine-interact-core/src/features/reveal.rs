//! Reveal-on-scroll: cards and sections fade in the first time they enter the
//! viewport, exactly once per element.

use crate::config::Config;
use crate::outputs::{EngineEvent, Outputs};
use crate::page::ElementRole;
use crate::registry::ElementRegistry;
use crate::watcher::VisibilityWatcher;
use vitrine_api_core::{Effect, EffectOp, Rect};

pub const REVEAL_CLASS: &str = "fade-in-up";

#[derive(Debug)]
pub struct Reveal {
    watcher: VisibilityWatcher,
}

impl Reveal {
    pub fn new(cfg: &Config) -> Self {
        Self {
            watcher: VisibilityWatcher::new(cfg.reveal_threshold, cfg.reveal_margin),
        }
    }

    pub fn register(&mut self, registry: &ElementRegistry) {
        self.watcher.unwatch_all();
        for record in registry.iter() {
            if matches!(
                record.role,
                ElementRole::ProductCard | ElementRole::CollectionCard | ElementRole::Section
            ) {
                self.watcher.watch(record.id);
            }
        }
    }

    /// Returns the number of elements revealed this pass.
    pub fn sweep(
        &mut self,
        viewport: &Rect,
        registry: &ElementRegistry,
        out: &mut Outputs,
    ) -> u64 {
        let fired = self.watcher.sweep(viewport, registry);
        let count = fired.len() as u64;
        for id in fired {
            if let Some(record) = registry.get(id) {
                out.push_op(EffectOp::new(
                    record.path.clone(),
                    Effect::ClassAdd(REVEAL_CLASS.to_string()),
                ));
                out.push_event(EngineEvent::Revealed {
                    path: record.path.clone(),
                });
            }
        }
        count
    }
}
