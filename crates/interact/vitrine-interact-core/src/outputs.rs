//! Output contracts from the core engine.
//!
//! Outputs carry the effect batch for this frame plus a separate list of
//! semantic events. The engine clears them at the top of every update; hosts
//! apply the ops and transport the events.

use crate::ids::NoticeId;
use serde::{Deserialize, Serialize};
use vitrine_api_core::{EffectBatch, EffectOp, TargetPath};

/// Discrete semantic signals emitted during an update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EngineEvent {
    /// Startup finished; lists the registered mechanism names.
    Ready { mechanisms: Vec<String> },
    Revealed { path: TargetPath },
    CounterStarted { path: TargetPath },
    CounterCompleted { path: TargetPath },
    NoticeShown { id: NoticeId },
    NoticeDismissed { id: NoticeId },
    /// A swipe crossed the close threshold; the host owns the actual close.
    DrawerCloseRequested { path: TargetPath },
    PageReinitialized,
    ReducedAnimationsForced,
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub ops: EffectBatch,
    #[serde(default)]
    pub events: Vec<EngineEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.ops.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_op(&mut self, op: EffectOp) {
        self.ops.push(op);
    }

    #[inline]
    pub fn push_event(&mut self, event: EngineEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty() && self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_api_core::Effect;

    #[test]
    fn outputs_api_basics() {
        let mut out = Outputs::default();
        assert!(out.is_empty());
        out.push_op(EffectOp::new(
            TargetPath::parse("page/Card0").unwrap(),
            Effect::ClassAdd("fade-in-up".into()),
        ));
        out.push_event(EngineEvent::Revealed {
            path: TargetPath::parse("page/Card0").unwrap(),
        });
        assert!(!out.is_empty());
        out.clear();
        assert!(out.is_empty());
    }
}
