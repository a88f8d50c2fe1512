//! Touch gestures: per-drawer swipe-to-close and card press feedback.
//!
//! Every drawer gets its own isolated drag state, reset on each touch-start so
//! a stale previous gesture can never leak into the next. A drawer only
//! follows the finger in its closing direction: the cart drawer slides right,
//! the menu drawer slides left. Past the threshold the engine asks the host to
//! close; under it the drawer snaps back with a short transition that is
//! cleared by a timer.

use crate::config::Config;
use crate::ids::ElemId;
use crate::outputs::{EngineEvent, Outputs};
use crate::page::{DrawerKind, ElementRole};
use crate::registry::ElementRecord;
use crate::schedule::{TimerQueue, TimerTask};
use hashbrown::HashMap;
use vitrine_api_core::{Effect, EffectOp, Transform2d};

#[derive(Debug, Clone, Copy)]
struct DragState {
    start_x: f32,
    current_x: f32,
}

impl DragState {
    fn diff(&self) -> f32 {
        self.current_x - self.start_x
    }
}

fn follows(kind: DrawerKind, diff: f32) -> bool {
    match kind {
        DrawerKind::Cart => diff > 0.0,
        DrawerKind::Menu => diff < 0.0,
    }
}

#[derive(Debug, Default)]
pub struct Gestures {
    drags: HashMap<ElemId, DragState>,
}

impl Gestures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.drags.clear();
    }

    pub fn on_touch_start(&mut self, record: &ElementRecord, x: f32, cfg: &Config, out: &mut Outputs) {
        match record.role {
            ElementRole::Drawer { .. } => {
                self.drags.insert(
                    record.id,
                    DragState {
                        start_x: x,
                        current_x: x,
                    },
                );
            }
            ElementRole::ProductCard | ElementRole::CollectionCard => {
                out.push_op(EffectOp::new(
                    record.path.clone(),
                    Effect::Transform(Transform2d::scaled(cfg.press_scale)),
                ));
            }
            _ => {}
        }
    }

    pub fn on_touch_move(&mut self, record: &ElementRecord, x: f32, out: &mut Outputs) {
        let ElementRole::Drawer { kind } = record.role else {
            return;
        };
        let Some(drag) = self.drags.get_mut(&record.id) else {
            return;
        };
        drag.current_x = x;
        let diff = drag.diff();
        if follows(kind, diff) {
            out.push_op(EffectOp::new(
                record.path.clone(),
                Effect::Transform(Transform2d::translate(diff, 0.0)),
            ));
        }
    }

    pub fn on_touch_end(
        &mut self,
        record: &ElementRecord,
        now_ms: f64,
        cfg: &Config,
        timers: &mut TimerQueue,
        out: &mut Outputs,
    ) {
        match record.role {
            ElementRole::Drawer { .. } => {
                let Some(drag) = self.drags.remove(&record.id) else {
                    return;
                };
                if drag.diff().abs() > cfg.swipe_threshold_px {
                    out.push_event(EngineEvent::DrawerCloseRequested {
                        path: record.path.clone(),
                    });
                } else {
                    out.push_op(EffectOp::new(record.path.clone(), Effect::TransformClear));
                }
                out.push_op(EffectOp::new(
                    record.path.clone(),
                    Effect::Transition {
                        property: "transform".to_string(),
                        duration_ms: cfg.drawer_transition_ms as f32,
                        easing: "ease".to_string(),
                    },
                ));
                timers.schedule(
                    now_ms + cfg.drawer_transition_ms,
                    TimerTask::ClearDrawerTransition(record.id),
                );
            }
            ElementRole::ProductCard | ElementRole::CollectionCard => {
                out.push_op(EffectOp::new(record.path.clone(), Effect::TransformClear));
            }
            _ => {}
        }
    }
}
