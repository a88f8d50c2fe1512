//! Cart notices: a transient "Added to cart!" popup per cart signal, each with
//! its own auto-dismiss timer so overlapping notices expire independently.

use crate::config::Config;
use crate::ids::{IdAllocator, NoticeId};
use crate::outputs::{EngineEvent, Outputs};
use crate::schedule::{TimerQueue, TimerTask};
use vitrine_api_core::{Effect, EffectOp, NoticeAction, TargetPath};

pub const CART_NOTICE_MESSAGE: &str = "Added to cart!";

pub fn show(
    ids: &mut IdAllocator,
    body: &TargetPath,
    now_ms: f64,
    cfg: &Config,
    timers: &mut TimerQueue,
    out: &mut Outputs,
) -> NoticeId {
    let id = ids.alloc_notice();
    out.push_op(EffectOp::new(
        body.clone(),
        Effect::Notice(NoticeAction::Show {
            id: id.0,
            message: CART_NOTICE_MESSAGE.to_string(),
        }),
    ));
    out.push_event(EngineEvent::NoticeShown { id });
    timers.schedule(now_ms + cfg.notice_duration_ms, TimerTask::DismissNotice(id));
    id
}

pub fn dismiss(id: NoticeId, body: &TargetPath, out: &mut Outputs) {
    out.push_op(EffectOp::new(
        body.clone(),
        Effect::Notice(NoticeAction::Dismiss { id: id.0 }),
    ));
    out.push_event(EngineEvent::NoticeDismissed { id });
}
