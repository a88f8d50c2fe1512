//! Pointer-driven hover effects: magnetic pull on primary buttons, 3-D tilt
//! on product cards, swatch hover zoom.
//!
//! Pointer events arrive in client space; element rects live in document
//! space, so the current scroll offset bridges the two. (Horizontal scrolling
//! is not a thing on this storefront; client x equals document x.)

use crate::config::Config;
use crate::outputs::Outputs;
use crate::registry::ElementRecord;
use vitrine_api_core::{Effect, EffectOp, Transform2d};

/// Magnetic pull: the element chases the pointer by a fraction of the offset
/// from its own center.
pub fn magnetic_move(
    record: &ElementRecord,
    x: f32,
    y: f32,
    scroll_y: f32,
    cfg: &Config,
    out: &mut Outputs,
) {
    let doc_y = y + scroll_y;
    let dx = x - record.rect.center_x();
    let dy = doc_y - record.rect.center_y();
    out.push_op(EffectOp::new(
        record.path.clone(),
        Effect::Transform(Transform2d::translate(
            dx * cfg.magnetic_strength,
            dy * cfg.magnetic_strength,
        )),
    ));
}

pub fn magnetic_leave(record: &ElementRecord, out: &mut Outputs) {
    out.push_op(EffectOp::new(
        record.path.clone(),
        Effect::Transform(Transform2d::translate(0.0, 0.0)),
    ));
}

/// 3-D tilt: rotation scales with the pointer's offset from the card center,
/// inverted on x so the card leans toward the pointer.
pub fn tilt_move(
    record: &ElementRecord,
    x: f32,
    y: f32,
    scroll_y: f32,
    cfg: &Config,
    out: &mut Outputs,
) {
    let rect = &record.rect;
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    let local_x = x - rect.left;
    let local_y = (y + scroll_y) - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    let rotate_x = ((local_y - center_y) / center_y) * -cfg.tilt_max_deg;
    let rotate_y = ((local_x - center_x) / center_x) * cfg.tilt_max_deg;
    out.push_op(EffectOp::new(
        record.path.clone(),
        Effect::Transform(Transform2d::tilt(
            rotate_x,
            rotate_y,
            cfg.tilt_lift_px,
            cfg.tilt_perspective_px,
        )),
    ));
}

/// Rest pose keeps the perspective so the card eases back instead of snapping.
pub fn tilt_leave(record: &ElementRecord, cfg: &Config, out: &mut Outputs) {
    out.push_op(EffectOp::new(
        record.path.clone(),
        Effect::Transform(Transform2d::tilt(0.0, 0.0, 0.0, cfg.tilt_perspective_px)),
    ));
}

pub fn swatch_enter(record: &ElementRecord, cfg: &Config, out: &mut Outputs) {
    out.push_op(EffectOp::new(
        record.path.clone(),
        Effect::Transform(Transform2d::scaled(cfg.swatch_scale)),
    ));
}

pub fn swatch_leave(record: &ElementRecord, out: &mut Outputs) {
    out.push_op(EffectOp::new(
        record.path.clone(),
        Effect::Transform(Transform2d::scaled(1.0)),
    ));
}
