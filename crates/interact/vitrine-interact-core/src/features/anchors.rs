//! Smooth anchor scrolling: a click on an in-page link scrolls to the target's
//! document top, keeping the live header height plus a small gap clear.
//! Bare "#" links and fragments no element answers to are silent no-ops.

use crate::config::Config;
use crate::outputs::Outputs;
use crate::page::ElementRole;
use crate::registry::{ElementRecord, ElementRegistry};
use vitrine_api_core::{Effect, EffectOp};

pub fn on_click(
    record: &ElementRecord,
    registry: &ElementRegistry,
    cfg: &Config,
    out: &mut Outputs,
) {
    let ElementRole::Anchor { href } = &record.role else {
        return;
    };
    let Some(fragment) = href.strip_prefix('#') else {
        return;
    };
    if fragment.is_empty() {
        return;
    }
    let Some(target) = registry.find_by_anchor(fragment) else {
        return;
    };
    let header_height = registry
        .find_by_role(|r| matches!(r, ElementRole::Header))
        .map(|h| h.rect.height)
        .unwrap_or(0.0);
    let top = (target.rect.top - header_height - cfg.anchor_gap_px).max(0.0);
    out.push_op(EffectOp::new(
        record.path.clone(),
        Effect::ScrollTo { top, smooth: true },
    ));
}
