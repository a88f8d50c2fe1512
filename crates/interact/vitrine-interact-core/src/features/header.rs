//! Header condensation: past the scroll threshold the header gains a glow and
//! blur, below it they come off. Ops are emitted only on state change so the
//! scroll pass stays idempotent.

use crate::config::Config;
use crate::outputs::Outputs;
use crate::page::ElementRole;
use crate::registry::ElementRegistry;
use vitrine_api_core::{Effect, EffectOp, ShadowSpec};

pub const CONDENSED_CLASS: &str = "header-scrolled";

fn glow() -> ShadowSpec {
    ShadowSpec {
        x_px: 0.0,
        y_px: 4.0,
        blur_px: 30.0,
        color: "rgba(99, 102, 241, 0.15)".to_string(),
    }
}

#[derive(Debug, Default)]
pub struct HeaderCondense {
    condensed: bool,
}

impl HeaderCondense {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.condensed = false;
    }

    pub fn pass(
        &mut self,
        scroll_y: f32,
        cfg: &Config,
        registry: &ElementRegistry,
        out: &mut Outputs,
    ) {
        let Some(header) = registry.find_by_role(|r| matches!(r, ElementRole::Header)) else {
            return;
        };
        let should = scroll_y > cfg.header_scroll_threshold;
        if should == self.condensed {
            return;
        }
        self.condensed = should;
        if should {
            out.push_op(EffectOp::new(
                header.path.clone(),
                Effect::ClassAdd(CONDENSED_CLASS.to_string()),
            ));
            out.push_op(EffectOp::new(
                header.path.clone(),
                Effect::Shadow(Some(glow())),
            ));
            out.push_op(EffectOp::new(
                header.path.clone(),
                Effect::BackdropBlur(Some(20.0)),
            ));
        } else {
            out.push_op(EffectOp::new(
                header.path.clone(),
                Effect::ClassRemove(CONDENSED_CLASS.to_string()),
            ));
            out.push_op(EffectOp::new(header.path.clone(), Effect::Shadow(None)));
            out.push_op(EffectOp::new(header.path.clone(), Effect::BackdropBlur(None)));
        }
    }
}
