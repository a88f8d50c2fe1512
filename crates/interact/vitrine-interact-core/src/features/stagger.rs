//! Staggered grid entrances: each grid item gets an animation delay
//! proportional to its index plus the reveal class, at registration time.

use crate::config::Config;
use crate::outputs::Outputs;
use crate::page::ElementRole;
use crate::registry::ElementRegistry;
use vitrine_api_core::{Effect, EffectOp};

use super::reveal::REVEAL_CLASS;

pub fn register(registry: &ElementRegistry, cfg: &Config, out: &mut Outputs) {
    for record in registry.iter() {
        if let ElementRole::GridItem { index } = record.role {
            let seconds = (index as f64 * cfg.stagger_step_ms / 1000.0) as f32;
            out.push_op(EffectOp::new(
                record.path.clone(),
                Effect::AnimationDelay { seconds },
            ));
            out.push_op(EffectOp::new(
                record.path.clone(),
                Effect::ClassAdd(REVEAL_CLASS.to_string()),
            ));
        }
    }
}
