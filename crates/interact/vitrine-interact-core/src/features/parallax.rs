//! Parallax: scroll-frame pass shifting each parallax element against the
//! scroll direction by its speed factor.

use crate::outputs::Outputs;
use crate::page::ElementRole;
use crate::registry::ElementRegistry;
use vitrine_api_core::{Effect, EffectOp, Transform2d};

pub fn pass(scroll_y: f32, registry: &ElementRegistry, out: &mut Outputs) {
    for record in registry.iter() {
        if let ElementRole::Parallax { speed } = record.role {
            out.push_op(EffectOp::new(
                record.path.clone(),
                Effect::Transform(Transform2d::parallax(-(scroll_y * speed))),
            ));
        }
    }
}
