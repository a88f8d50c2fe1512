//! Hero particle background: a seeded batch of floating particles spawned at
//! registration. The count depends on viewport width; placement and timing are
//! drawn from the engine RNG so identical seeds give identical pages.

use crate::config::Config;
use crate::outputs::Outputs;
use crate::page::ElementRole;
use crate::registry::ElementRegistry;
use rand::Rng;
use vitrine_api_core::{Effect, EffectOp};

pub fn spawn(
    registry: &ElementRegistry,
    viewport_width: f32,
    cfg: &Config,
    rng: &mut impl Rng,
    out: &mut Outputs,
) {
    let Some(hero) = registry.find_by_role(|r| matches!(r, ElementRole::Hero)) else {
        return;
    };
    let count = if viewport_width > cfg.particle_width_cutoff {
        cfg.particles_dense
    } else {
        cfg.particles_sparse
    };
    for _ in 0..count {
        out.push_op(EffectOp::new(
            hero.path.clone(),
            Effect::SpawnParticle {
                left_percent: rng.random_range(0.0..100.0),
                delay_s: rng.random_range(0.0..10.0),
                duration_s: 8.0 + rng.random_range(0.0..4.0),
            },
        ));
    }
}
