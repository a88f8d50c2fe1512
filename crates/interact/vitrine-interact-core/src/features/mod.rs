//! Visual mechanisms, one module per concern. Each feature owns its
//! per-instance state; the engine registers them according to the activation
//! plan and drives them from host events and frame passes.

pub mod anchors;
pub mod counters;
pub mod gestures;
pub mod header;
pub mod lazy_images;
pub mod notices;
pub mod parallax;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod stagger;
