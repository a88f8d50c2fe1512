//! vitrine-api-core: shared contracts for the storefront interaction engine.
//!
//! Defines the element addressing scheme (TargetPath), document-space geometry,
//! and the typed visual-effect vocabulary (Effect / EffectOp / EffectBatch) that
//! the engine emits and hosts apply.

pub mod effects;
pub mod geometry;
pub mod target_path;

pub use effects::{Effect, EffectBatch, EffectOp, NoticeAction, ShadowSpec, Transform2d};
pub use geometry::{visible_fraction, Margin, Rect};
pub use target_path::TargetPath;
