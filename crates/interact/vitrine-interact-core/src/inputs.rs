//! Input contracts for the core engine.
//!
//! The host batches everything the page delivered since the previous frame
//! into one Inputs value and passes it to Engine::update() once per display
//! frame. Events naming an unknown path are silently skipped.

use crate::page::PageSnapshot;
use serde::{Deserialize, Serialize};
use vitrine_api_core::TargetPath;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    #[serde(default)]
    pub events: Vec<HostEvent>,
}

impl Inputs {
    pub fn one(event: HostEvent) -> Self {
        Self {
            events: vec![event],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Document scroll offset changed.
    Scroll { y: f32 },
    Resize { width: f32, height: f32 },
    OrientationChanged,
    /// Pointer coordinates are client-space (relative to the viewport).
    PointerMove { path: TargetPath, x: f32, y: f32 },
    PointerEnter { path: TargetPath },
    PointerLeave { path: TargetPath },
    TouchStart { path: TargetPath, x: f32 },
    TouchMove { path: TargetPath, x: f32 },
    TouchEnd { path: TargetPath },
    Click { path: TargetPath },
    /// A deferred image finished loading.
    ImageLoaded { path: TargetPath },
    /// Application signal: an item was added to the cart.
    CartItemAdded,
    /// Theme-editor section reload; carries the re-scanned page because the
    /// core cannot query a DOM. The settle delay applies before the swap.
    SectionLoaded { page: PageSnapshot },
}
