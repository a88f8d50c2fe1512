//! Page snapshot: the host's description of the markup the engine decorates.
//!
//! The core cannot query a DOM, so the templating layer scans the page once
//! (and again after a section reload) and serializes what it found: one
//! ElementDesc per interesting node, with its document-space rect and a role
//! that bundles the behaviors the original selectors implied.

use crate::error::InteractError;
use serde::{Deserialize, Serialize};
use vitrine_api_core::{Rect, TargetPath};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DrawerKind {
    Cart,
    Menu,
}

fn default_parallax_speed() -> f32 {
    0.5
}

/// What an element is, and therefore which mechanisms attach to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementRole {
    /// Reveal + tilt + press feedback.
    ProductCard,
    /// Reveal + press feedback.
    CollectionCard,
    /// Reveal only.
    Section,
    /// Hosts the particle background.
    Hero,
    Header,
    /// Grid container; gets the tablet column override.
    Grid,
    /// Staggered child of a grid.
    GridItem { index: u32 },
    Drawer { kind: DrawerKind },
    Swatch,
    Counter { end_value: u64 },
    LazyImage {
        #[serde(default)]
        source: Option<String>,
    },
    Anchor { href: String },
    /// Magnetize + haptic pulse on tap.
    PrimaryButton,
    /// Magnetize only.
    MagneticZone,
    MenuToggle,
    Parallax {
        #[serde(default = "default_parallax_speed")]
        speed: f32,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementDesc {
    pub path: TargetPath,
    pub rect: Rect,
    pub role: ElementRole,
    /// Fragment id this element answers to when an anchor links to it.
    #[serde(default)]
    pub anchor: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub elements: Vec<ElementDesc>,
}

impl PageSnapshot {
    /// Structural checks the engine relies on: finite geometry, unique paths.
    pub fn validate_basic(&self) -> Result<(), InteractError> {
        let mut seen: hashbrown::HashSet<&TargetPath> = hashbrown::HashSet::new();
        for desc in &self.elements {
            let r = &desc.rect;
            if !r.left.is_finite() || !r.top.is_finite() {
                return Err(InteractError::InvalidPage {
                    reason: format!("element '{}' has a non-finite position", desc.path),
                });
            }
            if !(r.width.is_finite() && r.height.is_finite()) || r.width < 0.0 || r.height < 0.0 {
                return Err(InteractError::InvalidPage {
                    reason: format!("element '{}' has an invalid size", desc.path),
                });
            }
            if !seen.insert(&desc.path) {
                return Err(InteractError::InvalidPage {
                    reason: format!("duplicate element path '{}'", desc.path),
                });
            }
        }
        Ok(())
    }
}

/// Parse and validate a page snapshot from host JSON.
pub fn parse_page_json(json: &str) -> Result<PageSnapshot, InteractError> {
    let page: PageSnapshot =
        serde_json::from_str(json).map_err(|e| InteractError::PageParse {
            reason: e.to_string(),
        })?;
    page.validate_basic()?;
    Ok(page)
}
