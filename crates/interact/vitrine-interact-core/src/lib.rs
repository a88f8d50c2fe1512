//! Vitrine Interact Core (host-agnostic)
//!
//! The storefront interaction engine: a pure core that classifies the hosting
//! environment once, registers visual mechanisms against a page snapshot, and
//! turns per-frame host events into typed effect batches plus semantic events.
//! Hosts (wasm adapter, tests) own the DOM; this crate never touches one.

pub mod config;
pub mod counter;
pub mod engine;
pub mod env;
pub mod error;
pub mod features;
pub mod ids;
pub mod inputs;
pub mod metrics;
pub mod outputs;
pub mod page;
pub mod plan;
pub mod registry;
pub mod schedule;
pub mod watcher;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use counter::CounterAnimator;
pub use engine::{body_path, root_path, Engine};
pub use env::{Capabilities, ConnectionQuality, DeviceClass, EnvProbe};
pub use error::InteractError;
pub use ids::{ElemId, NoticeId};
pub use inputs::{HostEvent, Inputs};
pub use metrics::Metrics;
pub use outputs::{EngineEvent, Outputs};
pub use page::{parse_page_json, DrawerKind, ElementDesc, ElementRole, PageSnapshot};
pub use plan::ActivationPlan;
pub use registry::{ElementRecord, ElementRegistry};
pub use schedule::{Debouncer, FrameGate, TimerQueue, TimerTask};
pub use vitrine_api_core::{Effect, EffectBatch, EffectOp, Margin, Rect, TargetPath};
pub use watcher::VisibilityWatcher;
