//! Engine: capability classification, mechanism registration, and the
//! per-frame update loop.
//!
//! `start` classifies the environment once, builds the activation plan, and
//! registers every planned mechanism against the page snapshot. `update` is
//! called once per display frame with the events the host collected since the
//! previous frame; it drains due timers, feeds the feature state machines, and
//! runs the frame passes (scroll work at most once per frame, watcher sweeps,
//! counter advancement, debounce flush).

use crate::config::Config;
use crate::env::{Capabilities, EnvProbe};
use crate::features::{
    anchors, counters::Counters, gestures::Gestures, header::HeaderCondense,
    lazy_images::LazyImages, notices, parallax, particles, pointer, reveal::Reveal, stagger,
};
use crate::ids::IdAllocator;
use crate::inputs::{HostEvent, Inputs};
use crate::metrics::Metrics;
use crate::outputs::{EngineEvent, Outputs};
use crate::page::{ElementRole, PageSnapshot};
use crate::plan::ActivationPlan;
use crate::registry::ElementRegistry;
use crate::schedule::{Debouncer, FrameGate, TimerQueue, TimerTask};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use vitrine_api_core::{Effect, EffectOp, Rect, TargetPath};

pub const REDUCED_ANIMATIONS_CLASS: &str = "reduced-animations";

/// Well-known path for body-level ops (scroll lock, notices, min-height).
pub fn body_path() -> TargetPath {
    TargetPath::new(vec!["document".to_string()], "body")
}

/// Well-known path for document-root ops (custom properties).
pub fn root_path() -> TargetPath {
    TargetPath::new(vec!["document".to_string()], "root")
}

#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    started: bool,
    caps: Option<Capabilities>,
    plan: Option<ActivationPlan>,

    registry: ElementRegistry,
    page: PageSnapshot,
    pending_page: Option<PageSnapshot>,

    // Live geometry. Only the viewport tracks resize; classification does not.
    viewport_width: f32,
    viewport_height: f32,
    scroll_y: f32,
    last_now: f64,

    ids: IdAllocator,
    scroll_gate: FrameGate,
    resize_debounce: Debouncer,
    timers: TimerQueue,
    rng: SmallRng,

    reveal: Reveal,
    counters: Counters,
    lazy: LazyImages,
    header: HeaderCondense,
    gestures: Gestures,
    menu_open: bool,

    metrics: Metrics,
    outputs: Outputs,
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        let reveal = Reveal::new(&cfg);
        let counters = Counters::new(&cfg);
        let lazy = LazyImages::new(&cfg, false);
        let resize_debounce = Debouncer::new(cfg.resize_debounce_ms);
        let rng = SmallRng::seed_from_u64(cfg.seed);
        Self {
            cfg,
            started: false,
            caps: None,
            plan: None,
            registry: ElementRegistry::new(),
            page: PageSnapshot::default(),
            pending_page: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
            scroll_y: 0.0,
            last_now: 0.0,
            ids: IdAllocator::new(),
            scroll_gate: FrameGate::new(),
            resize_debounce,
            timers: TimerQueue::new(),
            rng,
            reveal,
            counters,
            lazy,
            header: HeaderCondense::new(),
            gestures: Gestures::new(),
            menu_open: false,
            metrics: Metrics::default(),
            outputs: Outputs::default(),
        }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn capabilities(&self) -> Option<&Capabilities> {
        self.caps.as_ref()
    }

    pub fn plan(&self) -> Option<&ActivationPlan> {
        self.plan.as_ref()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[inline]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn viewport(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.viewport_width, self.viewport_height)
    }

    /// Classify the environment, build the activation plan, and register every
    /// planned mechanism against the page. Returns the startup ops (stagger
    /// delays, image fade preparation, grid override, particles, the initial
    /// viewport unit) plus the Ready event.
    pub fn start(&mut self, probe: &EnvProbe, page: PageSnapshot, now_ms: f64) -> &Outputs {
        self.outputs.clear();
        let caps = Capabilities::classify(probe, &self.cfg);
        let plan = ActivationPlan::build(&caps, &self.cfg);
        self.caps = Some(caps);
        self.plan = Some(plan);
        self.viewport_width = probe.viewport_width;
        self.viewport_height = probe.viewport_height;
        self.scroll_y = 0.0;
        self.last_now = now_ms;
        self.started = true;

        self.page = page;
        self.register_page();

        // The slow-connection override lands after initial registration, as a
        // global style gate rather than a registration change.
        let plan = self.plan.as_ref().unwrap();
        if plan.reduced_animation_override {
            self.outputs.push_op(EffectOp::new(
                body_path(),
                Effect::ClassAdd(REDUCED_ANIMATIONS_CLASS.to_string()),
            ));
            self.outputs.push_event(EngineEvent::ReducedAnimationsForced);
        }

        let mechanisms: Vec<String> = plan.mechanisms().iter().map(|s| s.to_string()).collect();
        log::info!(
            "storefront interactions ready ({} mechanisms active)",
            mechanisms.len()
        );
        self.outputs.push_event(EngineEvent::Ready { mechanisms });
        self.account_outputs();
        &self.outputs
    }

    /// (Re)register all planned mechanisms from `self.page` into `outputs`.
    fn register_page(&mut self) {
        let plan = self.plan.clone().expect("register_page requires a plan");
        self.registry.load(&self.page);
        self.gestures.reset();
        // Element ids restart densely on reload; a pending transition clear
        // keyed by an old id would otherwise fire against whichever element
        // now owns the reused id.
        self.timers
            .cancel_where(|t| matches!(t, TimerTask::ClearDrawerTransition(_)));
        self.menu_open = false;

        if plan.reveal {
            self.reveal.register(&self.registry);
        }
        if plan.counters {
            self.counters.register(&self.registry);
        }
        if plan.image_fade {
            self.lazy = LazyImages::new(&self.cfg, plan.shimmer_lazy_load);
            self.lazy.register(&self.registry, &mut self.outputs);
        }
        if plan.stagger {
            stagger::register(&self.registry, &self.cfg, &mut self.outputs);
        }
        if plan.tablet_grid {
            for record in self.registry.iter() {
                if matches!(record.role, ElementRole::Grid) {
                    self.outputs.push_op(EffectOp::new(
                        record.path.clone(),
                        Effect::GridColumns(self.cfg.tablet_grid_columns),
                    ));
                }
            }
        }
        if plan.particles {
            particles::spawn(
                &self.registry,
                self.viewport_width,
                &self.cfg,
                &mut self.rng,
                &mut self.outputs,
            );
        }
        self.outputs.push_op(EffectOp::new(
            root_path(),
            Effect::CssVar {
                name: "--vh".to_string(),
                value: format!("{}px", self.viewport_height / 100.0),
            },
        ));
    }

    /// One display frame of work. Clears the previous outputs, drains due
    /// timers, applies host events, then runs the frame passes.
    pub fn update(&mut self, now_ms: f64, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        if !self.started {
            return &self.outputs;
        }
        // Host clocks are monotone in practice; clamp regressions anyway.
        let now = now_ms.max(self.last_now);
        self.last_now = now;
        self.metrics.frames += 1;

        for task in self.timers.drain_due(now) {
            self.run_timer_task(task);
        }
        for event in inputs.events {
            self.apply_event(event, now);
        }
        self.frame_passes(now);
        self.account_outputs();
        &self.outputs
    }

    fn run_timer_task(&mut self, task: TimerTask) {
        match task {
            TimerTask::DismissNotice(id) => {
                notices::dismiss(id, &body_path(), &mut self.outputs);
            }
            TimerTask::ClearDrawerTransition(elem) => {
                if let Some(record) = self.registry.get(elem) {
                    self.outputs
                        .push_op(EffectOp::new(record.path.clone(), Effect::TransitionClear));
                }
            }
            TimerTask::ReinitializePage => {
                if let Some(page) = self.pending_page.take() {
                    self.page = page;
                }
                self.register_page();
                self.outputs.push_event(EngineEvent::PageReinitialized);
                self.metrics.reinitializations += 1;
                log::debug!("page re-initialized ({} elements)", self.registry.len());
            }
            TimerTask::RefreshViewportUnit => {
                self.outputs.push_op(EffectOp::new(
                    root_path(),
                    Effect::CssVar {
                        name: "--vh".to_string(),
                        value: format!("{}px", self.viewport_height / 100.0),
                    },
                ));
            }
        }
    }

    fn apply_event(&mut self, event: HostEvent, now: f64) {
        let plan = self.plan.clone().expect("started engine has a plan");
        match event {
            HostEvent::Scroll { y } => {
                self.scroll_y = y;
                self.scroll_gate.arm();
                self.metrics.scroll_events += 1;
            }
            HostEvent::Resize { width, height } => {
                self.viewport_width = width;
                self.viewport_height = height;
                self.resize_debounce.poke(now);
                self.metrics.resize_events += 1;
            }
            HostEvent::OrientationChanged => {
                self.timers
                    .schedule(now + self.cfg.settle_delay_ms, TimerTask::RefreshViewportUnit);
            }
            HostEvent::PointerMove { path, x, y } => {
                let Some(record) = self.registry.lookup(&path).cloned() else {
                    return;
                };
                match record.role {
                    ElementRole::PrimaryButton | ElementRole::MagneticZone if plan.magnetic => {
                        pointer::magnetic_move(
                            &record,
                            x,
                            y,
                            self.scroll_y,
                            &self.cfg,
                            &mut self.outputs,
                        );
                    }
                    ElementRole::ProductCard if plan.tilt => {
                        pointer::tilt_move(
                            &record,
                            x,
                            y,
                            self.scroll_y,
                            &self.cfg,
                            &mut self.outputs,
                        );
                    }
                    _ => {}
                }
            }
            HostEvent::PointerEnter { path } => {
                let Some(record) = self.registry.lookup(&path).cloned() else {
                    return;
                };
                if matches!(record.role, ElementRole::Swatch) && plan.swatch_hover {
                    pointer::swatch_enter(&record, &self.cfg, &mut self.outputs);
                }
            }
            HostEvent::PointerLeave { path } => {
                let Some(record) = self.registry.lookup(&path).cloned() else {
                    return;
                };
                match record.role {
                    ElementRole::PrimaryButton | ElementRole::MagneticZone if plan.magnetic => {
                        pointer::magnetic_leave(&record, &mut self.outputs);
                    }
                    ElementRole::ProductCard if plan.tilt => {
                        pointer::tilt_leave(&record, &self.cfg, &mut self.outputs);
                    }
                    ElementRole::Swatch if plan.swatch_hover => {
                        pointer::swatch_leave(&record, &mut self.outputs);
                    }
                    _ => {}
                }
            }
            HostEvent::TouchStart { path, x } => {
                if !(plan.swipe_gestures || plan.touch_feedback) {
                    return;
                }
                if let Some(record) = self.registry.lookup(&path).cloned() {
                    self.gestures
                        .on_touch_start(&record, x, &self.cfg, &mut self.outputs);
                }
            }
            HostEvent::TouchMove { path, x } => {
                if !plan.swipe_gestures {
                    return;
                }
                if let Some(record) = self.registry.lookup(&path).cloned() {
                    self.gestures.on_touch_move(&record, x, &mut self.outputs);
                }
            }
            HostEvent::TouchEnd { path } => {
                if !(plan.swipe_gestures || plan.touch_feedback) {
                    return;
                }
                if let Some(record) = self.registry.lookup(&path).cloned() {
                    self.gestures.on_touch_end(
                        &record,
                        now,
                        &self.cfg,
                        &mut self.timers,
                        &mut self.outputs,
                    );
                }
            }
            HostEvent::Click { path } => {
                let Some(record) = self.registry.lookup(&path).cloned() else {
                    return;
                };
                match &record.role {
                    ElementRole::Anchor { .. } if plan.anchors => {
                        anchors::on_click(&record, &self.registry, &self.cfg, &mut self.outputs);
                    }
                    ElementRole::PrimaryButton if plan.haptics => {
                        self.outputs.push_op(EffectOp::new(
                            record.path.clone(),
                            Effect::Haptic {
                                milliseconds: self.cfg.haptic_pulse_ms,
                            },
                        ));
                    }
                    ElementRole::MenuToggle if plan.menu_scroll_lock => {
                        self.menu_open = !self.menu_open;
                        self.outputs.push_op(EffectOp::new(
                            body_path(),
                            Effect::ScrollLock(self.menu_open),
                        ));
                    }
                    _ => {}
                }
            }
            HostEvent::ImageLoaded { path } => {
                if let Some(record) = self.registry.lookup(&path).cloned() {
                    self.lazy.on_image_loaded(&record, &mut self.outputs);
                }
            }
            HostEvent::CartItemAdded => {
                if plan.notices {
                    notices::show(
                        &mut self.ids,
                        &body_path(),
                        now,
                        &self.cfg,
                        &mut self.timers,
                        &mut self.outputs,
                    );
                }
            }
            HostEvent::SectionLoaded { page } => {
                // Bursts coalesce: the settle timer is replaced, and only the
                // latest snapshot survives.
                self.pending_page = Some(page);
                self.timers
                    .schedule(now + self.cfg.settle_delay_ms, TimerTask::ReinitializePage);
            }
        }
    }

    fn frame_passes(&mut self, now: f64) {
        let plan = self.plan.clone().expect("started engine has a plan");
        let viewport = self.viewport();

        if self.scroll_gate.take() {
            self.metrics.scroll_passes += 1;
            if plan.parallax {
                parallax::pass(self.scroll_y, &self.registry, &mut self.outputs);
            }
            if plan.header_condense {
                self.header
                    .pass(self.scroll_y, &self.cfg, &self.registry, &mut self.outputs);
            }
        }

        if plan.reveal {
            self.metrics.reveals += self.reveal.sweep(&viewport, &self.registry, &mut self.outputs);
        }
        if plan.counters {
            self.counters
                .sweep(now, &viewport, &self.registry, &mut self.outputs);
            self.metrics.counters_completed +=
                self.counters.advance(now, &self.registry, &mut self.outputs);
        }
        if plan.shimmer_lazy_load {
            self.lazy.sweep(&viewport, &self.registry, &mut self.outputs);
        }

        if self.resize_debounce.fire(now) {
            self.metrics.resize_flushes += 1;
            if self.caps.map(|c| c.is_mobile()).unwrap_or(false) {
                self.outputs.push_op(EffectOp::new(
                    body_path(),
                    Effect::MinHeightPx(self.viewport_height),
                ));
            }
        }
    }

    fn account_outputs(&mut self) {
        self.metrics.ops_emitted += self.outputs.ops.len() as u64;
        self.metrics.events_emitted += self.outputs.events.len() as u64;
    }
}
