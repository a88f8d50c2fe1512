use vitrine_interact_core::{
    parse_page_json, Config, Effect, Engine, EnvProbe, HostEvent, Inputs, Outputs, TargetPath,
};
use vitrine_interact_core::page::ElementRole;
use vitrine_test_fixtures as fixtures;

fn path(s: &str) -> TargetPath {
    TargetPath::parse(s).unwrap()
}

fn storefront() -> vitrine_interact_core::PageSnapshot {
    parse_page_json(&fixtures::pages::json("storefront").unwrap()).unwrap()
}

fn probe(name: &str) -> EnvProbe {
    serde_json::from_str(&fixtures::probes::json(name).unwrap()).unwrap()
}

fn effects_for<'a>(out: &'a Outputs, p: &TargetPath) -> Vec<&'a Effect> {
    out.ops
        .iter()
        .filter(|op| &op.path == p)
        .map(|op| &op.effect)
        .collect()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

/// it should ship page fixtures that parse and validate
#[test]
fn page_fixtures_parse() {
    for name in fixtures::pages::keys() {
        let json = fixtures::pages::json(&name).unwrap();
        let page = parse_page_json(&json)
            .unwrap_or_else(|e| panic!("fixture page '{name}' should parse: {e}"));
        assert!(!page.elements.is_empty(), "fixture page '{name}' is empty");
    }
    let page = storefront();
    assert_eq!(page.elements.len(), 22);
    assert!(page
        .elements
        .iter()
        .any(|e| matches!(e.role, ElementRole::Counter { end_value: 98234 })));
}

/// it should ship probe fixtures that deserialize into EnvProbe
#[test]
fn probe_fixtures_parse() {
    for name in fixtures::probes::keys() {
        let _: EnvProbe = serde_json::from_str(&fixtures::probes::json(&name).unwrap())
            .unwrap_or_else(|e| panic!("probe fixture '{name}' should parse: {e}"));
    }
    assert!(probe("mobile-touch").touch);
    assert!(probe("reduced-motion").prefers_reduced_motion);
    assert!(!probe("desktop").touch);
}

/// it should pull primary buttons toward the pointer by the magnetic fraction
#[test]
fn magnetic_button_follows_pointer() {
    let button = path("page/hero/ShopNow");
    let mut eng = Engine::new(Config::default());
    eng.start(&probe("desktop"), storefront(), 0.0);

    // Button center is (720, 588); pointer at (700, 580) pulls by 0.2x.
    let out = eng.update(
        16.0,
        Inputs::one(HostEvent::PointerMove {
            path: button.clone(),
            x: 700.0,
            y: 580.0,
        }),
    );
    assert!(effects_for(out, &button).iter().any(|e| matches!(
        e,
        Effect::Transform(t) if approx(t.translate_x_px, -4.0) && approx(t.translate_y_px, -1.6)
    )));

    let out = eng.update(32.0, Inputs::one(HostEvent::PointerLeave { path: button.clone() }));
    assert!(effects_for(out, &button).iter().any(|e| matches!(
        e,
        Effect::Transform(t) if approx(t.translate_x_px, 0.0) && approx(t.translate_y_px, 0.0)
    )));
}

/// it should tilt product cards toward the pointer, bridging client and
/// document space through the scroll offset
#[test]
fn card_tilt_uses_document_space() {
    let card = path("page/featured/Card0");
    let mut eng = Engine::new(Config::default());
    eng.start(&probe("desktop"), storefront(), 0.0);

    // Card top is 980 in document space; at scroll 900 its top-right corner
    // sits at client (480, 80).
    let out = eng.update(
        16.0,
        Inputs {
            events: vec![
                HostEvent::Scroll { y: 900.0 },
                HostEvent::PointerMove {
                    path: card.clone(),
                    x: 480.0,
                    y: 80.0,
                },
            ],
        },
    );
    let tilt = effects_for(out, &card)
        .into_iter()
        .find_map(|e| match e {
            Effect::Transform(t) => Some(*t),
            _ => None,
        })
        .expect("tilt transform");
    assert!(approx(tilt.rotate_x_deg, 5.0));
    assert!(approx(tilt.rotate_y_deg, 5.0));
    assert!(approx(tilt.translate_z_px, 10.0));
    assert_eq!(tilt.perspective_px, Some(1000.0));

    // Rest pose keeps the perspective.
    let out = eng.update(32.0, Inputs::one(HostEvent::PointerLeave { path: card.clone() }));
    assert!(effects_for(out, &card).iter().any(|e| matches!(
        e,
        Effect::Transform(t) if approx(t.rotate_x_deg, 0.0) && t.perspective_px == Some(1000.0)
    )));
}

/// it should zoom swatches on hover and restore them on leave
#[test]
fn swatch_hover_zoom() {
    let swatch = path("page/featured/Card0/Swatch0");
    let mut eng = Engine::new(Config::default());
    eng.start(&probe("desktop"), storefront(), 0.0);

    let out = eng.update(16.0, Inputs::one(HostEvent::PointerEnter { path: swatch.clone() }));
    assert!(effects_for(out, &swatch)
        .iter()
        .any(|e| matches!(e, Effect::Transform(t) if approx(t.scale, 1.2))));
    let out = eng.update(32.0, Inputs::one(HostEvent::PointerLeave { path: swatch.clone() }));
    assert!(effects_for(out, &swatch)
        .iter()
        .any(|e| matches!(e, Effect::Transform(t) if approx(t.scale, 1.0))));
}

/// it should not magnetize or tilt on touch devices
#[test]
fn touch_devices_skip_hover_mechanisms() {
    let button = path("page/hero/ShopNow");
    let card = path("page/featured/Card0");
    let mut eng = Engine::new(Config::default());
    eng.start(&probe("mobile-touch"), storefront(), 0.0);

    let out = eng.update(
        16.0,
        Inputs {
            events: vec![
                HostEvent::PointerMove {
                    path: button.clone(),
                    x: 700.0,
                    y: 580.0,
                },
                HostEvent::PointerMove {
                    path: card.clone(),
                    x: 480.0,
                    y: 80.0,
                },
            ],
        },
    );
    assert!(effects_for(out, &button).is_empty());
    assert!(effects_for(out, &card).is_empty());
}

/// it should stagger grid items by index at registration
#[test]
fn grid_items_get_staggered_delays() {
    let mut eng = Engine::new(Config::default());
    let out = eng.start(&probe("desktop"), storefront(), 0.0);

    let delay = |p: &TargetPath| -> f32 {
        effects_for(out, p)
            .into_iter()
            .find_map(|e| match e {
                Effect::AnimationDelay { seconds } => Some(*seconds),
                _ => None,
            })
            .expect("stagger delay")
    };
    assert!(approx(delay(&path("page/featured/Item0")), 0.0));
    assert!(approx(delay(&path("page/featured/Item1")), 0.1));
    assert!(approx(delay(&path("page/featured/Item2")), 0.2));
    assert!(effects_for(out, &path("page/featured/Item1"))
        .iter()
        .any(|e| matches!(e, Effect::ClassAdd(c) if c == "fade-in-up")));
}

/// it should apply the grid column override on tablets only
#[test]
fn tablet_grid_override() {
    let grid = path("page/featured/Grid");
    let mut eng = Engine::new(Config::default());
    let out = eng.start(&EnvProbe::desktop(800.0, 1024.0), storefront(), 0.0);
    assert!(effects_for(out, &grid)
        .iter()
        .any(|e| matches!(e, Effect::GridColumns(3))));

    let mut eng = Engine::new(Config::default());
    let out = eng.start(&probe("desktop"), storefront(), 0.0);
    assert!(effects_for(out, &grid).is_empty());
}

/// it should spawn the dense particle field on wide viewports and none on mobile
#[test]
fn hero_particles_scale_with_viewport() {
    let hero = path("page/Hero");
    let in_range = |e: &&Effect| match e {
        Effect::SpawnParticle {
            left_percent,
            delay_s,
            duration_s,
        } => {
            (0.0..100.0).contains(left_percent)
                && (0.0..10.0).contains(delay_s)
                && (8.0..12.0).contains(duration_s)
        }
        _ => false,
    };

    let mut eng = Engine::new(Config::default());
    let out = eng.start(&probe("desktop"), storefront(), 0.0);
    let particles: Vec<_> = effects_for(out, &hero)
        .into_iter()
        .filter(|e| matches!(e, Effect::SpawnParticle { .. }))
        .collect();
    assert_eq!(particles.len(), 20);
    assert!(particles.iter().all(in_range));

    let mut eng = Engine::new(Config::default());
    let out = eng.start(&probe("mobile-touch"), storefront(), 0.0);
    assert!(!out
        .ops
        .iter()
        .any(|op| matches!(op.effect, Effect::SpawnParticle { .. })));
}

/// it should honor config overrides end to end
#[test]
fn config_overrides_apply() {
    let counter = path("page/hero/Stat0");
    let cfg = Config::default().with_counter_duration_ms(1000.0);
    let mut eng = Engine::new(cfg);
    eng.start(&probe("desktop"), storefront(), 0.0);

    eng.update(0.0, Inputs::default());
    let out = eng.update(1000.0, Inputs::default());
    assert!(effects_for(out, &counter)
        .iter()
        .any(|e| matches!(e, Effect::Text(s) if s == "1,500")));
}
