use super::*;
use crate::capability::Unsupported;
use crate::foundation::core::BlurDirection;

fn props(r: f64, d: BlurDirection, s: f64) -> BlurProps {
    BlurProps {
        max_blur_radius: r,
        direction: d,
        start_offset: s,
    }
}

fn stripes(frame: &mut Frame) {
    for x in (0..frame.width).step_by(2) {
        frame.fill_rect(x, 0, x + 1, frame.height, [255, 255, 255, 255]);
    }
    for x in (1..frame.width).step_by(2) {
        frame.fill_rect(x, 0, x + 1, frame.height, [0, 0, 0, 255]);
    }
}

#[test]
fn mount_configures_and_equal_props_are_ignored() {
    let p = props(20.0, BlurDirection::TopClearBottom, 0.1);
    let mut v = EffectHostView::new(&EngineOpts::default(), p.clone());
    assert_eq!(v.stats().reconstructions, 1);
    assert_eq!(v.surface().filters().len(), 1);

    assert_eq!(v.set_props(p), ConfigureOutcome::Unchanged);
    assert_eq!(v.stats().reconstructions, 1);

    v.set_props(props(30.0, BlurDirection::TopClearBottom, 0.1));
    assert_eq!(v.stats().reconstructions, 2);
    assert_eq!(v.configuration().max_blur_radius(), 30.0);
}

#[test]
fn display_changes_update_scale_without_reconfiguring() {
    let mut v = EffectHostView::new(&EngineOpts::default(), BlurProps::default());
    v.on_attach(2.0);
    assert_eq!(v.surface().scale(), 2.0);

    v.on_display_context_change(3.0);
    assert_eq!(v.surface().scale(), 3.0);
    assert_eq!(v.stats().reconstructions, 1);
}

#[test]
fn detach_releases_and_attach_restores_filter() {
    let mut v = EffectHostView::new(&EngineOpts::default(), BlurProps::default());
    v.on_attach(2.0);
    v.on_detach();
    assert!(v.surface().filters().is_empty());

    v.on_attach(2.0);
    assert_eq!(v.surface().filters().len(), 1);
    assert_eq!(v.stats().reconstructions, 2);
}

#[test]
fn unsupported_platform_renders_children_unmodified() {
    let mut v = EffectHostView::with_provider(
        Box::new(Unsupported),
        &EngineOpts::default(),
        BlurProps::default(),
    );
    v.push_child(stripes);
    v.on_attach(2.0);
    for r in [5.0, 10.0, 10.0, 40.0] {
        v.set_props(props(r, BlurDirection::BottomClearTop, 0.3));
        assert!(v.surface().filters().is_empty());
    }
    assert_eq!(v.render(16, 16).unwrap(), v.render_children(16, 16).unwrap());
}

#[test]
fn zero_radius_matches_unblurred_children() {
    let mut v = EffectHostView::new(
        &EngineOpts::default(),
        props(0.0, BlurDirection::TopClearBottom, 0.0),
    );
    v.push_child(stripes);
    v.on_attach(3.0);
    assert_eq!(v.surface().filters().len(), 1);
    assert_eq!(v.render(12, 12).unwrap(), v.render_children(12, 12).unwrap());
}

#[test]
fn blur_applies_below_transition_only() {
    let mut v = EffectHostView::new(
        &EngineOpts::default(),
        props(4.0, BlurDirection::TopClearBottom, 0.5),
    );
    v.push_child(stripes);
    v.on_attach(2.0);

    let children = v.render_children(20, 20).unwrap();
    let out = v.render(20, 20).unwrap();
    for y in 0..10 {
        for x in 0..20 {
            assert_eq!(out.pixel(x, y), children.pixel(x, y));
        }
    }
    assert_ne!(out.pixel(10, 19), children.pixel(10, 19));
}

#[test]
fn huge_radius_renders_without_blowing_up() {
    let mut v = EffectHostView::new(
        &EngineOpts::default(),
        props(1e10, BlurDirection::TopClearBottom, 0.0),
    );
    v.push_child(stripes);
    v.on_attach(1.0);
    assert_eq!(v.surface().filters().len(), 1);

    let out = v.render(8, 8).unwrap();
    assert_eq!((out.width, out.height), (8, 8));
    assert_ne!(out, v.render_children(8, 8).unwrap());
}

#[test]
fn children_draw_bottom_up() {
    let mut v = EffectHostView::with_provider(
        Box::new(Unsupported),
        &EngineOpts::default(),
        BlurProps::default(),
    );
    v.push_child(|f: &mut Frame| f.fill_rect(0, 0, 4, 4, [255, 0, 0, 255]));
    v.push_child(|f: &mut Frame| f.fill_rect(2, 2, 4, 4, [0, 0, 255, 255]));
    assert_eq!(v.child_count(), 2);

    let out = v.render(4, 4).unwrap();
    assert_eq!(out.pixel(0, 0), [255, 0, 0, 255]);
    assert_eq!(out.pixel(3, 3), [0, 0, 255, 255]);

    v.clear_children();
    assert_eq!(v.render(4, 4).unwrap().pixel(0, 0), [0, 0, 0, 0]);
}

#[test]
fn json_props_flow_through_guard() {
    let mut v = EffectHostView::new(&EngineOpts::default(), BlurProps::default());
    let out = v
        .set_props_json(serde_json::json!({ "maxBlurRadius": 105, "startOffset": 0.1 }))
        .unwrap();
    assert!(matches!(out, ConfigureOutcome::Installed { .. }));
    assert_eq!(v.props().max_blur_radius, 105.0);

    assert!(
        v.set_props_json(serde_json::json!({ "startOffset": "low" }))
            .is_err()
    );
    assert_eq!(v.stats().reconstructions, 2);
}
