use super::*;

#[test]
fn attach_then_context_change_tracks_density() {
    let mut sync = DisplayScaleSync::new();
    let mut s = BackdropSurface::new();

    assert!(sync.on_attach(&mut s, 2.0));
    assert_eq!(s.scale(), 2.0);

    assert!(sync.on_display_context_change(&mut s, 3.0));
    assert_eq!(s.scale(), 3.0);
    assert_eq!(sync.density(), Some(3.0));
}

#[test]
fn context_change_while_detached_is_ignored() {
    let mut sync = DisplayScaleSync::new();
    let mut s = BackdropSurface::new();
    assert!(!sync.on_display_context_change(&mut s, 3.0));
    assert_eq!(s.scale(), 1.0);

    sync.on_attach(&mut s, 2.0);
    sync.on_detach();
    assert!(!sync.is_attached());
    assert!(!sync.on_display_context_change(&mut s, 3.0));
    assert_eq!(s.scale(), 2.0);
}

#[test]
fn invalid_density_keeps_previous_scale() {
    let mut sync = DisplayScaleSync::new();
    let mut s = BackdropSurface::new();
    sync.on_attach(&mut s, 2.0);
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(!sync.on_display_context_change(&mut s, bad));
        assert_eq!(s.scale(), 2.0);
    }
}
