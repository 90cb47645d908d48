use super::*;

#[test]
fn configuration_defaults_match_host_surface() {
    let c = BlurConfiguration::default();
    assert_eq!(c.max_blur_radius(), 20.0);
    assert_eq!(c.direction(), BlurDirection::TopClearBottom);
    assert_eq!(c.start_offset(), 0.0);
}

#[test]
fn direction_from_prop_accepts_legacy_names_and_falls_back() {
    assert_eq!(
        BlurDirection::from_prop("blurredBottomClearTop"),
        BlurDirection::BottomClearTop
    );
    assert_eq!(
        BlurDirection::from_prop("bottomClearTop"),
        BlurDirection::BottomClearTop
    );
    assert_eq!(
        BlurDirection::from_prop("blurredTopClearBottom"),
        BlurDirection::TopClearBottom
    );
    assert_eq!(
        BlurDirection::from_prop("sideways"),
        BlurDirection::TopClearBottom
    );
}

#[test]
fn tag_is_bit_exact_and_printable() {
    let a = BlurConfiguration::new(20.0, BlurDirection::TopClearBottom, 0.1);
    let b = BlurConfiguration::new(20.0, BlurDirection::TopClearBottom, 0.1);
    let c = BlurConfiguration::new(20.0, BlurDirection::TopClearBottom, 0.1 + f64::EPSILON);
    assert_eq!(a.tag(), b.tag());
    assert_ne!(a.tag(), c.tag());
    assert_eq!(a.tag().to_string(), "20-topClearBottom-0.1");
    assert_eq!(a.tag().start_offset(), 0.1);
}

#[test]
fn frame_rejects_mismatched_buffers() {
    assert!(Frame::from_premul_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(Frame::from_premul_rgba8(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn straight_premul_conversion_keeps_opaque_pixels() {
    let f = Frame::from_straight_rgba8(1, 2, vec![200, 100, 50, 255, 200, 100, 50, 0]).unwrap();
    assert_eq!(f.pixel(0, 0), [200, 100, 50, 255]);
    assert_eq!(f.pixel(0, 1), [0, 0, 0, 0]);
    assert_eq!(&f.to_straight_rgba8()[..4], &[200, 100, 50, 255]);
}

#[test]
fn fill_rect_clips_to_frame() {
    let mut f = Frame::new(3, 3).unwrap();
    f.fill_rect(1, 1, 10, 10, [9, 9, 9, 255]);
    assert_eq!(f.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(f.pixel(2, 2), [9, 9, 9, 255]);
}

#[test]
fn nominal_mask_canvas_is_square() {
    let c = MaskCanvas::default();
    assert_eq!(c.width, c.height);
    assert_eq!(c.size(), Size::new(100.0, 100.0));
}

#[test]
fn checked_pixel_read_stays_in_bounds() {
    let mut f = Frame::new(2, 3).unwrap();
    f.set_pixel(1, 2, [1, 2, 3, 4]);
    assert_eq!(f.get_pixel(1, 2), Some([1, 2, 3, 4]));
    assert_eq!(f.get_pixel(2, 0), None);
    assert_eq!(f.get_pixel(0, 3), None);
}

#[test]
#[should_panic]
fn unchecked_pixel_read_panics_out_of_bounds() {
    let f = Frame::new(2, 2).unwrap();
    let _ = f.pixel(5, 5);
}

#[test]
#[should_panic]
fn set_pixel_panics_out_of_bounds() {
    let mut f = Frame::new(2, 2).unwrap();
    f.set_pixel(0, 2, [0, 0, 0, 0]);
}
