use super::*;

#[test]
fn empty_object_yields_defaults() {
    let p = BlurProps::from_json_str("{}").unwrap();
    assert_eq!(p, BlurProps::default());
    assert_eq!(p.to_configuration(), BlurConfiguration::default());
}

#[test]
fn camel_case_keys_and_legacy_direction() {
    let p = BlurProps::from_json_str(
        r#"{ "maxBlurRadius": 105, "direction": "blurredBottomClearTop", "startOffset": 0.1 }"#,
    )
    .unwrap();
    assert_eq!(p.max_blur_radius, 105.0);
    assert_eq!(p.direction, BlurDirection::BottomClearTop);
    assert_eq!(p.start_offset, 0.1);
}

#[test]
fn unknown_direction_falls_back() {
    let p = BlurProps::from_json_str(r#"{ "direction": "diagonal" }"#).unwrap();
    assert_eq!(p.direction, BlurDirection::TopClearBottom);
}

#[test]
fn wrong_types_are_serde_errors() {
    let err = BlurProps::from_json_str(r#"{ "maxBlurRadius": "big" }"#).unwrap_err();
    assert!(matches!(err, BlurError::Serde(_)));
}

#[test]
fn sanitizing_clamps_offset_and_radius() {
    let p = BlurProps {
        max_blur_radius: -4.0,
        direction: BlurDirection::TopClearBottom,
        start_offset: 1.7,
    };
    let c = p.to_configuration();
    assert_eq!(c.max_blur_radius(), 0.0);
    assert_eq!(c.start_offset(), 1.0);

    let p = BlurProps {
        max_blur_radius: f64::INFINITY,
        direction: BlurDirection::BottomClearTop,
        start_offset: f64::NAN,
    };
    let c = p.to_configuration();
    assert_eq!(c.max_blur_radius(), 0.0);
    assert_eq!(c.start_offset(), 0.0);
    assert_eq!(c.direction(), BlurDirection::BottomClearTop);
}

#[test]
fn serializes_with_host_keys() {
    let v = serde_json::to_value(BlurProps::default()).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "maxBlurRadius": 20.0,
            "direction": "topClearBottom",
            "startOffset": 0.0
        })
    );
}
