use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlurError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BlurError::capability_unavailable("x")
            .to_string()
            .contains("capability unavailable:")
    );
    assert!(
        BlurError::mask_generation("x")
            .to_string()
            .contains("mask generation failed:")
    );
    assert!(
        BlurError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_capability_and_mask_errors_degrade() {
    assert!(BlurError::capability_unavailable("x").is_degrade());
    assert!(BlurError::mask_generation("x").is_degrade());
    assert!(!BlurError::validation("x").is_degrade());
    assert!(!BlurError::serde("x").is_degrade());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlurError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
