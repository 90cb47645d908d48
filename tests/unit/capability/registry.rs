use super::*;
use crate::capability::filter::FilterKernel;

#[test]
fn builtin_registry_knows_variable_blur() {
    let reg = FilterRegistry::with_builtin_filters();
    assert!(reg.contains(VARIABLE_BLUR_TYPE));
    assert!(reg.filter_with_type(VARIABLE_BLUR_TYPE).is_ok());
}

#[test]
fn unknown_type_is_unavailable() {
    let reg = FilterRegistry::with_builtin_filters();
    let err = reg.filter_with_type("gaussianBlur").unwrap_err();
    assert!(matches!(err, BlurError::CapabilityUnavailable(_)));
    assert!(err.to_string().contains("gaussianBlur"));
}

#[test]
fn mismatched_constructor_is_rejected() {
    let mut reg = FilterRegistry::empty();
    reg.register(VARIABLE_BLUR_TYPE, || {
        FilterBuilder::new("colorMatrix", FilterKernel::CpuVariableBlur)
    });
    assert!(matches!(
        reg.filter_with_type(VARIABLE_BLUR_TYPE),
        Err(BlurError::CapabilityUnavailable(_))
    ));
}

#[test]
fn debug_lists_registered_types() {
    let reg = FilterRegistry::with_builtin_filters();
    assert!(format!("{reg:?}").contains("variableBlur"));
}
