use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_INPUT_ERROR);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_INPUT_ERROR, EXIT_CONFIG_ERROR);
}

#[test]
fn exit_success_is_zero() {
    assert_eq!(EXIT_SUCCESS, 0);
}
