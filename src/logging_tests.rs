use super::*;

#[test]
fn verbosity_levels() {
    assert_eq!(default_directive(0, false), "warn");
    assert_eq!(default_directive(1, false), "debug");
    assert_eq!(default_directive(2, false), "trace");
    assert_eq!(default_directive(5, false), "trace");
}

#[test]
fn quiet_wins_over_verbose() {
    assert_eq!(default_directive(2, true), "error");
}

#[test]
fn init_twice_is_harmless() {
    init(0, false);
    init(1, false);
}
