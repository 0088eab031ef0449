//! Integration tests for terminal initialization.

use ansikit::init::platform_enabler;
use ansikit::seq::attr;
use ansikit::{initialize, Config, Initializer, StepOutcome};

#[test]
fn initialize_repeatedly_never_panics() {
    for _ in 0..5 {
        initialize();
    }
}

#[test]
fn run_after_initialize_matches_fresh_run() {
    initialize();
    let first = Initializer::default().run();
    initialize();
    let second = Initializer::default().run();
    assert_eq!(first, second);
}

#[test]
fn default_run_uses_platform_enabler() {
    let mode = Initializer::default().run();
    assert_eq!(mode.enabler, platform_enabler().kind());
}

#[cfg(not(windows))]
#[test]
fn console_steps_not_required_off_windows() {
    use ansikit::init::EnablerKind;

    let mode = Initializer::default().run();
    assert_eq!(mode.enabler, EnablerKind::AlreadyAnsi);
    assert_eq!(mode.vt_processing, StepOutcome::NotRequired);
    assert_eq!(mode.code_page, StepOutcome::NotRequired);
}

#[test]
fn locale_step_outcome_is_consistent_with_active_locale() {
    let mode = Initializer::default().run();
    match &mode.locale {
        StepOutcome::Applied => assert!(mode.active_locale.is_some()),
        StepOutcome::Failed(_) => assert!(mode.active_locale.is_none()),
        other => panic!("unexpected locale outcome {:?}", other),
    }
}

#[test]
fn everything_disabled_touches_nothing() {
    let config = Config {
        enable_vt_processing: false,
        utf8_code_page: false,
        set_locale: false,
        ..Default::default()
    };
    let mode = Initializer::new(config).run();
    assert_eq!(mode.vt_processing, StepOutcome::Disabled);
    assert_eq!(mode.code_page, StepOutcome::Disabled);
    assert_eq!(mode.locale, StepOutcome::Disabled);
    assert!(!mode.utf8_enabled());
}

#[test]
fn sequences_queue_through_crossterm_after_initialize() {
    initialize();
    let mut out: Vec<u8> = Vec::new();
    crossterm::queue!(
        out,
        ansikit::Sequence::fixed(attr::UNDERLINE),
        ansikit::seq::cursor::forward(3),
        ansikit::Sequence::fixed(attr::RESET)
    )
    .unwrap();
    assert_eq!(out, b"\x1b[4m\x1b[3C\x1b[0m");
}
