use std::{borrow::Cow, cell::Cell};

use assuming::{
    assume, assuming,
    ignore::IgnoreStatus,
    registrar::{FnRegistrar, Registration, TestSuite},
};
use pretty_assertions::assert_eq;
use regex::Regex;


fn holds() {
    assert!(true);
}

fn fails() {
    assert!(false, "expected true to be false");
}

#[test]
fn runs_test_when_assumption_is_true() {
    let mut has_run = false;
    assuming(true).it("should run the test", || has_run = true);
    assert!(has_run);
}

#[test]
fn skips_test_when_assumption_is_false() {
    let mut has_run = false;
    assuming(false).it("should run the test", || has_run = true);
    assert!(!has_run);
}

#[test]
fn runs_test_when_probe_holds() {
    let mut has_run = false;
    assuming(holds).it("should run the test", || has_run = true);
    assert!(has_run);
}

#[test]
fn skips_test_when_probe_fails() {
    let mut has_run = false;
    assuming(fails).it("should run the test", || has_run = true);
    assert!(!has_run);
}

#[test]
fn skip_label_uses_probe_failure_without_message() {
    let has_run = Cell::new(false);
    let registration = assuming(fails).it("should run the test", || has_run.set(true));
    assert_eq!(
        registration.skip_label(),
        Some("should run the test - SKIPPED (expected true to be false)")
    );
    assert!(!has_run.get());
}

#[test]
fn skip_label_prefers_message_over_probe_failure() {
    let registration = assuming(fails)
        .with_message("some message")
        .it("should run the test", || ());
    assert_eq!(
        registration.skip_label(),
        Some("should run the test - SKIPPED (some message)")
    );
}

#[test]
fn skip_label_with_message_for_false() {
    let registration = assuming(false)
        .with_message("some message")
        .it("should run the test", || ());
    assert_eq!(
        registration.skip_label(),
        Some("should run the test - SKIPPED (some message)")
    );
}

#[test]
fn skip_label_without_message_for_false() {
    let registration = assuming(false).it("should run the test", || ());
    assert_eq!(registration.skip_label(), Some("should run the test - SKIPPED"));
}

#[test]
fn true_ignores_message() {
    let registration = assuming(true).with_message("unused").it("runs", || "value");
    assert_eq!(registration, Registration::Ran("value"));
}

#[test]
fn assert_eq_failure_text_ends_up_in_label() {
    let registration = assuming(|| std::assert_eq!(1 + 1, 3)).it("adds", || ());
    let label = registration.skip_label().unwrap();

    let pattern = Regex::new(r"^adds - SKIPPED \(assertion `left == right` failed\n\s+left: 2\n\s+right: 3\)$").unwrap();
    assert!(pattern.is_match(label), "unexpected label: {label:?}");
}

#[test]
fn assume_reports_holding_and_failing_probes() {
    assert_eq!(assume(holds)(), None);
    assert_eq!(
        assume(fails)().as_deref(),
        Some("expected true to be false")
    );
}

#[test]
fn registrar_pair_sees_framework_shaped_calls() {
    let mut log = Vec::new();
    {
        let mut registrar = FnRegistrar::new(
            |name: Cow<'static, str>, body: fn()| {
                body();
                log.push(format!("it {name}"));
            },
            |_: Cow<'static, str>, _: fn()| {},
        );
        assuming(true)
            .with_registrar(&mut registrar)
            .it("first", (|| ()) as fn());
    }
    assert_eq!(log, vec![String::from("it first")]);
}

#[test]
fn suite_hands_collected_tests_to_a_harness() {
    let mut suite = TestSuite::new();
    assuming(holds).with_registrar(&mut suite).it("a", || ());
    assuming(fails).with_registrar(&mut suite).it("b", || ());
    assuming(false).with_registrar(&mut suite).it("c", || ());

    let collected: Vec<_> = suite
        .iter()
        .map(|test| (test.name.to_string(), test.ignore.clone()))
        .collect();
    assert_eq!(
        collected,
        vec![
            (String::from("a"), IgnoreStatus::Run),
            (
                String::from("b - SKIPPED (expected true to be false)"),
                IgnoreStatus::from("expected true to be false")
            ),
            (String::from("c - SKIPPED"), IgnoreStatus::Ignore),
        ]
    );

    let ran: Vec<_> = suite
        .iter()
        .filter(|test| !test.ignore.is_ignored())
        .map(|test| test.call().is_ok())
        .collect();
    assert_eq!(ran, vec![true]);
}
