#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::lessons::{find, LESSONS};
use jsscope_eval::{EvalConfig, EvalErrorKind};
use jsscope_ir::SharedInterner;
use pretty_assertions::assert_eq;

#[test]
fn list_names_every_lesson_in_order() {
    let listing = list_lessons();
    let names: Vec<_> = listing
        .lines()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    let expected: Vec<_> = LESSONS.iter().map(|lesson| lesson.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn resolve_rejects_unknown_names() {
    let err = resolve_lessons(&["scope", "closures"]).err().unwrap();
    assert_eq!(err, "unknown lesson `closures` (see `jsscope list`)");

    let lessons = resolve_lessons(&["callbacks", "scope"]).unwrap();
    let names: Vec<_> = lessons.iter().map(|lesson| lesson.name).collect();
    assert_eq!(names, ["callbacks", "scope"]);
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let lessons: Vec<_> = LESSONS.iter().collect();
    let parallel = run_lessons(&lessons, &RunOptions::default());
    let sequential = run_lessons(
        &lessons,
        &RunOptions {
            parallel: false,
            ..RunOptions::default()
        },
    );

    assert_eq!(parallel.len(), LESSONS.len());
    for (left, right) in parallel.iter().zip(&sequential) {
        assert_eq!(left.lesson.name, right.lesson.name);
        assert_eq!(left.output, right.output);
        assert!(left.result.is_ok(), "{} failed", left.lesson.name);
    }
}

#[test]
fn failing_lesson_keeps_output_before_the_error() {
    let config = EvalConfig {
        max_call_depth: 0,
        ..EvalConfig::default()
    };
    let run = run_lesson(find("scope").unwrap(), &SharedInterner::new(), config);

    assert_eq!(run.output, "Apples\n");
    let err = run.result.unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 0 });
}

#[test]
fn report_flags_failures() {
    let lesson = find("callbacks").unwrap();
    let config = EvalConfig {
        max_call_depth: 0,
        ..EvalConfig::default()
    };
    let failed = run_lesson(lesson, &SharedInterner::new(), config);
    let passed = run_lesson(lesson, &SharedInterner::new(), EvalConfig::default());

    assert!(report_runs(&[passed]));
    assert!(!report_runs(&[failed]));
}
