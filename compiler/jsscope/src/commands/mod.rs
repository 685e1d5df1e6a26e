//! Command handlers for the jsscope CLI.
//!
//! `main.rs` only parses arguments; everything observable lives here so the
//! tests can drive it without spawning the binary.

mod list;
mod run;

pub use list::{list_lessons, resolve_lessons};
pub use run::{report_runs, run_lesson, run_lessons, LessonRun, RunOptions};

#[cfg(test)]
mod tests;
