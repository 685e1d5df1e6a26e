//! The `run` command: replay lessons and report their output.

use jsscope_eval::{buffer_handler, EvalConfig, EvalError, EvaluatorBuilder};
use jsscope_ir::SharedInterner;
use rayon::prelude::*;

use crate::lessons::Lesson;

/// How lessons are replayed.
#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
    pub eval: EvalConfig,
    /// Evaluate lessons concurrently. Output is still reported in order.
    pub parallel: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            eval: EvalConfig::default(),
            parallel: true,
        }
    }
}

/// Captured result of one lesson.
pub struct LessonRun {
    pub lesson: &'static Lesson,
    /// Everything the lesson logged, including output before a failure.
    pub output: String,
    pub result: Result<(), EvalError>,
}

/// Evaluate one lesson in a fresh evaluator, capturing its `console.log` output.
pub fn run_lesson(lesson: &'static Lesson, interner: &SharedInterner, config: EvalConfig) -> LessonRun {
    let _span = tracing::debug_span!("lesson", name = lesson.name).entered();
    let output = buffer_handler();
    let mut evaluator = EvaluatorBuilder::new(interner.clone())
        .config(config)
        .print_handler(output.clone())
        .build();
    let script = lesson.script(interner);
    let result = evaluator.run_script(&script).map(|_| ());
    if let Err(err) = &result {
        tracing::debug!(lesson = lesson.name, %err, "lesson failed");
    }
    LessonRun {
        lesson,
        output: output.get_output(),
        result,
    }
}

/// Evaluate `lessons`, returning runs in the order given.
///
/// Parallel runs use a scoped rayon pool that is torn down before returning.
/// Every lesson gets its own evaluator; the interner is shared.
pub fn run_lessons(lessons: &[&'static Lesson], options: &RunOptions) -> Vec<LessonRun> {
    let interner = SharedInterner::new();
    let sequential = || {
        lessons
            .iter()
            .map(|&lesson| run_lesson(lesson, &interner, options.eval))
            .collect::<Vec<_>>()
    };
    if !options.parallel || lessons.len() < 2 {
        return sequential();
    }

    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                lessons
                    .par_iter()
                    .map(|&lesson| run_lesson(lesson, &interner, options.eval))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            sequential()
        })
}

/// Print each run under a title header; errors go to stderr.
///
/// Returns `false` if any lesson failed.
pub fn report_runs(runs: &[LessonRun]) -> bool {
    let mut ok = true;
    for (index, run) in runs.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("== {} ==", run.lesson.title);
        print!("{}", run.output);
        if let Err(err) = &run.result {
            eprintln!("error: lesson `{}` failed: {err}", run.lesson.name);
            ok = false;
        }
    }
    ok
}
