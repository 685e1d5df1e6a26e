//! The tutorial lessons, as operation trees.
//!
//! A lesson builds its statements against whatever interner the evaluator
//! will run with, so the same registry serves sequential and parallel
//! replay.

mod arrow_functions;
mod callbacks;
mod destructuring;
mod iterating_objects;
mod object_type;
mod reference_vs_primitives;
mod rest_and_spread;
mod scope;

use jsscope_ir::{Script, ScriptBuilder, Stmt, StringInterner};

/// One replayable lesson.
pub struct Lesson {
    /// Command-line name, e.g. `scope`.
    pub name: &'static str,
    pub title: &'static str,
    build: fn(&ScriptBuilder<'_>) -> Vec<Stmt>,
}

impl Lesson {
    /// Build the lesson's script, interning names into `interner`.
    pub fn script(&self, interner: &StringInterner) -> Script {
        Script::new((self.build)(&ScriptBuilder::new(interner)))
    }
}

/// Every lesson, in tutorial order.
pub static LESSONS: &[Lesson] = &[
    Lesson {
        name: "scope",
        title: "All about scope",
        build: scope::build,
    },
    Lesson {
        name: "callbacks",
        title: "Callbacks",
        build: callbacks::build,
    },
    Lesson {
        name: "object-type",
        title: "The object type",
        build: object_type::build,
    },
    Lesson {
        name: "iterating-objects",
        title: "Iterating through objects",
        build: iterating_objects::build,
    },
    Lesson {
        name: "reference-vs-primitives",
        title: "Reference vs primitives",
        build: reference_vs_primitives::build,
    },
    Lesson {
        name: "rest-and-spread",
        title: "Rest and spread",
        build: rest_and_spread::build,
    },
    Lesson {
        name: "arrow-functions",
        title: "Arrow functions and this",
        build: arrow_functions::build,
    },
    Lesson {
        name: "destructuring",
        title: "Destructuring",
        build: destructuring::build,
    },
];

/// Look a lesson up by its command-line name.
pub fn find(name: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|lesson| lesson.name == name)
}
