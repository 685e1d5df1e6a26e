//! The `list` command and lesson-name resolution.

use crate::lessons::{find, Lesson, LESSONS};

/// One line per lesson: name, then title.
pub fn list_lessons() -> String {
    let width = LESSONS.iter().map(|lesson| lesson.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for lesson in LESSONS {
        out.push_str(&format!("  {:<width$}  {}\n", lesson.name, lesson.title));
    }
    out
}

/// Map command-line names to lessons, rejecting the first unknown one.
pub fn resolve_lessons(names: &[&str]) -> Result<Vec<&'static Lesson>, String> {
    names
        .iter()
        .map(|name| {
            find(name).ok_or_else(|| format!("unknown lesson `{name}` (see `jsscope list`)"))
        })
        .collect()
}
