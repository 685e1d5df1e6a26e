//! jsscope CLI
//!
//! Replays the scope and reference lessons on the environment evaluator.

use jsscope::commands::{list_lessons, report_runs, resolve_lessons, run_lessons, RunOptions};
use jsscope::lessons::{Lesson, LESSONS};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "list" => print!("{}", list_lessons()),
        "run" => {
            let mut options = RunOptions::default();
            let mut all = false;
            let mut trace = false;
            let mut names = Vec::new();

            for arg in args.iter().skip(2) {
                if arg == "--all" {
                    all = true;
                } else if arg == "--sloppy" {
                    options.eval.strict_mode = false;
                } else if arg == "--trace" {
                    trace = true;
                } else if arg == "--no-parallel" {
                    options.parallel = false;
                } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
                    let Ok(depth) = depth.parse() else {
                        eprintln!("error: invalid --max-depth value `{depth}`");
                        std::process::exit(1);
                    };
                    options.eval.max_call_depth = depth;
                } else if arg.starts_with('-') {
                    eprintln!("error: unknown option `{arg}`");
                    std::process::exit(1);
                } else {
                    names.push(arg.as_str());
                }
            }

            jsscope::init_tracing(trace);

            let lessons: Vec<&'static Lesson> = if all {
                LESSONS.iter().collect()
            } else {
                match resolve_lessons(&names) {
                    Ok(lessons) => lessons,
                    Err(message) => {
                        eprintln!("error: {message}");
                        std::process::exit(1);
                    }
                }
            };
            if lessons.is_empty() {
                eprintln!("Usage: jsscope run <lesson>... | --all [options]");
                std::process::exit(1);
            }

            if !report_runs(&run_lessons(&lessons, &options)) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("jsscope {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("jsscope (lexical scope and reference lessons)");
    println!();
    println!("Usage: jsscope <command> [options]");
    println!();
    println!("Commands:");
    println!("  list                  List the lessons");
    println!("  run <lesson>...       Replay the named lessons");
    println!("  run --all             Replay every lesson");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Run options:");
    println!("  --sloppy              Assigning an undeclared name creates a global");
    println!("  --max-depth=<n>       Maximum call depth (default: 1000)");
    println!("  --trace               Log evaluation to stderr (filter with RUST_LOG)");
    println!("  --no-parallel         Replay lessons sequentially");
}
