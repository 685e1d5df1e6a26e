//! Tracing subscriber installation for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set or `force` is true; `--trace`
/// without `RUST_LOG` defaults the filter to `jsscope_eval=debug`.
/// Safe to call more than once.
pub fn init_tracing(force: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() && !force {
            return;
        }
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("jsscope_eval=debug"));
        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_targets(true)
            .with_bracketed_fields(true);
        tracing_subscriber::registry().with(filter).with(tree).init();
    });
}
