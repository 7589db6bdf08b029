//! Tracing subscriber setup for the driver.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, once.
///
/// Filter directives come from `KIWI_LOG`, falling back to `RUST_LOG`; with
/// neither set nothing is installed. Output goes to stderr, so the result
/// line on stdout is unaffected. `KIWI_LOG_TREE=1` selects the indented
/// span-tree layout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Some(directives) = std::env::var("KIWI_LOG")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
        else {
            return;
        };
        let tree = std::env::var("KIWI_LOG_TREE").is_ok_and(|v| v == "1");

        let tree_layer = tree.then(|| {
            HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
        });
        let fmt_layer = (!tree).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
        });

        let result = tracing_subscriber::registry()
            .with(tree_layer)
            .with(fmt_layer)
            .with(EnvFilter::new(directives))
            .try_init();
        if let Err(err) = result {
            eprintln!("warning: tracing not initialized: {err}");
        }
    });
}
