// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! gcz - Guided conventional commits for Git

use clap::Parser;
use gcz::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("{}", console::style(&e).red().for_stderr());
        std::process::exit(e.exit_code());
    }
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("gcz=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
