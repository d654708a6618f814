//! Select points, compute their minimum spanning tree and print each edge
//! with its distance label.
//!
//! ```text
//! mstmap 0,0 0,10 10,10
//! mstmap --algorithm Kruskal --scale 1 --unit px 12,40 80,33 51,97
//! RUST_LOG=mstmap=debug mstmap 0,0 3,4
//! ```
//!
//! Log records go to stderr and are appended to `application.log`
//! (see `--log-file`).

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use mstmap::cli::{env_filter, init_logging, run, Args};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();

    // Default: WARN for everything, INFO for mstmap. RUST_LOG replaces it.
    let rust_log = std::env::var("RUST_LOG").ok();
    let _guard = init_logging(env_filter(rust_log.as_deref()), Path::new(&args.log_file));

    info!("starting mstmap");
    let code = match run(&args, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    };
    info!("closing mstmap");
    code
}
