//! Command-line front end: arguments, logging setup and the run loop shared
//! by the `mstmap` binary.

use std::io::Write;
use std::path::Path;

use clap::Parser;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::Result;
use crate::render::{RenderConfig, DEFAULT_DISTANCE_SCALE};
use crate::selection::parse_point;
use crate::session::Session;

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn,mstmap=info";

#[derive(Parser, Debug)]
#[command(name = "mstmap", author, version, about, long_about = None)]
pub struct Args {
    /// Spanning tree algorithm to run
    #[arg(short, long, default_value = "Kruskal")]
    pub algorithm: String,

    /// Real-world units per map pixel used for distance labels
    #[arg(short, long, default_value_t = DEFAULT_DISTANCE_SCALE)]
    pub scale: f64,

    /// Unit suffix appended to distance labels
    #[arg(short, long, default_value = "m")]
    pub unit: String,

    /// Map image the points were picked on
    #[arg(short, long, default_value = "img/map.png")]
    pub map: String,

    /// File every log record is also written to
    #[arg(long, default_value = "application.log")]
    pub log_file: String,

    /// Selected points in map pixels, each written as X,Y (use `--` before negative ones)
    #[arg(allow_hyphen_values = true)]
    pub points: Vec<String>,
}

/// Builds the log filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_LOG_FILTER`] when they are absent or do not parse.
#[must_use]
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a console layer on stderr and a plain-text layer appending to `log_file`.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the whole run.
pub fn init_logging(filter: EnvFilter, log_file: &Path) -> WorkerGuard {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = log_file
        .file_name()
        .map_or_else(|| "application.log".into(), |n| n.to_os_string());
    let appender = tracing_appender::rolling::never(dir, name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();
    guard
}

/// Returns `true` if the map image exists; logs a warning otherwise.
pub fn check_map_image(path: &str) -> bool {
    let exists = Path::new(path).is_file();
    if !exists {
        warn!(map = path, "map image not found");
    }
    exists
}

/// Selects the given points, computes their tree and writes one line per
/// edge plus a total to `out`.
///
/// # Errors
///
/// Returns an error for a non-positive scale, a malformed point, an
/// unsupported algorithm, or a failed write.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let mut config = RenderConfig::default()
        .with_distance_scale(args.scale)?
        .with_unit(args.unit.as_str());
    config.map_image.clone_from(&args.map);
    check_map_image(&args.map);

    let mut session = Session::new(config);
    for text in &args.points {
        session.select(parse_point(text)?)?;
    }

    let tree = session.calculate(&args.algorithm)?.clone();
    let config = session.config();
    for edge in &tree.edges {
        writeln!(
            out,
            "{} - {}  {:.2}px  {}",
            edge.a,
            edge.b,
            edge.weight,
            config.format_distance(edge.weight)
        )?;
    }
    writeln!(
        out,
        "total: {:.2}px  {}",
        tree.total_weight(),
        config.format_distance(tree.total_weight())
    )?;
    Ok(())
}
