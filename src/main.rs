use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use dynarr::cli::Args;
use dynarr::config::Config;
use dynarr::error::Result;
use dynarr::{DynamicArray, input, output};

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

/// Log to stderr, filtered by RUST_LOG or else by --debug
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    setup_sigpipe();

    let args = Args::parse();
    init_tracing(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("dynarr: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::from_args(args)?;

    // Read values from files or stdin
    let mut values = Vec::new();
    if config.reads_stdin() {
        input::read_values(BufReader::new(io::stdin().lock()), &mut values)?;
    } else {
        for path in &config.input_files {
            let reader: Box<dyn BufRead> = if path == "-" {
                Box::new(BufReader::new(io::stdin().lock()))
            } else {
                Box::new(BufReader::new(File::open(path)?))
            };
            input::read_values(reader, &mut values)?;
        }
    }
    debug!(count = values.len(), growth_factor = config.growth_factor, "loaded input");

    let mut array = DynamicArray::from_slice(&values, config.growth_factor)?;
    drop(values);

    let stderr = io::stderr();
    let mut stderr = stderr.lock();

    if config.debug {
        write!(stderr, "[0] load: ")?;
        dynarr::debug::write_stats(&mut stderr, &array)?;
        dynarr::debug::debug_layout(&mut stderr, &array)?;
    }

    // Apply the script in order; the first failing step aborts the run
    for (i, op) in config.ops.iter().enumerate() {
        let outcome = op.apply(&mut array)?;
        dynarr::debug::write_outcome(&mut stderr, op, &outcome)?;
        if config.debug {
            dynarr::debug::debug_step(&mut stderr, i + 1, op, &array)?;
        }
    }

    if config.stats {
        dynarr::debug::write_stats(&mut stderr, &array)?;
    }
    stderr.flush()?;

    // Write output
    let out = output::open_output(&config)?;
    output::write_values(out, &array, &config)?;

    Ok(())
}
