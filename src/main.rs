//! termadapt - inspect and exercise terminal adapter resolution
//!
//! Probes the execution environment, reports which adapter would be picked,
//! and optionally resolves it and writes a short sample through the
//! forwarding facade.
//!
//! # Quick Start
//!
//! ```text
//! termadapt                  # Probe, resolve, write a sample line
//! termadapt --probe-only     # Report probes and selection, touch nothing
//! termadapt --adapter posix  # Force an adapter on first resolution
//! ```

use std::env;
use std::io;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use termadapt::{Config, Resolver};

/// Command-line options
#[derive(Default)]
struct CliArgs {
    /// Adapter identifier to force
    adapter: Option<String>,
    /// Charset identifier to force
    charset: Option<String>,
    /// Report probes without constructing an adapter
    probe_only: bool,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("termadapt {}", VERSION);
}

fn print_help() {
    eprintln!("termadapt {} - terminal adapter resolution", VERSION);
    eprintln!();
    eprintln!("Usage: termadapt [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -a, --adapter <NAME>  Force adapter: posix, windows, windows-ansicon");
    eprintln!("  -c, --charset <NAME>  Force charset: ascii, ascii-extended, utf8,");
    eprintln!("                        utf8-heavy, decsg");
    eprintln!("      --probe-only      Report probe results without resolving");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Configuration: ~/.termadapt/config.toml (flags override the file)");
    eprintln!();
    eprintln!("Logging: set RUST_LOG (e.g. RUST_LOG=termadapt=debug) for details");
}

fn parse_args() -> Result<CliArgs, String> {
    let args: Vec<String> = env::args().collect();
    let mut cli = CliArgs::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-a" | "--adapter" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing adapter argument".to_string());
                }
                cli.adapter = Some(args[i].clone());
            }
            "-c" | "--charset" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing charset argument".to_string());
                }
                cli.charset = Some(args[i].clone());
            }
            "--probe-only" => {
                cli.probe_only = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(cli)
}

fn main() -> anyhow::Result<()> {
    let cli = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Merge config: command line flags override the config file
    let config = Config::load().overlaid(cli.adapter, cli.charset);

    let resolver = Resolver::global();

    println!("interactive session : {}", resolver.is_interactive_session());
    println!("windows host        : {}", resolver.is_host_windows());
    println!(
        "ansicon wrapper     : {}",
        resolver.has_terminal_emulation_wrapper()
    );
    match resolver.select_adapter_kind() {
        Some(kind) => println!("selected adapter    : {}", kind),
        None => println!("selected adapter    : none (not interactive)"),
    }

    if cli.probe_only {
        return Ok(());
    }

    let adapter = resolver.adapter_named(config.adapter.as_deref(), config.charset.as_deref())?;
    {
        let adapter = adapter.lock();
        println!("resolved adapter    : {}", adapter.kind());
        println!("active charset      : {}", adapter.charset().name());
    }

    // Exercise the forwarding facade
    let (cols, rows) = resolver.size()?;
    info!(cols, rows, "terminal size via facade");
    resolver.write_line("termadapt: adapter resolved and writable")?;

    Ok(())
}
