extern crate clap;
extern crate failure;
extern crate mandelbrot;
extern crate tracing_subscriber;

use clap::{App, Arg, ArgMatches, ErrorKind};
use std::num::NonZeroUsize;
use std::path::Path;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use mandelbrot::config::{DEFAULT_CONFIG, DEFAULT_SCHEMA};
use mandelbrot::output::write_image;
use mandelbrot::partition::default_workers;

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const CONFIG: &str = "config";
const SCHEMA: &str = "schema";
const THREADS: &str = "threads";
const VERBOSE: &str = "verbose";

const MAX_THREADS: usize = 1024;

fn args<'a>() -> Result<ArgMatches<'a>, clap::Error> {
    App::new("mandel")
        .version("0.1.0")
        .about("Mandelbrot renderer")
        .arg(
            Arg::with_name(CONFIG)
                .required(false)
                .long(CONFIG)
                .short("c")
                .takes_value(true)
                .default_value(DEFAULT_CONFIG)
                .help("XML configuration file"),
        )
        .arg(
            Arg::with_name(SCHEMA)
                .required(false)
                .long(SCHEMA)
                .short("s")
                .takes_value(true)
                .default_value(DEFAULT_SCHEMA)
                .help("XSD schema the configuration is checked against"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        MAX_THREADS,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", MAX_THREADS),
                    )
                })
                .help("Number of threads to use in the renderer (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .long(VERBOSE)
                .short("v")
                .multiple(true)
                .help("Log progress to stderr; repeat for more detail"),
        )
        .get_matches_safe()
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let config_path = Path::new(matches.value_of(CONFIG).unwrap_or(DEFAULT_CONFIG));
    let schema_path = Path::new(matches.value_of(SCHEMA).unwrap_or(DEFAULT_SCHEMA));
    let workers = match matches.value_of(THREADS) {
        Some(t) => NonZeroUsize::from_str(t)?,
        None => default_workers(),
    };

    let loaded = mandelbrot::load(config_path, schema_path)?;
    for warning in &loaded.warnings {
        println!("Validation Warning ({})", warning);
    }
    let config = loaded.config;

    let pixels = mandelbrot::render(&config, workers)?;
    write_image(config.output_path(), &pixels)?;
    Ok(())
}

fn main() {
    let matches = match args() {
        Ok(matches) => matches,
        Err(e) => {
            println!("{}", e.message);
            match e.kind {
                ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => std::process::exit(0),
                _ => std::process::exit(1),
            }
        }
    };
    init_logging(matches.occurrences_of(VERBOSE));

    if let Err(e) = run(&matches) {
        println!("{}", e);
        std::process::exit(1);
    }
}
