use std::io::{self, Write};
use std::path::Path;
use std::process;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use ucdx_parse::UcdFile;

use crate::args::ArgMatches;
use crate::error::Result;
use crate::kind::Visitor;

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::Other(format!($($tt)*)))
    }
}

mod app;
mod args;
mod cache;
mod error;
mod kind;
mod url;

fn main() {
    if let Err(err) = run() {
        if err.is_broken_pipe() {
            process::exit(0);
        }
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = app::app().get_matches();
    match matches.subcommand() {
        ("cache", Some(m)) => cmd_cache(ArgMatches::new(m)),
        ("records", Some(m)) => cmd_records(ArgMatches::new(m)),
        ("show", Some(m)) => cmd_show(ArgMatches::new(m)),
        ("url", Some(m)) => cmd_url(ArgMatches::new(m)),
        ("list-kinds", Some(_)) => cmd_list_kinds(),
        ("", _) => {
            app::app().print_help()?;
            println!("");
            Ok(())
        }
        (unknown, _) => err!("unrecognized command: {}", unknown),
    }
}

/// Send log output to stderr. `RUST_LOG` takes precedence over `verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_cache(args: ArgMatches<'_>) -> Result<()> {
    init_logging(args.is_present("verbose"));
    let ucd_dir = args.ucd_dir()?;
    let cache_dir = args.cache_dir()?;
    let kinds = args.kinds()?;
    let paths = cache::cache_all(&ucd_dir, &cache_dir, &kinds)?;

    let stdout = io::stdout();
    let mut wtr = io::BufWriter::new(stdout.lock());
    for path in paths {
        writeln!(wtr, "{}", path.display())?;
    }
    wtr.flush()?;
    Ok(())
}

fn cmd_records(args: ArgMatches<'_>) -> Result<()> {
    init_logging(args.is_present("verbose"));
    let ucd_dir = args.ucd_dir()?;
    args.kind()?.visit(PrintRecords {
        ucd_dir: &ucd_dir,
        defaults: args.is_present("defaults"),
    })
}

fn cmd_show(args: ArgMatches<'_>) -> Result<()> {
    init_logging(args.is_present("verbose"));
    let kind = args.kind()?;
    let path = cache::cache_path(&args.cache_dir()?, kind);
    kind.visit(PrintCached {
        path: &path,
        defaults: args.is_present("defaults"),
    })
}

fn cmd_url(args: ArgMatches<'_>) -> Result<()> {
    let kind = args.kind()?;
    let version = args.unicode_version()?;
    println!("{}", url::ucd_file_url(version, kind.relative_file_path()));
    Ok(())
}

fn cmd_list_kinds() -> Result<()> {
    let stdout = io::stdout();
    let mut wtr = io::BufWriter::new(stdout.lock());
    for kind in kind::ALL {
        writeln!(
            wtr,
            "{}\t{}",
            kind.name(),
            kind.relative_file_path().display()
        )?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parses a UCD file and prints its records or defaults as JSON lines.
struct PrintRecords<'a> {
    ucd_dir: &'a Path,
    defaults: bool,
}

impl<'a> Visitor for PrintRecords<'a> {
    type Output = Result<()>;

    fn visit<P>(self, parser: P) -> Result<()>
    where
        P: UcdFile + Sync,
        P::Record: Serialize + DeserializeOwned + Send,
        P::Missing: Serialize + DeserializeOwned + Send,
    {
        let file = ucdx_parse::parse_dir(self.ucd_dir, &parser)?;
        if self.defaults {
            write_json_lines(&file.defaults)
        } else {
            write_json_lines(&file.records)
        }
    }
}

/// Reads a cache file and prints its records or defaults as JSON lines.
struct PrintCached<'a> {
    path: &'a Path,
    defaults: bool,
}

impl<'a> Visitor for PrintCached<'a> {
    type Output = Result<()>;

    fn visit<P>(self, _: P) -> Result<()>
    where
        P: UcdFile + Sync,
        P::Record: Serialize + DeserializeOwned + Send,
        P::Missing: Serialize + DeserializeOwned + Send,
    {
        let file = cache::read_cache::<P::Record, P::Missing>(self.path)?;
        if self.defaults {
            write_json_lines(&file.defaults)
        } else {
            write_json_lines(&file.records)
        }
    }
}

fn write_json_lines<T: Serialize>(values: &[T]) -> Result<()> {
    let stdout = io::stdout();
    let mut wtr = io::BufWriter::new(stdout.lock());
    for value in values {
        serde_json::to_writer(&mut wtr, value)?;
        wtr.write_all(b"\n")?;
    }
    wtr.flush()?;
    Ok(())
}
