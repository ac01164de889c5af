//! Print one catalog entry, or a catalog's contents, as JSON.
//!
//! Resolves the catalog directory (`--catalog-dir`, then `XOSC_CATALOG_DIR`,
//! then the working directory), decodes the requested entry and writes it to
//! stdout. Decode failures are reported on stderr as `error[<kind>]: ...` so
//! callers can branch on the failure class without parsing prose.

use anyhow::{Context, Result, bail};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xosc_catalog::{CatalogError, CatalogIndex, CatalogReference, decode, resolve_catalog_dir};

fn main() {
    init_logging();

    let args = match CliArgs::parse(env::args_os().skip(1)) {
        Ok(Command::Help) => {
            print!("{}", usage());
            return;
        }
        Ok(Command::Run(args)) => args,
        Err(err) => {
            eprintln!("{err:#}");
            eprint!("{}", usage());
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&args) {
        match err.downcast_ref::<CatalogError>() {
            Some(catalog_err) => eprintln!("error[{}]: {err:#}", catalog_err.kind()),
            None => eprintln!("{err:#}"),
        }
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &CliArgs) -> Result<()> {
    let catalog_dir = resolve_catalog_dir(args.catalog_dir.as_deref())?;

    let output = match &args.mode {
        Mode::Entry(entry_name) => {
            let reference = CatalogReference::new(&args.catalog, entry_name);
            let entry = decode(&catalog_dir, &reference)?;
            serde_json::to_string_pretty(&entry).context("serializing catalog entry")?
        }
        Mode::List => {
            let index = CatalogIndex::load(&catalog_dir, &args.catalog)?;
            serde_json::to_string_pretty(index.entries()).context("serializing catalog index")?
        }
    };

    println!("{output}");
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Run(CliArgs),
}

#[derive(Debug, PartialEq)]
enum Mode {
    Entry(String),
    List,
}

#[derive(Debug, PartialEq)]
struct CliArgs {
    catalog_dir: Option<PathBuf>,
    catalog: String,
    mode: Mode,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = OsString>) -> Result<Command> {
        let mut catalog_dir: Option<PathBuf> = None;
        let mut catalog: Option<String> = None;
        let mut entry: Option<String> = None;
        let mut list = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--catalog-dir" => {
                    catalog_dir = Some(PathBuf::from(next_value(&mut args, "--catalog-dir")?));
                }
                "--catalog" => catalog = Some(next_value(&mut args, "--catalog")?),
                "--entry" => entry = Some(next_value(&mut args, "--entry")?),
                "--list" => list = true,
                "--help" | "-h" => return Ok(Command::Help),
                other => bail!("unknown flag: {other}"),
            }
        }

        let Some(catalog) = catalog.filter(|name| !name.is_empty()) else {
            bail!("--catalog is required");
        };
        let mode = match (entry, list) {
            (Some(_), true) => bail!("--entry and --list are mutually exclusive"),
            (Some(name), false) => Mode::Entry(name),
            (None, true) => Mode::List,
            (None, false) => bail!("one of --entry or --list is required"),
        };

        Ok(Command::Run(CliArgs {
            catalog_dir,
            catalog,
            mode,
        }))
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: catalog-entry [--catalog-dir DIR] --catalog NAME (--entry NAME | --list)\n\
Decodes a Vehicle or Pedestrian entry from DIR/NAME.xosc and prints it as JSON, or lists the catalog's entries.\n\
DIR defaults to $XOSC_CATALOG_DIR, then the current directory.\n"
}
