//! Command-line interface for keyfont
//! This binary rebases a glyph table into the firmware's 16-bit code space.
//!
//! Usage:
//!   keyfont [input] [output]                  - Remap input.txt (or `input`) into output.txt (or `output`)
//!   keyfont --config `<file>` [input] [output] - Layer a TOML configuration over the defaults
//!
//! Settings are resolved in order: built-in defaults, `keyfont.toml` in the working directory,
//! the `--config` file, then command-line flags.
mod report;

use clap::{Arg, ArgAction, ArgMatches, Command};
use keyfont_config::Loader;
use report::ConsoleProgress;
use std::error::Error;

fn main() {
    let matches = cli().get_matches();
    if let Err(e) = handle_remap_command(&matches) {
        eprintln!("keyfont: {}", e);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("keyfont")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rebase a keyfont glyph table into 16-bit code points")
        .arg(
            Arg::new("input")
                .help("Glyph table to read (default: input.txt)")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("File to write the rebased table to (default: output.txt)")
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .help("Subtracted from every entry except the special index (e.g. 0xBFB0)")
                .value_parser(parse_number)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("special-index")
                .long("special-index")
                .help("Entry written unchanged (e.g. 512)")
                .value_parser(parse_number)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("wrap-boundary")
                .long("wrap-boundary")
                .help("Overflow threshold and wrap amount (e.g. 0x10000)")
                .value_parser(parse_number)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("reject-negative")
                .long("reject-negative")
                .help("Fail instead of writing negative indices")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("atomic")
                .long("atomic")
                .help("Only replace the output file once the whole table was written")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Do not print the line counter")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Final report format")
                .value_parser(["text", "json"]),
        )
}

/// Parse a decimal or `0x`-prefixed hexadecimal integer.
fn parse_number(value: &str) -> Result<i64, String> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("'{}' is not a number: {}", value, e))
}

/// Resolve the configuration and run the remap
fn handle_remap_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut loader = Loader::new().with_local_file(".");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    for (arg, key) in [("input", "io.input_path"), ("output", "io.output_path")] {
        if let Some(path) = matches.get_one::<String>(arg) {
            loader = loader.set_override(key, path.as_str())?;
        }
    }
    for (arg, key) in [
        ("offset", "remap.offset"),
        ("special-index", "remap.special_index"),
        ("wrap-boundary", "remap.wrap_boundary"),
    ] {
        if let Some(value) = matches.get_one::<i64>(arg) {
            loader = loader.set_override(key, *value)?;
        }
    }
    if matches.get_flag("reject-negative") {
        loader = loader.set_override("remap.negative_index", "reject")?;
    }
    if matches.get_flag("atomic") {
        loader = loader.set_override("io.atomic_output", true)?;
    }
    if matches.get_flag("quiet") {
        loader = loader.set_override("report.progress", false)?;
    }
    if let Some(format) = matches.get_one::<String>("summary") {
        loader = loader.set_override("report.summary", format.as_str())?;
    }

    let config = loader.build()?;
    let mut progress = ConsoleProgress::new(config.report.progress, config.report.summary);
    config
        .driver()
        .run_files(&config.io.input_path, &config.io.output_path, &mut progress)?;
    Ok(())
}
