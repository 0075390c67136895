// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{self, Read, Write};
use std::process;
use std::str::FromStr;

use pico_args::Arguments;

const HELP: &str = "\
svgprim compiles an SVG into a tree of drawing primitives.

USAGE:
  svgprim [OPTIONS] <in-svg>  # from file to stdout
  svgprim [OPTIONS] -         # from stdin to stdout

OPTIONS:
  -h, --help                    Prints help information
  -V, --version                 Prints version information

  --width LENGTH                Overrides the root element width
  --height LENGTH               Overrides the root element height
  --fill COLOR                  Replaces authored fill colors, except 'none'.
                                Paths are always filled with this color
  --fill-all                    Applies the '--fill' color to every element,
                                even to the ones without an authored fill
  --keys                        Prints node keys
  --quiet                       Disables warnings

ARGS:
  <in-svg>                      Input file
";

#[derive(Debug)]
struct Args {
    width: Option<String>,
    height: Option<String>,
    fill: Option<String>,
    fill_all: bool,
    keys: bool,
    quiet: bool,
    input: String,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    Ok(Args {
        width: input.opt_value_from_fn("--width", parse_length)?,
        height: input.opt_value_from_fn("--height", parse_length)?,
        fill: input.opt_value_from_fn("--fill", parse_fill)?,
        fill_all: input.contains("--fill-all"),
        keys: input.contains("--keys"),
        quiet: input.contains("--quiet"),
        input: input.free_from_str()?,
    })
}

fn parse_length(s: &str) -> Result<String, String> {
    svgtypes::Length::from_str(s).map_err(|_| "invalid LENGTH value".to_string())?;
    Ok(s.to_string())
}

fn parse_fill(s: &str) -> Result<String, String> {
    svgtypes::Paint::from_str(s).map_err(|_| "invalid COLOR value".to_string())?;
    Ok(s.to_string())
}

fn main() {
    let args = match collect_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    if let Err(e) = process(args) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}

fn process(args: Args) -> Result<(), String> {
    let source = if args.input == "-" {
        svgprim::Source::Data(load_stdin()?)
    } else {
        svgprim::Source::Href(args.input.clone())
    };

    let opt = svgprim::Options {
        width: args.width,
        height: args.height,
        fill: args.fill,
        fill_all: args.fill_all,
    };

    let loader = svgprim::Loader::default();
    let tree = loader
        .load(&source, &opt)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "nothing to compile".to_string())?;

    io::stdout()
        .write_all(tree.to_text(args.keys).as_bytes())
        .map_err(|_| "failed to write to the stdout".to_string())?;

    Ok(())
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    let stdin = io::stdin();
    let mut handle = stdin.lock();

    handle
        .read_to_string(&mut buf)
        .map_err(|_| "failed to read from stdin".to_string())?;

    Ok(buf)
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
