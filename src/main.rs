// SPDX-License-Identifier: MIT
//
// webcolor: resolve web colors from the command line.
//
// This is the binary that wires the two library crates together:
//
//   webcolor-rgb   → Color, clamping, #RGB/#RRGGBB/#RRGGBBAA, RGB index
//   webcolor-named → WebColor, the CSS keyword table
//
// Each argument is tried as a color name first, then as hex. Whatever it
// is, it prints: the library never rejects a color, so neither do we. An
// argument that is neither a name nor valid hex prints as the default
// (opaque black) and logs a warning.
//
//   $ webcolor pink '#0a00ff' '#00000080'
//   pink       #FFC0CB    16761035  (pink)
//   #0a00ff    #0A00FF    655615
//   #00000080  #00000080  0
//
// Logging goes to stderr, filtered by WEBCOLOR_LOG (default `warn`).

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use webcolor_named::WebColor;
use webcolor_rgb::Color;

const USAGE: &str = "usage: webcolor [--list] [--quiet] [--help] [COLOR...]";

const HELP: &str = "\
Resolve colors given as CSS names or web hex notation.

Arguments:
  COLOR        a color name (aliceblue, slate-grey, ...) or #RGB, #RRGGBB, #RRGGBBAA

Options:
  -l, --list   print every named color and exit
  -q, --quiet  print only the normalized hex string per color
  -h, --help   print this help and exit

Environment:
  WEBCOLOR_LOG log filter directive (default: warn)";

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "WEBCOLOR_LOG";

/// Exit status for command-line usage errors.
const EXIT_USAGE: u8 = 2;

// ─── Options ────────────────────────────────────────────────────────────────

/// Parsed command-line options.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Options {
    /// `--list`: print the named color table.
    list: bool,
    /// `--quiet`: hex only, one per line.
    quiet: bool,
    /// `--help`: print usage.
    help: bool,
    /// Positional color arguments, in order.
    colors: Vec<String>,
}

/// A command line we cannot act on.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UsageError {
    /// A flag we don't know.
    UnknownFlag(String),
    /// Nothing to do: no colors and no `--list`/`--help`.
    NoColors,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFlag(flag) => write!(f, "unknown option '{flag}'"),
            Self::NoColors => f.write_str("no colors given"),
        }
    }
}

impl Options {
    /// Parse arguments (without the program name).
    ///
    /// `--` ends option parsing; everything after it is a color, even if it
    /// starts with `-`.
    fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-l" | "--list" => opts.list = true,
                "-q" | "--quiet" => opts.quiet = true,
                "-h" | "--help" => opts.help = true,
                "--" => {
                    opts.colors.extend(args.by_ref());
                    break;
                }
                flag if flag.starts_with('-') => {
                    return Err(UsageError::UnknownFlag(arg));
                }
                _ => opts.colors.push(arg),
            }
        }

        if opts.colors.is_empty() && !opts.list && !opts.help {
            return Err(UsageError::NoColors);
        }
        Ok(opts)
    }
}

// ─── Resolution ─────────────────────────────────────────────────────────────

/// Where a resolved color came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// A color keyword.
    Named(WebColor),
    /// Valid hex notation.
    Hex,
    /// Neither; the default color stands in.
    Fallback,
}

/// Resolve one argument: name first, then hex, then the default color.
fn resolve(input: &str) -> (Color, Source) {
    if let Some(web) = WebColor::from_name(input) {
        debug!(input, name = web.name(), "resolved color name");
        return (web.to_color(), Source::Named(web));
    }

    if Color::is_hex(input) {
        let color = Color::parse_hex(input);
        debug!(input, %color, "parsed hex color");
        (color, Source::Hex)
    } else {
        warn!(input, "not a color name or hex notation, using default");
        (Color::default(), Source::Fallback)
    }
}

// ─── Output ─────────────────────────────────────────────────────────────────

/// Carry out the options, writing results to `out`.
fn run<W: Write>(opts: &Options, out: &mut W) -> io::Result<()> {
    if opts.help {
        writeln!(out, "{USAGE}\n\n{HELP}")?;
        return Ok(());
    }

    if opts.list {
        for web in WebColor::ALL {
            writeln!(out, "{:<20}  {}", web.name(), web.to_color())?;
        }
        return Ok(());
    }

    let width = opts.colors.iter().map(String::len).max().unwrap_or(0);
    for input in &opts.colors {
        let (color, source) = resolve(input);
        if opts.quiet {
            writeln!(out, "{color}")?;
            continue;
        }

        let mut line = format!("{input:<width$}  {:<9}  {}", color.to_hex(), color.rgb_index());
        let name = match source {
            Source::Named(web) => Some(web),
            Source::Hex => WebColor::find(color),
            Source::Fallback => None,
        };
        if let Some(web) = name {
            line.push_str("  (");
            line.push_str(web.name());
            line.push(')');
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let opts = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("webcolor: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&opts, &mut out) {
        eprintln!("webcolor: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

// ─── Tests ──────────────────────────────────────────────────────────────────
