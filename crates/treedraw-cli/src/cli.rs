#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args by hand to keep the binary lean. Environment variables with
//! the `TREEDRAW_` prefix supply defaults; explicit flags override them.

use std::fmt;
use std::path::PathBuf;

use treedraw_render::drawing::GlyphSet;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
treedraw: draw trees as box-and-pipe diagrams

USAGE:
    treedraw [random] [OPTIONS]
    treedraw fs [PATH] [OPTIONS]

COMMANDS:
    random               Draw a random tree of integers (default)
    fs                   Draw the directory tree under PATH (default: .)

OPTIONS:
    --layers=N           Maximum levels of the random tree (default: 4)
    --max-children=N     Maximum children per random node (default: 3)
    --seed=N             Seed for the random tree (default: random)
    --depth=N            Directory levels to expand for fs (default: 3)
    --all, -a            Include hidden entries for fs
    --glyphs=SET         Glyph set: rounded, square or ascii (default: rounded)
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    TREEDRAW_LAYERS          Override --layers
    TREEDRAW_MAX_CHILDREN    Override --max-children
    TREEDRAW_SEED            Override --seed
    TREEDRAW_DEPTH           Override --depth
    TREEDRAW_GLYPHS          Override --glyphs
    TREEDRAW_LOG             Log filter, e.g. debug or treedraw=trace (default: warn)";

/// What to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A random tree of integers.
    Random,
    /// The directory tree under a path.
    Fs { path: PathBuf },
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub command: Command,
    /// Maximum levels of the random tree.
    pub layers: usize,
    /// Maximum children per random node.
    pub max_children: usize,
    /// RNG seed; `None` picks one at random.
    pub seed: Option<u64>,
    /// Directory levels to expand.
    pub depth: usize,
    /// Include hidden directory entries.
    pub all: bool,
    pub glyphs: GlyphSet,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            command: Command::Random,
            layers: 4,
            max_children: 3,
            seed: None,
            depth: 3,
            all: false,
            glyphs: GlyphSet::ROUNDED,
        }
    }
}

/// Outcome of parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Opts),
    Help,
    Version,
}

/// A bad flag or value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError(pub String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UsageError {}

fn number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, UsageError> {
    value
        .trim()
        .parse()
        .map_err(|_| UsageError(format!("Invalid {flag} value: {value}")))
}

fn glyphs(flag: &str, value: &str) -> Result<GlyphSet, UsageError> {
    GlyphSet::from_name(value).ok_or_else(|| UsageError(format!("Invalid {flag} value: {value}")))
}

impl Opts {
    /// Parse `args` (without the program name), reading environment
    /// defaults through `env`.
    pub fn parse_from<I, F>(args: I, env: F) -> Result<Parsed, UsageError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env("TREEDRAW_LAYERS") {
            opts.layers = number("TREEDRAW_LAYERS", &val)?;
        }
        if let Some(val) = env("TREEDRAW_MAX_CHILDREN") {
            opts.max_children = number("TREEDRAW_MAX_CHILDREN", &val)?;
        }
        if let Some(val) = env("TREEDRAW_SEED") {
            opts.seed = Some(number("TREEDRAW_SEED", &val)?);
        }
        if let Some(val) = env("TREEDRAW_DEPTH") {
            opts.depth = number("TREEDRAW_DEPTH", &val)?;
        }
        if let Some(val) = env("TREEDRAW_GLYPHS") {
            opts.glyphs = glyphs("TREEDRAW_GLYPHS", &val)?;
        }

        // Parse command-line args (override env vars)
        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Parsed::Help),
                "--version" | "-V" => return Ok(Parsed::Version),
                "--all" | "-a" => opts.all = true,
                other => {
                    if let Some(val) = other.strip_prefix("--layers=") {
                        opts.layers = number("--layers", val)?;
                    } else if let Some(val) = other.strip_prefix("--max-children=") {
                        opts.max_children = number("--max-children", val)?;
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        opts.seed = Some(number("--seed", val)?);
                    } else if let Some(val) = other.strip_prefix("--depth=") {
                        opts.depth = number("--depth", val)?;
                    } else if let Some(val) = other.strip_prefix("--glyphs=") {
                        opts.glyphs = glyphs("--glyphs", val)?;
                    } else if other.starts_with('-') && other != "-" {
                        return Err(UsageError(format!("Unknown argument: {other}")));
                    } else {
                        positional.push(other.to_string());
                    }
                }
            }
        }

        let mut positional = positional.into_iter();
        opts.command = match positional.next().as_deref() {
            None | Some("random") => Command::Random,
            Some("fs") => Command::Fs {
                path: PathBuf::from(positional.next().unwrap_or_else(|| ".".to_string())),
            },
            Some(other) => return Err(UsageError(format!("Unknown command: {other}"))),
        };
        if let Some(extra) = positional.next() {
            return Err(UsageError(format!("Unexpected argument: {extra}")));
        }

        Ok(Parsed::Run(opts))
    }
}
