#![forbid(unsafe_code)]

//! Library half of the `treedraw` binary: option parsing and the drawing
//! commands, kept here so they can be tested without spawning a process.

pub mod cli;

use std::fmt;
use std::io;

use treedraw::fs::{WalkOptions, walk};
use treedraw::generate::{RandomTreeConfig, seeded_random_tree};
use treedraw::{LayoutError, Renderable, Tree, try_layout_with};
use treedraw_render::drawing::GlyphSet;

use crate::cli::{Command, Opts};

/// Failure while running a command.
#[derive(Debug)]
pub enum RunError {
    /// The directory to draw could not be read.
    Io(io::Error),
    /// The layout engine rejected the tree.
    Layout(LayoutError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read tree: {err}"),
            Self::Layout(err) => write!(f, "cannot draw tree: {err}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<LayoutError> for RunError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

/// Produce the diagram selected by `opts`.
pub fn run(opts: &Opts) -> Result<String, RunError> {
    match &opts.command {
        Command::Random => {
            let seed = opts.seed.unwrap_or_else(rand::random);
            tracing::info!(seed, layers = opts.layers, "drawing random tree");
            let config = RandomTreeConfig {
                layers: opts.layers,
                max_children: opts.max_children,
                ..RandomTreeConfig::default()
            };
            draw(&seeded_random_tree(seed, &config), &opts.glyphs)
        }
        Command::Fs { path } => {
            tracing::info!(path = %path.display(), depth = opts.depth, "drawing directory tree");
            let options = WalkOptions {
                max_depth: opts.depth,
                include_hidden: opts.all,
            };
            draw(&walk(path, &options)?, &opts.glyphs)
        }
    }
}

fn draw<V: Renderable>(tree: &Tree<V>, glyphs: &GlyphSet) -> Result<String, RunError> {
    Ok(try_layout_with(tree, tree.root(), glyphs)?.render())
}
