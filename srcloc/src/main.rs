//! # srcloc
//!
//! A CLI tool that walks a directory tree, counts source files by extension,
//! and tallies their lines.
//!
//! ## Overview
//!
//! srcloc is built on top of srcloclib. It prints each matched file as it is
//! counted, indented one space per directory level below the root, and
//! finishes with a summary line:
//!
//! ```text
//! ./a.cs
//!  ./sub/c.fx
//! 5 lines in 2 classes
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Count .cs, .fx and .fxh files under the current directory, skipping .svn
//! srcloc
//!
//! # Count Rust files, skipping .git and target
//! srcloc path/to/repo --ext rs --exclude .git --exclude target
//!
//! # Keep going past unreadable entries, summary only
//! srcloc --keep-going --quiet
//!
//! # Machine-readable output
//! srcloc --output json
//! ```
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`
//! (for example `RUST_LOG=srcloclib=debug`).

mod render;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use srcloclib::{walk_tree_with, ErrorPolicy, FilterConfig, WalkOptions, DEFAULT_MAX_DEPTH};
use tracing_subscriber::EnvFilter;

use render::{render_error, render_result, OutputFormat};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("srcloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count source files and their lines under a directory tree")
        .arg(
            Arg::new("path")
                .help("Directory to walk (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("ext")
                .short('x')
                .long("ext")
                .action(ArgAction::Append)
                .help("Count files with this extension (replaces the default cs, fx, fxh)"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip paths containing this substring (replaces the default .svn)"),
        )
        .arg(
            Arg::new("exclude-glob")
                .short('g')
                .long("exclude-glob")
                .action(ArgAction::Append)
                .help("Skip paths matching this glob pattern"),
        )
        .arg(
            Arg::new("keep-going")
                .short('k')
                .long("keep-going")
                .action(ArgAction::SetTrue)
                .help("Skip unreadable entries instead of stopping at the first one"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_parser(clap::value_parser!(usize))
                .help("Maximum directory nesting below the root [default: 256]"),
        )
        .arg(
            Arg::new("follow-links")
                .short('L')
                .long("follow-links")
                .action(ArgAction::SetTrue)
                .help("Follow symbolic links (loops are detected)"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .action(ArgAction::SetTrue)
                .help("Visit directory entries in file-name order"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only print the summary line"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(extensions) = matches.get_many::<String>("ext") {
        filter = filter.extensions(extensions.cloned());
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        filter = filter.excludes(excludes.cloned());
    }

    if let Some(globs) = matches.get_many::<String>("exclude-glob") {
        for pattern in globs {
            filter = filter.exclude_glob(pattern)?;
        }
    }

    Ok(filter)
}

/// Build walk options from matches
fn build_options(matches: &ArgMatches) -> Result<WalkOptions, anyhow::Error> {
    let on_error = if matches.get_flag("keep-going") {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Fail
    };
    let max_depth = matches
        .get_one::<usize>("max-depth")
        .copied()
        .unwrap_or(DEFAULT_MAX_DEPTH);

    Ok(WalkOptions::new()
        .filter(build_filter(matches)?)
        .on_error(on_error)
        .max_depth(max_depth)
        .follow_links(matches.get_flag("follow-links"))
        .sorted(matches.get_flag("sort")))
}

/// Walk the tree and print the trace and the result
fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let format: OutputFormat = matches
        .get_one::<String>("output")
        .map(|s| s.parse::<OutputFormat>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();
    let options = build_options(matches)?;

    let show_trace = format.streams_trace() && !matches.get_flag("quiet");

    let result = walk_tree_with(path, &options, |file| {
        if show_trace {
            println!("{}", file.trace_line());
        }
    })?;

    if !result.skipped.is_empty() {
        tracing::warn!(count = result.skipped.len(), "entries were skipped");
    }

    println!("{}", render_result(&result, format)?);
    Ok(())
}

/// Install the stderr subscriber, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            ExitCode::FAILURE
        }
    }
}
