//! Output rendering for the CLI

use std::str::FromStr;

use console::style;
use srcloclib::WalkResult;

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Per-file trace followed by the summary line
    #[default]
    Text,
    /// The whole walk result as pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Whether per-file trace lines are printed during the walk
    pub fn streams_trace(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}. Use: text, json", s)),
        }
    }
}

/// Final output once the walk is done
pub fn render_result(result: &WalkResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(result.total.summary()),
        OutputFormat::Json => serde_json::to_string_pretty(result),
    }
}

/// Error line for stderr, with the prefix styled when stderr is a terminal
pub fn render_error(err: &anyhow::Error) -> String {
    format!("{} {:#}", style("Error:").red().bold().for_stderr(), err)
}
