use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Render HTTP resource analysis results as HTML, text or HAR
#[derive(Parser, Debug)]
#[command(name = "red-formatter")]
#[command(version)]
#[command(about = "Render HTTP resource analysis results as HTML, text or HAR", long_about = None)]
pub struct Args {
    /// Log registry and selection decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an analysis result
    Render(RenderArgs),
    /// List the available formats and their implementations
    List,
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// Analysis result JSON produced by the analysis engine
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output format name (unknown names fall back to html)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Render several subjects in one output stream
    #[arg(short, long)]
    pub multiple: bool,

    /// Captured response body to feed to the formatter
    #[arg(short, long, value_name = "FILE")]
    pub body: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Language tag for the output
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Base URI of the user interface, used for links in the output
    #[arg(long)]
    pub ui_uri: Option<String>,

    /// Request header that produced the analyzed response ("Name: value").
    /// Can be specified multiple times
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Config file path (defaults to red-formatter.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
