use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "intake", version, about = "Client intake wizard")]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Append submissions to this JSON-lines file instead of the configured transport
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Answer the questionnaire interactively
    Run,
    /// Submit answers read from a JSON object of field values
    Fill { answers: PathBuf },
    /// Print the step and field table as JSON
    Schema,
}
