use clap::Parser;

/// Top-level CLI definition. The project layout and every byte of seed
/// content are compiled into the binary; no flag or environment variable
/// changes what gets written.
#[derive(Parser, Debug)]
#[command(
    name = "starterkit",
    version,
    about = "Materialize a starter project tree with boilerplate files"
)]
pub struct Cli {
    /// Raise log verbosity (-v for debug, -vv for trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
