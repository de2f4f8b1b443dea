//! rslp: batch Portuguese stemmer

use anyhow::Result;
use clap::Parser;
use rslp_cli::commands::{init_logging, Commands};

#[derive(Debug, Parser)]
#[command(name = "rslp")]
#[command(about = "Reduce Portuguese words to their stems (RSLP)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Stem(args) => args.execute(cli.quiet),
        Commands::Compare(args) => args.execute(),
        Commands::Trace(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::DumpRules(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rslp", "stem", "-i", "words.txt", "-vv", "-q"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Stem(_)));
    }

    #[test]
    fn test_parse_trace() {
        let cli = Cli::try_parse_from(["rslp", "trace", "cantando", "--remove-accents"]).unwrap();
        match cli.command {
            Commands::Trace(args) => {
                assert_eq!(args.word, "cantando");
                assert!(args.remove_accents);
            }
            other => panic!("expected trace, got {other:?}"),
        }
    }
}
