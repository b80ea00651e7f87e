use crate::diagnose::{run_catalog_list, run_diagnose, CatalogListArgs, DiagnoseArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use kosen_match::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Kosen Match",
    about = "Serve and run kosen match diagnoses from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank colleges for a set of questionnaire answers
    Diagnose(DiagnoseArgs),
    /// Inspect the college catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Print every college in the loaded catalog
    List(CatalogListArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Catalog file (CSV or JSON) to serve instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Diagnose(args) => run_diagnose(args),
        Command::Catalog {
            command: CatalogCommand::List(args),
        } => run_catalog_list(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["kosen-match-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_diagnose_flags() {
        let cli = Cli::try_parse_from([
            "kosen-match-api",
            "diagnose",
            "--interests",
            "mechanical",
            "--personality",
            "practical",
            "--dormitory",
            "80",
            "--top",
            "3",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Diagnose(args)) => {
                assert_eq!(args.interests.as_deref(), Some("mechanical"));
                assert_eq!(args.dormitory, Some(80));
                assert_eq!(args.top, 3);
            }
            other => panic!("expected diagnose command, got {other:?}"),
        }
    }

    #[test]
    fn parses_catalog_list() {
        let cli = Cli::try_parse_from(["kosen-match-api", "catalog", "list"]).expect("parses");
        assert!(matches!(
            cli.command,
            Some(Command::Catalog {
                command: CatalogCommand::List(_)
            })
        ));
    }
}
