use crate::fill::{run_fill, FillArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use va_form_filler::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "VA Form 21-0966 Filler",
    about = "Expand applicant records into VA Form 21-0966 field assignments",
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
    /// Fill the form from an applicant JSON file and write the field dump
    Fill(FillArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Fill(args) => run_fill(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["va-form-filler-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_fill_arguments() {
        let cli = Cli::try_parse_from([
            "va-form-filler-api",
            "fill",
            "data/applicant.json",
            "--output-dir",
            "filled",
            "--signed-on",
            "2024-10-01",
            "--print",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Fill(args)) => {
                assert_eq!(args.input, PathBuf::from("data/applicant.json"));
                assert_eq!(args.output_dir, Some(PathBuf::from("filled")));
                assert_eq!(
                    args.signed_on,
                    chrono::NaiveDate::from_ymd_opt(2024, 10, 1)
                );
                assert!(args.print);
            }
            other => panic!("expected fill command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_signing_date() {
        let result = Cli::try_parse_from([
            "va-form-filler-api",
            "fill",
            "applicant.json",
            "--signed-on",
            "10/01/2024",
        ]);
        assert!(result.is_err());
    }
}
