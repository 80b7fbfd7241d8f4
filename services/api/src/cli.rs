use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use employee_roster::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Employee Roster",
    about = "Serve or demonstrate the employee roster from the command line",
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
    /// Walk through the junior/senior developer scenario and print each outcome
    Demo(DemoArgs),
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
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use employee_roster::roster::MinimumFloorPolicy;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["roster-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_demo_flags() {
        let cli = Cli::try_parse_from(["roster-api", "demo", "--policy", "strict", "--list"])
            .expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => {
                assert_eq!(args.policy, Some(MinimumFloorPolicy::Strict));
                assert!(args.list);
            }
            other => panic!("expected demo command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Cli::try_parse_from(["roster-api", "demo", "--policy", "lenient"]);
        assert!(result.is_err());
    }
}
