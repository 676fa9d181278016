//! Command-line argument handling.

use crate::api::DEFAULT_BASE_URL;

/// What to do after parsing the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the TUI against the given server base URL.
    Run(Config),
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server_url: String,
}

/// Parse arguments. The server URL comes from `--server <url>`, falling back
/// to the `MENTOR_SERVER_URL` environment variable, then the default.
pub fn parse_args<I>(args: I, env_server: Option<String>) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut server_url = env_server.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--server" => {
                if let Some(url) = args.next() {
                    server_url = url;
                }
            }
            _ => {}
        }
    }
    CliCommand::Run(Config {
        server_url: server_url.trim_end_matches('/').to_string(),
    })
}

pub const HELP_TEXT: &str = "\
mentor - terminal client for a Mentor learning server

USAGE:
    mentor [OPTIONS]

OPTIONS:
    --server <url>    Server base URL (default: http://localhost:8000,
                      or the MENTOR_SERVER_URL environment variable)
    -V, --version     Print version
    -h, --help        Print this help
";
