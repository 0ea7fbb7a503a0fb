use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "secretsanta")]
#[command(about = "A terminal UI for running a secret santa gift exchange")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SMTP relay host for outgoing mail (overrides config)
    #[arg(long)]
    pub relay: Option<String>,

    /// SMTP relay port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let args = CliArgs::parse_from(["secretsanta"]);
        assert_eq!(args.config, None);
        assert_eq!(args.relay, None);
        assert_eq!(args.port, None);
    }

    #[test]
    fn test_cli_parse_relay_override() {
        let args = CliArgs::parse_from(["secretsanta", "--relay", "mail.example.com", "--port", "2525"]);
        assert_eq!(args.relay, Some("mail.example.com".to_string()));
        assert_eq!(args.port, Some(2525));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let args = CliArgs::parse_from(["secretsanta", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
