use clap::Parser;

/// Verdicts are read from stdin and written to stdout; the flags only tune logging.
#[derive(Debug, Clone, Parser)]
#[command(name = "binge-check")]
#[command(version)]
#[command(about = "Checks whether X*Y minutes fit into Z days for each test case read from stdin")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_without_arguments() {
        let config = CliConfig::try_parse_from(["binge-check"]).unwrap();
        assert!(!config.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        let config = CliConfig::try_parse_from(["binge-check", "-v"]).unwrap();
        assert!(config.verbose);
        let config = CliConfig::try_parse_from(["binge-check", "--verbose"]).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(CliConfig::try_parse_from(["binge-check", "input.txt"]).is_err());
    }
}
