use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Adds two single-digit integers, e.g. `3+5`", long_about = None)]
pub struct Args {
    /// Expressions to evaluate; starts an interactive prompt when omitted
    #[arg(value_name = "EXPR")]
    pub exprs: Vec<String>,

    /// Evaluate each non-empty line of a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "exprs")]
    pub file: Option<PathBuf>,

    /// Print the token stream instead of the sum
    #[arg(long = "tokens")]
    pub tokens: bool,

    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print shell completions
    Complete {
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "Invalid color choice: {}. Must be 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Args::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, &bin_name, &mut io::stdout());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Evaluate,
    Tokens,
}

pub struct AppConfig {
    pub color_enabled: bool,
    pub verbose: bool,
    pub mode: Mode,
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Self {
        let color_enabled = match args.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => atty::is(atty::Stream::Stderr) && atty::is(atty::Stream::Stdout),
        };

        AppConfig {
            color_enabled,
            verbose: args.verbose,
            mode: if args.tokens { Mode::Tokens } else { Mode::Evaluate },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_choice_parse() {
        assert_eq!("auto".parse::<ColorChoice>(), Ok(ColorChoice::Auto));
        assert_eq!("ALWAYS".parse::<ColorChoice>(), Ok(ColorChoice::Always));
        assert_eq!("never".parse::<ColorChoice>(), Ok(ColorChoice::Never));
        assert!("sometimes".parse::<ColorChoice>().is_err());
    }

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from(["calc", "--tokens", "--color", "never", "-v", "1+2"]).unwrap();
        let config = AppConfig::from_args(&args);
        assert!(!config.color_enabled);
        assert!(config.verbose);
        assert_eq!(config.mode, Mode::Tokens);
        assert_eq!(args.exprs, vec!["1+2".to_string()]);
    }

    #[test]
    fn test_file_conflicts_with_exprs() {
        assert!(Args::try_parse_from(["calc", "-f", "sums.txt", "1+2"]).is_err());
    }

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }
}
