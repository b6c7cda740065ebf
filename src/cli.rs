use clap::{Parser, Subcommand, ValueEnum};

use passforge::config::Config;

/// passforge - Random password generation.
///
/// This tool generates passwords from selectable character sets and rates the chosen configuration.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))] // Require at least one subcommand
#[command(propagate_version = true)] // Display version in subcommand help
pub(crate) struct CliArgs {
    #[clap(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Generate one or more random passwords.
    ///
    /// This command prints the generated passwords followed by the strength of the chosen configuration.
    Generate(GenerateArgs),

    /// Rate a password configuration without generating anything.
    ///
    /// The rating only depends on the enabled character sets and the password length.
    Strength(StrengthArgs),
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Base arguments for subcommands that share common parameters.
#[derive(Parser, Debug)]
pub(crate) struct BaseArgs {
    /// Path to an optional configuration file.
    #[clap(short, long)]
    pub(crate) config_path: Option<std::path::PathBuf>,

    /// The length of each password (4-50).
    #[clap(short, long, value_parser = clap::value_parser!(u16).range(4..=50))]
    pub(crate) length: Option<u16>,

    /// Include uppercase letters (A-Z).
    #[clap(long, overrides_with = "no_uppercase")]
    pub(crate) uppercase: bool,

    /// Exclude uppercase letters.
    #[clap(long, overrides_with = "uppercase")]
    pub(crate) no_uppercase: bool,

    /// Include lowercase letters (a-z).
    #[clap(long, overrides_with = "no_lowercase")]
    pub(crate) lowercase: bool,

    /// Exclude lowercase letters.
    #[clap(long, overrides_with = "lowercase")]
    pub(crate) no_lowercase: bool,

    /// Include numbers (0-9).
    #[clap(long, overrides_with = "no_numbers")]
    pub(crate) numbers: bool,

    /// Exclude numbers.
    #[clap(long, overrides_with = "numbers")]
    pub(crate) no_numbers: bool,

    /// Include symbols (!@#$%^&*).
    #[clap(long, overrides_with = "no_symbols")]
    pub(crate) symbols: bool,

    /// Exclude symbols.
    #[clap(long, overrides_with = "symbols")]
    pub(crate) no_symbols: bool,

    /// Output format.
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) output: OutputFormat,
}

impl BaseArgs {
    /// Applies the command line overrides on top of `config`.
    pub(crate) fn apply_to(&self, config: &mut Config) {
        if let Some(length) = self.length {
            config.length = usize::from(length);
        }

        let classes = &mut config.character_classes;
        classes.uppercase = flag(self.uppercase, self.no_uppercase, classes.uppercase);
        classes.lowercase = flag(self.lowercase, self.no_lowercase, classes.lowercase);
        classes.numbers = flag(self.numbers, self.no_numbers, classes.numbers);
        classes.symbols = flag(self.symbols, self.no_symbols, classes.symbols);
    }
}

fn flag(on: bool, off: bool, current: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        current
    }
}

/// Arguments specific to the `generate` subcommand.
#[derive(Parser, Debug)]
pub(crate) struct GenerateArgs {
    #[clap(flatten)] // Inherit arguments from BaseArgs
    pub(crate) base: BaseArgs,

    /// The number of passwords to generate (1-10).
    #[clap(short = 'n', long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub(crate) count: Option<u8>,

    /// Seed the random source for reproducible output (never use for real secrets).
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

impl GenerateArgs {
    pub(crate) fn apply_to(&self, config: &mut Config) {
        self.base.apply_to(config);
        if let Some(count) = self.count {
            config.count = usize::from(count);
        }
    }
}

/// Arguments specific to the `strength` subcommand.
#[derive(Parser, Debug)]
pub(crate) struct StrengthArgs {
    #[clap(flatten)] // Inherit arguments from BaseArgs
    pub(crate) base: BaseArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("passforge").chain(args.iter().copied()))
            .unwrap()
    }

    fn generate_config(args: &[&str]) -> Config {
        let mut config = Config::default();
        match parse(args).command {
            Command::Generate(generate_args) => generate_args.apply_to(&mut config),
            Command::Strength(_) => panic!("expected generate command"),
        }
        config
    }

    #[test]
    fn no_flags_keep_config() {
        assert_eq!(generate_config(&["generate"]), Config::default());
    }

    #[test]
    fn flags_override_config() {
        let config = generate_config(&[
            "generate",
            "-l",
            "20",
            "-n",
            "4",
            "--symbols",
            "--no-uppercase",
        ]);

        assert_eq!(config.length, 20);
        assert_eq!(config.count, 4);
        assert!(config.character_classes.symbols);
        assert!(!config.character_classes.uppercase);
        assert!(config.character_classes.lowercase);
    }

    #[test]
    fn last_flag_wins() {
        let config = generate_config(&["generate", "--no-numbers", "--numbers"]);
        assert!(config.character_classes.numbers);

        let config = generate_config(&["generate", "--numbers", "--no-numbers"]);
        assert!(!config.character_classes.numbers);
    }

    #[test]
    fn length_out_of_range_is_rejected() {
        assert!(CliArgs::try_parse_from(["passforge", "generate", "-l", "3"]).is_err());
        assert!(CliArgs::try_parse_from(["passforge", "generate", "-l", "51"]).is_err());
    }

    #[test]
    fn count_out_of_range_is_rejected() {
        assert!(CliArgs::try_parse_from(["passforge", "generate", "-n", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["passforge", "generate", "-n", "11"]).is_err());
    }
}
