// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use clap::Parser;
use env_logger::Env;
use log::{debug, error};
use rand::rngs::StdRng;
use rand::SeedableRng;

use passforge::config::{read_config, Config};
use passforge::output::{render_strength, render_text, GenerationReport};
use passforge::strength::score_strength;
use passforge::{Error, Result};

use crate::cli::{BaseArgs, CliArgs, Command, GenerateArgs, OutputFormat, StrengthArgs};

mod cli;

const LOG_LEVEL: &str = "PASSFORGE_LOG_LEVEL";

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL, "warn")).init();

    let args: CliArgs = CliArgs::parse();
    debug!("Parsed arguments: {args:?}");

    let result = match args.command {
        Command::Generate(generate_args) => generate(&generate_args),
        Command::Strength(strength_args) => strength(&strength_args),
    };

    if let Err(e) = result {
        error!("{e:?}");
        eprintln!("🛑 {e}");
        std::process::exit(1);
    }
}

fn load_config(base: &BaseArgs) -> Result<Config> {
    match &base.config_path {
        Some(config_path) => read_config(config_path),
        None => Ok(Config::default()),
    }
}

fn generate(generate_args: &GenerateArgs) -> Result<()> {
    let mut config = load_config(&generate_args.base)?;
    generate_args.apply_to(&mut config);

    let request = config.to_request()?;
    let passwords = match generate_args.seed {
        Some(seed) => request.generate(&mut StdRng::seed_from_u64(seed)),
        None => request.generate(&mut rand::rng()),
    };

    if passwords.is_empty() {
        return Err(Error::GenerationFailed);
    }

    let assessment = request.assess();

    match generate_args.base.output {
        OutputFormat::Text => print!("{}", render_text(&passwords, &assessment)),
        OutputFormat::Json => println!(
            "{}",
            GenerationReport {
                passwords: &passwords,
                strength: &assessment,
            }
            .to_json()?
        ),
    }

    Ok(())
}

fn strength(strength_args: &StrengthArgs) -> Result<()> {
    let mut config = load_config(&strength_args.base)?;
    strength_args.base.apply_to(&mut config);
    config.validate_length()?;

    let assessment = score_strength(&config.character_classes, config.length);

    match strength_args.base.output {
        OutputFormat::Text => print!("{}", render_strength(&assessment)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assessment)?),
    }

    Ok(())
}
