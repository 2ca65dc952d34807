use anyhow::Context;
use clap::{Parser, Subcommand};
use fp17::{
    submitter_config_from_env_values, treatments, Claim, Fp17Error, OutputFormat,
    SubmitterConfig, SubmitterEnvValues,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fp17")]
#[command(about = "FP17 dental claim record CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and output a supplier test case
    Case {
        /// Supplier test case number
        number: u32,
        /// Output format (yaml or json)
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },
    /// Validate a claim file and list its errors
    Validate {
        /// Path to a YAML or JSON claim
        path: PathBuf,
    },
    /// Validate a claim file and output it
    Render {
        /// Path to a YAML or JSON claim
        path: PathBuf,
        /// Output format (yaml or json)
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },
    /// List known treatment codes
    Treatments,
}

/// Resolve the submitter once at startup from `FP17_*` environment variables.
fn submitter_from_env() -> anyhow::Result<SubmitterConfig> {
    let values = SubmitterEnvValues {
        contract_number: std::env::var("FP17_CONTRACT_NUMBER").ok(),
        provider_number: std::env::var("FP17_PROVIDER_NUMBER").ok(),
        performer_number: std::env::var("FP17_PERFORMER_NUMBER").ok(),
        dpb_pin: std::env::var("FP17_DPB_PIN").ok(),
        site: std::env::var("FP17_SITE").ok(),
    };
    let submitter = submitter_config_from_env_values(values)?;
    tracing::debug!(
        contract_number = submitter.contract_number(),
        performer_number = submitter.performer_number(),
        "resolved submitter"
    );
    Ok(submitter)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the rendered claim.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("fp17=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Case { number, format }) => {
            let submitter = submitter_from_env()?;
            let bcds1 = supplier_testing::build_case(number, &submitter)?;
            let rendered = supplier_testing::output(&bcds1, format)?;
            print!("{rendered}");
        }
        Some(Commands::Validate { path }) => {
            let claim = Claim::read_file(&path)
                .with_context(|| format!("reading claim {}", path.display()))?;
            let errors = claim.get_errors();
            if errors.is_empty() {
                println!("{}: valid", path.display());
            } else {
                println!("{}: {} invalid field(s)", path.display(), errors.len());
                print!("{errors}");
                anyhow::bail!("claim {} failed validation", path.display());
            }
        }
        Some(Commands::Render { path, format }) => {
            let claim = Claim::read_file(&path)
                .with_context(|| format!("reading claim {}", path.display()))?;
            match fp17::output(&claim, format) {
                Ok(rendered) => print!("{rendered}"),
                Err(Fp17Error::Validation(errors)) => {
                    eprint!("{errors}");
                    anyhow::bail!("claim {} failed validation", path.display());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Some(Commands::Treatments) => {
            for def in treatments::CATALOGUE {
                let count = match def.count {
                    treatments::CountRule::None => String::new(),
                    treatments::CountRule::Required { min, max } => format!(" [{min}-{max}]"),
                };
                println!("{}  {}{}", def.code, def.name, count);
            }
        }
        None => {
            println!("Use 'fp17 --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_case_with_format() {
        let cli = Cli::try_parse_from(["fp17", "case", "11", "--format", "json"]).expect("parse");
        match cli.command {
            Some(Commands::Case { number, format }) => {
                assert_eq!(number, 11);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected case command"),
        }
    }

    #[test]
    fn format_names_are_case_insensitive() {
        let cli = Cli::try_parse_from(["fp17", "case", "11", "--format", "YML"]).expect("parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Case {
                format: OutputFormat::Yaml,
                ..
            })
        ));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Cli::try_parse_from(["fp17", "render", "claim.yaml", "--format", "xml"])
            .err()
            .expect("xml is not a format");
        assert!(err.to_string().contains("unknown output format 'xml'"));
    }

    #[test]
    fn render_defaults_to_yaml() {
        let cli = Cli::try_parse_from(["fp17", "render", "claim.yaml"]).expect("parse");
        match cli.command {
            Some(Commands::Render { path, format }) => {
                assert_eq!(path, PathBuf::from("claim.yaml"));
                assert_eq!(format, OutputFormat::Yaml);
            }
            _ => panic!("expected render command"),
        }
    }
}
