use super::cli_manager::{logging_level_cli_arg, Command};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use dungaf::{
    aa::FrameworkError,
    io::{is_aspartix_label, AspartixWriter},
    utils::RandomFrameworkGenerator,
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

const CMD_NAME: &str = "generate";

const ARG_MIN_ARGS: &str = "MIN_ARGS";
const ARG_MAX_ARGS: &str = "MAX_ARGS";
const ARG_MIN_ATTS: &str = "MIN_ATTS";
const ARG_MAX_ATTS: &str = "MAX_ATTS";
const ARG_SEED: &str = "SEED";
const ARG_POOL: &str = "POOL";

pub(crate) struct GenerateCommand;

impl GenerateCommand {
    pub(crate) fn new() -> Self {
        GenerateCommand
    }
}

fn bound_arg<'a>(name: &'a str, long: &'a str, help: &'a str) -> Arg<'a, 'a> {
    Arg::with_name(name)
        .long(long)
        .empty_values(false)
        .multiple(false)
        .help(help)
        .required(true)
}

fn usize_value_of(arg_matches: &ArgMatches<'_>, name: &str) -> Result<usize> {
    let value = arg_matches
        .value_of(name)
        .ok_or_else(|| anyhow!("missing value for {}", name))?;
    value
        .parse::<usize>()
        .with_context(|| format!(r#"while parsing "{}" as a nonnegative integer"#, value))
}

fn check_pool_labels(pool: &[String]) -> Result<()> {
    match pool.iter().find(|l| !is_aspartix_label(l)) {
        Some(l) => Err(FrameworkError::InvalidConfiguration(format!(
            r#"label "{}" cannot be written using the Aspartix format"#,
            l
        ))
        .into()),
        None => Ok(()),
    }
}

impl<'a> Command<'a> for GenerateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Writes a random argumentation framework using the Aspartix format")
            .setting(AppSettings::DisableVersion)
            .arg(bound_arg(
                ARG_MIN_ARGS,
                "min-args",
                "the minimal number of arguments",
            ))
            .arg(bound_arg(
                ARG_MAX_ARGS,
                "max-args",
                "the maximal number of arguments",
            ))
            .arg(bound_arg(
                ARG_MIN_ATTS,
                "min-atts",
                "the minimal number of attacks",
            ))
            .arg(bound_arg(
                ARG_MAX_ATTS,
                "max-atts",
                "the maximal number of attacks",
            ))
            .arg(
                Arg::with_name(ARG_SEED)
                    .long("seed")
                    .empty_values(false)
                    .multiple(false)
                    .help("the seed of the random generator")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_POOL)
                    .long("pool")
                    .empty_values(false)
                    .multiple(false)
                    .help("the comma-separated labels to pick the arguments from (default: a to z)")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let generator = RandomFrameworkGenerator::new(
            usize_value_of(arg_matches, ARG_MIN_ARGS)?,
            usize_value_of(arg_matches, ARG_MAX_ARGS)?,
            usize_value_of(arg_matches, ARG_MIN_ATTS)?,
            usize_value_of(arg_matches, ARG_MAX_ATTS)?,
        )?;
        let pool = match arg_matches.value_of(ARG_POOL) {
            Some(p) => p
                .split(',')
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect::<Vec<String>>(),
            None => ('a'..='z').map(|c| c.to_string()).collect(),
        };
        check_pool_labels(&pool)?;
        let mut rng = match arg_matches.value_of(ARG_SEED) {
            Some(s) => {
                let seed = s
                    .parse::<u64>()
                    .with_context(|| format!(r#"while parsing seed "{}""#, s))?;
                info!("using seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let af = generator.generate(&pool, &mut rng)?;
        info!(
            "generated a framework with {} argument(s) and {} attack(s)",
            af.n_arguments(),
            af.n_attacks()
        );
        AspartixWriter::default().write_framework(&af, &mut std::io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_check_pool_labels_ok() {
        check_pool_labels(&pool(&["a", "b_1", "_c"])).unwrap();
    }

    #[test]
    fn test_check_pool_labels_invalid() {
        let err = check_pool_labels(&pool(&["a", "1x", "2y"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FrameworkError>(),
            Some(FrameworkError::InvalidConfiguration(_))
        ));
    }
}
