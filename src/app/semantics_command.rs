use super::cli_manager::{logging_level_cli_arg, Command};
use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use dungaf::aa::{Query, Semantics};
use strum::IntoEnumIterator;

const CMD_NAME: &str = "semantics";

const ARG_NAMES: &str = "NAMES";

pub(crate) struct SemanticsCommand;

impl SemanticsCommand {
    pub(crate) fn new() -> Self {
        SemanticsCommand
    }
}

impl<'a> Command<'a> for SemanticsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the problems handled by the engine")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_NAMES)
                    .long("names")
                    .help("lists the semantics tags and their full names instead of the problems")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        if arg_matches.is_present(ARG_NAMES) {
            Semantics::iter().for_each(|s| println!("{} {}", s.as_ref(), s.name()));
            return Ok(());
        }
        let problems = Query::iter_problem_strings().collect::<Vec<String>>();
        println!("[{}]", problems.join(","));
        Ok(())
    }
}
