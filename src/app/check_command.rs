use super::{
    cli_manager::{logging_level_cli_arg, Command},
    common,
};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, ArgMatches, SubCommand};

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input AF files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        common::read_aspartix_file_path(file).map(|_| ())
    }
}
