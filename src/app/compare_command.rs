use super::{
    cli_manager::{logging_level_cli_arg, Command},
    common,
};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use dungaf::{aa::Semantics, io::AspartixWriter};
use log::debug;
use strum::IntoEnumIterator;

const CMD_NAME: &str = "compare";

const ARG_SEMANTICS: &str = "SEMANTICS";

pub(crate) struct CompareCommand;

impl CompareCommand {
    pub(crate) fn new() -> Self {
        CompareCommand
    }
}

impl<'a> Command<'a> for CompareCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Writes the extensions of a framework under several semantics")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_SEMANTICS)
                    .short("s")
                    .empty_values(false)
                    .multiple(true)
                    .use_delimiter(true)
                    .help("the semantics to compare (all of them if absent)")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        let semantics = match arg_matches.values_of(ARG_SEMANTICS) {
            Some(values) => values
                .map(Semantics::try_from)
                .collect::<Result<Vec<Semantics>>>()?,
            None => Semantics::iter().collect(),
        };
        let af = common::read_aspartix_file_path(file)?;
        let writer = AspartixWriter::default();
        let mut out = std::io::stdout();
        for s in semantics {
            let extensions = af.extensions_of(s);
            debug!("{} {} extension(s)", extensions.len(), s.name());
            writer.write_report_section(&mut out, s, &extensions)?;
        }
        Ok(())
    }
}
