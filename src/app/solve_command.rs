use super::{
    cli_manager::{logging_level_cli_arg, Command},
    common,
};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dungaf::{
    aa::Query,
    io::{AspartixReader, AspartixWriter, InstanceReader, ResponseWriter},
};
use log::{info, warn};

const CMD_NAME: &str = "solve";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .args(&common::problem_args())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        let problem = arg_matches
            .value_of(common::ARG_PROBLEM)
            .ok_or_else(|| anyhow!("missing problem"))?;
        let (query, semantics) = dungaf::aa::read_problem_string(problem)?;
        let mut reader = AspartixReader::default();
        let af = common::read_file_path(file, &mut reader)?;
        let arg = arg_matches
            .value_of(common::ARG_ARG)
            .map(|a| reader.read_arg_from_str(&af, a))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        info!(
            "solving {} under the {} semantics",
            query.as_ref(),
            semantics.name()
        );
        let writer = AspartixWriter::default();
        let mut out = std::io::stdout();
        match (query, arg) {
            (Query::EE, arg) => {
                warn_useless_arg(query, arg.is_some());
                writer.write_extension_set(&mut out, &af.extensions_of(semantics))
            }
            (Query::SE, arg) => {
                warn_useless_arg(query, arg.is_some());
                match af.one_extension_of(semantics) {
                    Some(ext) => writer.write_single_extension(&mut out, &ext),
                    None => ResponseWriter::<String>::write_no_extension(&writer, &mut out),
                }
            }
            (Query::DC, Some(a)) => {
                let status = af.is_credulously_accepted(semantics, &a)?;
                write_acceptance(&writer, &mut out, status)
            }
            (Query::DS, Some(a)) => {
                let status = af.is_skeptically_accepted(semantics, &a)?;
                write_acceptance(&writer, &mut out, status)
            }
            (Query::DC, None) | (Query::DS, None) => Err(anyhow!(
                "missing argument on the command line (required for query {})",
                query.as_ref()
            )),
        }
    }
}

fn warn_useless_arg(query: Query, arg_given: bool) {
    if arg_given {
        warn!(
            "unexpected argument on the command line (useless for query {})",
            query.as_ref()
        );
    }
}

fn write_acceptance(
    writer: &AspartixWriter,
    out: &mut dyn std::io::Write,
    status: bool,
) -> Result<()> {
    ResponseWriter::<String>::write_acceptance_status(writer, out, status)
}

