// crusti_app_helper
// Copyright (C) 2020  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::cli_manager::{CliManager, Command};
use anyhow::Result;
use fern::colors::{Color, ColoredLevelConfig};
use log::{error, info, LevelFilter};
use std::{ffi::OsString, sync::Once, time::Instant};

static LOGGER_INIT: Once = Once::new();

/// The entry point of the app.
///
/// Commands are registered with [`add_command`](Self::add_command), then [`launch_app`](Self::launch_app) reads the CLI arguments,
/// initializes the logger and executes the requested command.
/// If the command fails, the error chain is logged and the process exits with status 1.
pub(crate) struct AppHelper<'a> {
    cli_manager: CliManager<'a>,
}

impl<'a> AppHelper<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        AppHelper {
            cli_manager: CliManager::new(app_name, version, author, about),
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.cli_manager.add_command(command);
    }

    /// Launches the app with the arguments given by `std::env::args_os()`.
    pub(crate) fn launch_app(self) {
        self.launch_app_with_args(std::env::args_os())
    }

    pub(crate) fn launch_app_with_args<I, T>(self, args: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        if let Err(e) = self.execute_app(args) {
            error!("an error occurred: {}", e);
            e.chain()
                .skip(1)
                .for_each(|err| error!("caused by: {}", err));
            std::process::exit(1);
        }
    }

    fn execute_app<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let start_time = Instant::now();
        self.cli_manager.parse_cli(args)?;
        info!("exiting successfully after {:?}", start_time.elapsed());
        Ok(())
    }
}

/// Initializes the logger; only the first call has an effect.
pub(crate) fn init_logger_with_level(level: LevelFilter) {
    LOGGER_INIT.call_once(|| {
        let colors = ColoredLevelConfig::new().info(Color::Cyan);
        fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "![{:5}] {} {}",
                    colors.color(record.level()),
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stdout())
            .apply()
            .unwrap_or(());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{App, Arg, ArgMatches, SubCommand};

    struct FailingCommand;

    impl<'a> Command<'a> for FailingCommand {
        fn name(&self) -> &str {
            "maybe_fail"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("maybe_fail")
                .about("fails when asked to")
                .arg(Arg::with_name("fail").short("k"))
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            if arg_matches.is_present("fail") {
                Err(anyhow::anyhow!("asked to fail"))
            } else {
                Ok(())
            }
        }
    }

    fn app_helper() -> AppHelper<'static> {
        init_logger_with_level(LevelFilter::Off);
        let mut h = AppHelper::new("app", "0.0.0", "author", "about");
        h.add_command(Box::new(FailingCommand));
        h
    }

    #[test]
    fn test_no_args() {
        app_helper()
            .execute_app(vec![] as Vec<&'static str>)
            .unwrap_err();
    }

    #[test]
    fn test_no_subcommand() {
        app_helper().execute_app(vec!["app"]).unwrap_err();
    }

    #[test]
    fn test_subcommand_ok() {
        app_helper().execute_app(vec!["app", "maybe_fail"]).unwrap();
    }

    #[test]
    fn test_subcommand_err() {
        app_helper()
            .execute_app(vec!["app", "maybe_fail", "-k"])
            .unwrap_err();
    }
}
