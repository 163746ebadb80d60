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

use super::app_helper::init_logger_with_level;
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches};
use log::{info, LevelFilter};
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

/// A subcommand of the app.
///
/// Commands give their own CLI arguments (using clap) and execute themselves given the values of these arguments.
/// Each command must have a unique name.
pub(crate) trait Command<'a> {
    /// Returns the name of the command, as typed on the command line.
    fn name(&self) -> &str;

    /// Returns the clap subcommand describing the CLI arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command given the arguments matched by clap.
    ///
    /// The app exits with a success status code iff `Ok(())` is returned.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}

pub(crate) const APP_HELPER_LOGGING_LEVEL_ARG: &str = "APP_HELPER_LOGGING_LEVEL_ARG";

const LOGGING_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// The argument setting the logging level, to add to each command.
pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(APP_HELPER_LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&LOGGING_LEVELS)
        .help("set the minimal logging level")
}

/// Dispatches the CLI arguments to the command they name.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    fn clap_app(&self) -> App<'a, 'a> {
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        app
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.into()).collect();
        match self.clap_app().get_matches_from_safe(args.clone()) {
            Ok(matches) => {
                let (name, command_matches) = matches.subcommand();
                let command = self
                    .commands
                    .iter()
                    .find(|c| c.name() == name)
                    .ok_or_else(|| anyhow!("unknown command {}", name))?;
                let command_matches =
                    command_matches.ok_or_else(|| anyhow!("missing arguments for {}", name))?;
                let log_level = match command_matches.value_of(APP_HELPER_LOGGING_LEVEL_ARG) {
                    Some(l) => LevelFilter::from_str(l)
                        .map_err(|_| anyhow!("invalid logging level {}", l))?,
                    None => LevelFilter::Info,
                };
                init_logger_with_level(log_level);
                info!("{} {}", self.app_name, self.version);
                sys_info();
                command.execute(command_matches)
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger_with_level(LevelFilter::Info);
                self.print_help(&args)
            }
            Err(e) => {
                init_logger_with_level(LevelFilter::Info);
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help(&self, args: &[OsString]) -> Result<()> {
        const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];
        let words = args
            .iter()
            .skip(1)
            .map(|a| a.to_string_lossy().to_string())
            .collect::<Vec<String>>();
        let subcommand_name = match words.as_slice() {
            [first, second, ..] if HELP_STRINGS.contains(&first.as_str()) => Some(second),
            [first, ..] if !HELP_STRINGS.contains(&first.as_str()) => Some(first),
            _ => None,
        };
        let mut buffer = Vec::new();
        match subcommand_name.and_then(|n| self.commands.iter().find(|c| c.name() == n.as_str())) {
            Some(c) => c.clap_subcommand().write_long_help(&mut buffer),
            None => self.clap_app().write_long_help(&mut buffer),
        }
        .context("while writing help")?;
        String::from_utf8_lossy(&buffer)
            .split('\n')
            .for_each(|s| info!("{}", s));
        info!("");
        Ok(())
    }
}

fn sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_kinds: Vec<&str> = sys.cpus().iter().map(|c| c.brand()).collect();
    cpu_kinds.sort_unstable();
    cpu_kinds.dedup();
    info!(
        "physical core count: {} {:?}",
        sys.physical_core_count()
            .map(|n| n.to_string())
            .unwrap_or_else(unknown),
        cpu_kinds
    );
    info!("total memory: {} KB", sys.total_memory() / 1024);
    info!("----------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::SubCommand;
    use std::{cell::RefCell, rc::Rc};

    struct FlagCommand {
        executed: Rc<RefCell<bool>>,
        flag_set: Rc<RefCell<bool>>,
    }

    impl<'a> Command<'a> for FlagCommand {
        fn name(&self) -> &str {
            "flag"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("flag")
                .about("sets a flag")
                .arg(Arg::with_name("flag_arg").short("a"))
                .arg(logging_level_cli_arg())
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            *self.executed.borrow_mut() = true;
            if arg_matches.is_present("flag_arg") {
                *self.flag_set.borrow_mut() = true;
            }
            Ok(())
        }
    }

    fn run(args: &[&str]) -> Result<(bool, bool)> {
        let mut manager = CliManager::new("app_name", "app_version", "author", "about");
        let executed = Rc::new(RefCell::new(false));
        let flag_set = Rc::new(RefCell::new(false));
        manager.add_command(Box::new(FlagCommand {
            executed: Rc::clone(&executed),
            flag_set: Rc::clone(&flag_set),
        }));
        manager.parse_cli(args.iter().copied())?;
        let result = (*executed.borrow(), *flag_set.borrow());
        Ok(result)
    }

    #[test]
    fn test_command_executed() {
        assert_eq!((true, false), run(&["app_name", "flag"]).unwrap());
    }

    #[test]
    fn test_command_and_arg() {
        assert_eq!((true, true), run(&["app_name", "flag", "-a"]).unwrap());
    }

    #[test]
    fn test_logging_level() {
        assert_eq!(
            (true, false),
            run(&["app_name", "flag", "--logging-level", "off"]).unwrap()
        );
        assert!(run(&["app_name", "flag", "--logging-level", "loud"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        assert!(run(&["app_name"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(run(&["app_name", "foo"]).is_err());
    }

    #[test]
    fn test_unknown_arg() {
        assert!(run(&["app_name", "flag", "-b"]).is_err());
    }

    #[test]
    fn test_help() {
        for args in [
            vec!["app_name", "-h"],
            vec!["app_name", "help"],
            vec!["app_name", "help", "flag"],
            vec!["app_name", "flag", "-h"],
        ] {
            assert_eq!((false, false), run(&args).unwrap());
        }
    }
}
