mod app_helper;
pub(crate) use app_helper::AppHelper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod cli_manager;
pub(crate) use cli_manager::Command;

pub(crate) mod common;

mod compare_command;
pub(crate) use compare_command::CompareCommand;

mod generate_command;
pub(crate) use generate_command::GenerateCommand;

mod semantics_command;
pub(crate) use semantics_command::SemanticsCommand;

mod solve_command;
pub(crate) use solve_command::SolveCommand;
