//! Dungaf is an engine for Dung's abstract argumentation frameworks.
//!
//! Frameworks are built and modified through [`AAFramework`](aa::AAFramework) objects,
//! which compute their extensions under the admissible, complete, grounded, preferred, preferred-sceptical,
//! ideal, eager, stable and semi-stable semantics, and record them until they are changed.

#![warn(missing_docs)]

pub mod aa;

pub mod io;

pub mod solvers;

pub mod utils;
