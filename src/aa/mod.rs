//! This module contains the main material used to define Abstract Argumentation.

use std::collections::BTreeSet;

mod aa_framework;
pub use aa_framework::AAFramework;
pub use aa_framework::Attack;
pub(crate) use aa_framework::IdSet;

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentSet;
pub use arguments::LabelType;

mod conflict_analysis;

mod errors;
pub use errors::FrameworkError;

mod extension_cache;
pub(crate) use extension_cache::CachedExtensions;

mod semantics;
pub use semantics::read_problem_string;
pub use semantics::Query;
pub use semantics::Semantics;

/// An extension, given as the set of the labels of its arguments.
pub type Extension<T> = BTreeSet<T>;

/// A set of extensions.
pub type ExtensionSet<T> = BTreeSet<Extension<T>>;
