use crate::aa::{Extension, ExtensionSet, LabelType};

/// A trait for solvers dedicated to semantics that prescribe exactly one extension.
pub trait SingleExtensionComputer<T>
where
    T: LabelType,
{
    /// Computes the extension.
    fn compute_one_extension(&self) -> Extension<T>;
}

/// A trait for solvers dedicated to semantics that may prescribe any number of extensions.
pub trait ExtensionSetComputer<T>
where
    T: LabelType,
{
    /// Computes all the extensions.
    ///
    /// In case the problem admits no extension, an empty set is returned.
    fn compute_extensions(&self) -> ExtensionSet<T>;
}
