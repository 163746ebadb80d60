use super::ExtensionSetComputer;
use crate::aa::{AAFramework, ExtensionSet, LabelType};

/// A solver used to compute the stable extensions.
///
/// A stable extension is a conflict-free set attacking all the arguments it does not contain,
/// that is a conflict-free set which range is the whole set of arguments.
/// Since each stable extension is a preferred one, stable extensions are selected among the preferred extensions recorded by the framework.
///
/// A framework may have no stable extension.
///
/// # Example
///
/// ```
/// # use dungaf::aa::AAFramework;
/// # use dungaf::solvers::{ExtensionSetComputer, StableSemanticsSolver};
/// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "c"], ["c", "a"]]).unwrap();
/// assert!(StableSemanticsSolver::new(&af).compute_extensions().is_empty());
/// ```
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the stable semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionSetComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&self) -> ExtensionSet<T> {
        let n_arguments = self.af.n_arguments();
        self.af
            .preferred_extensions()
            .into_iter()
            .filter(|e| self.af.range_of_ids(&self.af.known_ids_of(e)).len() == n_arguments)
            .collect()
    }
}
