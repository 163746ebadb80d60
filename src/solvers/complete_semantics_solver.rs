use super::ExtensionSetComputer;
use crate::aa::{AAFramework, ExtensionSet, LabelType};

/// A solver used to compute the complete extensions.
///
/// A complete extension is an admissible set that contains all the arguments it defends,
/// that is an admissible set that is a fixpoint of the characteristic function.
/// The complete extensions are selected among the admissible sets recorded by the framework.
///
/// # Example
///
/// ```
/// # use dungaf::aa::AAFramework;
/// # use dungaf::solvers::{CompleteSemanticsSolver, ExtensionSetComputer};
/// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "a"], ["b", "c"]]).unwrap();
/// assert_eq!(3, CompleteSemanticsSolver::new(&af).compute_extensions().len());
/// ```
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the complete semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionSetComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&self) -> ExtensionSet<T> {
        self.af
            .admissible_sets()
            .into_iter()
            .filter(|s| {
                let ids = self.af.known_ids_of(s);
                self.af.characteristic_function_of_ids(&ids) == ids
            })
            .collect()
    }
}
