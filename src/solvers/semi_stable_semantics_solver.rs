use super::ExtensionSetComputer;
use crate::aa::{AAFramework, ExtensionSet, IdSet, LabelType};

/// A solver used to compute the semi-stable extensions.
///
/// The semi-stable extensions are the complete extensions which range is maximal with respect to set inclusion,
/// where the range of a set is made of its members and the arguments they attack.
/// When the framework has stable extensions, they are exactly its semi-stable extensions.
///
/// # Example
///
/// ```
/// # use dungaf::aa::AAFramework;
/// # use dungaf::solvers::{ExtensionSetComputer, SemiStableSemanticsSolver};
/// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "c"], ["c", "a"], ["d", "e"]]).unwrap();
/// assert_eq!(1, SemiStableSemanticsSolver::new(&af).compute_extensions().len());
/// ```
pub struct SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the semi-stable semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionSetComputer<T> for SemiStableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&self) -> ExtensionSet<T> {
        let with_ranges = self
            .af
            .complete_extensions()
            .into_iter()
            .map(|e| {
                let range = self.af.range_of_ids(&self.af.known_ids_of(&e));
                (e, range)
            })
            .collect::<Vec<_>>();
        let is_strictly_included = |smaller: &IdSet, larger: &IdSet| {
            smaller.len() < larger.len() && smaller.is_subset(larger)
        };
        with_ranges
            .iter()
            .filter(|(_, range)| {
                !with_ranges
                    .iter()
                    .any(|(_, other)| is_strictly_included(range, other))
            })
            .map(|(e, _)| e.clone())
            .collect()
    }
}
