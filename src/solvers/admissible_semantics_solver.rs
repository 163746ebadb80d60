use super::{DefenceSetsComputer, ExtensionSetComputer};
use crate::aa::{AAFramework, ExtensionSet, IdSet, LabelType};
use log::debug;
use std::collections::BTreeSet;

/// A solver computing all the admissible sets of a framework.
///
/// Each admissible set is the union of defence-sets of its members.
/// The solver thus starts from the empty set and the defence-sets of all the arguments,
/// and closes this collection under the unions that stay conflict-free.
///
/// # Example
///
/// ```
/// # use dungaf::aa::AAFramework;
/// # use dungaf::solvers::{AdmissibleSemanticsSolver, ExtensionSetComputer};
/// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "a"]]).unwrap();
/// let admissible_sets = AdmissibleSemanticsSolver::new(&af).compute_extensions();
/// assert_eq!(3, admissible_sets.len());
/// ```
pub struct AdmissibleSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> AdmissibleSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the admissible sets.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    pub(crate) fn compute_admissible_ids(&self) -> BTreeSet<IdSet> {
        let defence_sets_computer = DefenceSetsComputer::new(self.af);
        let generators = self
            .af
            .argument_ids()
            .flat_map(|id| defence_sets_computer.defence_sets_around_id(id))
            .collect::<BTreeSet<IdSet>>();
        debug!("computed {} distinct defence-sets", generators.len());
        let mut admissible_sets = BTreeSet::from([IdSet::new()]);
        for generator in generators {
            let unions = admissible_sets
                .iter()
                .filter(|s| !generator.is_subset(s))
                .map(|s| s.union(&generator).copied().collect::<IdSet>())
                .filter(|u| self.af.ids_are_conflict_free(u))
                .collect::<Vec<IdSet>>();
            admissible_sets.extend(unions);
        }
        admissible_sets
    }
}

impl<T> ExtensionSetComputer<T> for AdmissibleSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&self) -> ExtensionSet<T> {
        self.compute_admissible_ids()
            .iter()
            .map(|s| self.af.ids_to_labels(s))
            .collect()
    }
}
