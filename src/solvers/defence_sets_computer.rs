use crate::{
    aa::{AAFramework, ExtensionSet, IdSet, LabelType},
    utils,
};
use log::trace;
use permutator::CartesianProduct;
use std::collections::HashSet;

/// Computes the defence-sets of arguments, that is the minimal admissible sets containing them.
///
/// The search starts from the singleton made of the argument.
/// As long as a member of the candidate set has attackers that are not counter-attacked by the set,
/// the candidate is extended by one counter-attacker for each of these attackers,
/// considering all the possible choices (the cartesian product of the counter-attackers).
/// Branches leading to a conflict, or to an attacker that cannot be counter-attacked, are discarded.
/// The candidates reaching a state in which all their members are defended are admissible;
/// the non-minimal ones are finally removed.
///
/// # Example
///
/// ```
/// # use dungaf::aa::AAFramework;
/// # use dungaf::solvers::DefenceSetsComputer;
/// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "c"], ["d", "b"]]).unwrap();
/// let defence_sets = DefenceSetsComputer::new(&af).defence_sets_around(&"c");
/// assert_eq!(2, defence_sets.len());
/// ```
pub struct DefenceSetsComputer<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> DefenceSetsComputer<'a, T>
where
    T: LabelType,
{
    /// Builds a new defence-set computer for the given framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    /// Computes the defence-sets around an argument.
    ///
    /// If the argument is not in the framework, or is not contained in any admissible set, an empty set is returned.
    pub fn defence_sets_around(&self, arg: &T) -> ExtensionSet<T> {
        match self.af.argument_set().get_argument_index(arg) {
            Some(id) => self
                .defence_sets_around_id(id)
                .iter()
                .map(|s| self.af.ids_to_labels(s))
                .collect(),
            None => ExtensionSet::new(),
        }
    }

    pub(crate) fn defence_sets_around_id(&self, id: usize) -> Vec<IdSet> {
        let start = IdSet::from([id]);
        if !self.af.ids_are_conflict_free(&start) {
            return vec![];
        }
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut frontier = vec![start];
        let mut found: Vec<IdSet> = vec![];
        while let Some(candidate) = frontier.pop() {
            if found.iter().any(|f| f.is_subset(&candidate)) {
                continue;
            }
            let undefended = match self.first_undefended_member(&candidate) {
                Some(member) => member,
                None => {
                    trace!("found a defence-set of size {}", candidate.len());
                    found.push(candidate);
                    continue;
                }
            };
            let counter_attackers = match self.counter_attackers_for(&candidate, undefended) {
                Some(c) => c,
                None => continue,
            };
            let counter_attacker_refs = counter_attackers
                .iter()
                .map(|v| v.as_slice())
                .collect::<Vec<&[usize]>>();
            counter_attacker_refs
                .as_slice()
                .cart_prod()
                .for_each(|choice| {
                    let mut extended = candidate.clone();
                    extended.extend(choice.iter().map(|c| **c));
                    if self.af.ids_are_conflict_free(&extended) && visited.insert(extended.clone())
                    {
                        frontier.push(extended);
                    }
                });
        }
        utils::remove_non_minimal_members_of(&mut found);
        found
    }

    fn first_undefended_member(&self, candidate: &IdSet) -> Option<usize> {
        candidate
            .iter()
            .find(|member| !self.af.id_is_defended_by(candidate, **member))
            .copied()
    }

    // For each attacker of the member that is not counter-attacked yet,
    // returns the counter-attackers that may be added to the candidate without conflict.
    // Returns None if one of these attackers cannot be counter-attacked.
    fn counter_attackers_for(&self, candidate: &IdSet, member: usize) -> Option<Vec<Vec<usize>>> {
        self.af
            .attackers_of_id(member)
            .iter()
            .filter(|attacker| self.af.attackers_of_id(**attacker).is_disjoint(candidate))
            .map(|attacker| {
                let counters = self
                    .af
                    .attackers_of_id(*attacker)
                    .iter()
                    .filter(|c| {
                        let singleton = IdSet::from([**c]);
                        self.af.ids_are_conflict_free(&singleton)
                            && !self.af.ids_conflict_between(&singleton, candidate)
                    })
                    .copied()
                    .collect::<Vec<usize>>();
                if counters.is_empty() {
                    None
                } else {
                    Some(counters)
                }
            })
            .collect()
    }
}
