use super::{AAFramework, Extension, IdSet, LabelType};

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Returns the ids of the given labels, or `None` if one of them is not an argument of the framework.
    pub(crate) fn ids_of<'a, I>(&self, labels: I) -> Option<IdSet>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        labels
            .into_iter()
            .map(|l| self.argument_set().get_argument_index(l))
            .collect()
    }

    /// Returns the ids of the given labels, ignoring the ones that are not arguments of the framework.
    pub(crate) fn known_ids_of<'a, I>(&self, labels: I) -> IdSet
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        labels
            .into_iter()
            .filter_map(|l| self.argument_set().get_argument_index(l))
            .collect()
    }

    pub(crate) fn ids_are_conflict_free(&self, ids: &IdSet) -> bool {
        ids.iter()
            .all(|id| self.attacked_by_id(*id).is_disjoint(ids))
    }

    pub(crate) fn ids_conflict_between(&self, left: &IdSet, right: &IdSet) -> bool {
        left.iter().any(|id| {
            !self.attacked_by_id(*id).is_disjoint(right)
                || !self.attackers_of_id(*id).is_disjoint(right)
        })
    }

    pub(crate) fn id_is_defended_by(&self, defenders: &IdSet, id: usize) -> bool {
        self.attackers_of_id(id)
            .iter()
            .all(|attacker| !self.attackers_of_id(*attacker).is_disjoint(defenders))
    }

    pub(crate) fn characteristic_function_of_ids(&self, ids: &IdSet) -> IdSet {
        self.argument_ids()
            .filter(|id| self.id_is_defended_by(ids, *id))
            .collect()
    }

    pub(crate) fn ids_are_admissible(&self, ids: &IdSet) -> bool {
        self.ids_are_conflict_free(ids) && ids.iter().all(|id| self.id_is_defended_by(ids, *id))
    }

    pub(crate) fn range_of_ids(&self, ids: &IdSet) -> IdSet {
        let mut range = ids.clone();
        for id in ids {
            range.extend(self.attacked_by_id(*id).iter().copied());
        }
        range
    }

    /// Returns `true` iff all the labels are arguments of the framework and no attack occurs between them.
    ///
    /// Self-attacking arguments make a set conflicting.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["c", "d"]]).unwrap();
    /// assert!(af.is_conflict_free(&["a", "c"]));
    /// assert!(!af.is_conflict_free(&["a", "b"]));
    /// assert!(!af.is_conflict_free(&["a", "z"]));
    /// ```
    pub fn is_conflict_free<'a, I>(&self, labels: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.ids_of(labels)
            .is_some_and(|ids| self.ids_are_conflict_free(&ids))
    }

    /// Returns `true` iff no attack occurs between the labels that are arguments of the framework.
    ///
    /// Contrary to [`is_conflict_free`](Self::is_conflict_free), labels that are unknown to the framework are ignored.
    pub fn has_no_conflict_among<'a, I>(&self, labels: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.ids_are_conflict_free(&self.known_ids_of(labels))
    }

    /// Returns `true` iff each attacker of the argument is attacked by some member of the set.
    ///
    /// Unattacked arguments are defended by any set, including the empty one.
    /// If the argument is not in the framework, `false` is returned.
    /// Members of the set that are not in the framework are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "c"]]).unwrap();
    /// assert!(af.defends(&["a"], &"c"));
    /// assert!(!af.defends(&[], &"c"));
    /// assert!(af.defends(&[], &"a"));
    /// ```
    pub fn defends<'a, I>(&self, labels: I, arg: &T) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.argument_set()
            .get_argument_index(arg)
            .is_some_and(|id| self.id_is_defended_by(&self.known_ids_of(labels), id))
    }

    /// Computes the characteristic function of the framework for a set of arguments,
    /// that is the set of arguments it defends.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["c", "d"], ["e", "f"], ["f", "g"]]).unwrap();
    /// let accepted = af.characteristic_function(&["e"]);
    /// assert_eq!(vec!["a", "c", "e", "g"], accepted.into_iter().collect::<Vec<_>>());
    /// ```
    pub fn characteristic_function<'a, I>(&self, labels: I) -> Extension<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let ids = self.known_ids_of(labels);
        self.ids_to_labels(&self.characteristic_function_of_ids(&ids))
    }

    /// Returns the set of arguments accepted (defended) by a set of arguments.
    ///
    /// This is an alias for [`characteristic_function`](Self::characteristic_function).
    pub fn args_accepted_by<'a, I>(&self, labels: I) -> Extension<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.characteristic_function(labels)
    }

    /// Returns `true` iff all the candidates are accepted (defended) by the set of arguments.
    ///
    /// Candidates that are not arguments of the framework are never accepted.
    pub fn args_accept<'a, 'b, I, J>(&self, labels: I, candidates: J) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        J: IntoIterator<Item = &'b T>,
        T: 'a + 'b,
    {
        let defenders = self.known_ids_of(labels);
        candidates.into_iter().all(|c| {
            self.argument_set()
                .get_argument_index(c)
                .is_some_and(|id| self.id_is_defended_by(&defenders, id))
        })
    }

    /// Returns `true` iff some argument of the first set attacks or is attacked by some argument of the second set.
    ///
    /// Conflicts that occur inside one of the sets are not considered.
    /// This tells whether adding the extra arguments to a set containing the first ones would introduce a new conflict.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["c", "c"]]).unwrap();
    /// assert!(af.is_in_conflict_with_any_of(&["b"], &["a"]));
    /// assert!(!af.is_in_conflict_with_any_of(&["c"], &["a"]));
    /// ```
    pub fn is_in_conflict_with_any_of<'a, 'b, I, J>(&self, labels: I, extras: J) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        J: IntoIterator<Item = &'b T>,
        T: 'a + 'b,
    {
        self.ids_conflict_between(&self.known_ids_of(labels), &self.known_ids_of(extras))
    }

    /// Returns `true` iff the union of the collections is conflict-free (see [`is_conflict_free`](Self::is_conflict_free)).
    pub fn is_union_conflict_free<'a, C, I>(&self, collections: C) -> bool
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.is_conflict_free(collections.into_iter().flatten())
    }

    /// Returns `true` iff no conflict occurs in the union of the collections,
    /// ignoring the labels that are not arguments of the framework (see [`has_no_conflict_among`](Self::has_no_conflict_among)).
    pub fn has_no_conflict_among_union<'a, C, I>(&self, collections: C) -> bool
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.has_no_conflict_among(collections.into_iter().flatten())
    }

    /// Returns `true` iff the set is admissible, that is conflict-free and defending each of its members.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "a"], ["b", "c"]]).unwrap();
    /// assert!(af.is_admissible(&["a", "c"]));
    /// assert!(!af.is_admissible(&["c"]));
    /// assert!(af.is_admissible(&[]));
    /// ```
    pub fn is_admissible<'a, I>(&self, labels: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.ids_of(labels)
            .is_some_and(|ids| self.ids_are_admissible(&ids))
    }

    /// Returns `true` iff the set is a complete extension, that is an admissible set equal to the set of arguments it defends.
    pub fn is_complete<'a, I>(&self, labels: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.ids_of(labels).is_some_and(|ids| {
            self.ids_are_conflict_free(&ids) && self.characteristic_function_of_ids(&ids) == ids
        })
    }

    /// Returns `true` iff the set is a stable extension, that is a conflict-free set attacking all the other arguments.
    pub fn is_stable<'a, I>(&self, labels: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.ids_of(labels).is_some_and(|ids| {
            self.ids_are_conflict_free(&ids) && self.range_of_ids(&ids).len() == self.n_arguments()
        })
    }

    /// Returns the range of a set of arguments, that is its members and the arguments they attack.
    ///
    /// Labels that are not arguments of the framework are ignored.
    pub fn range_of<'a, I>(&self, labels: I) -> Extension<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.ids_to_labels(&self.range_of_ids(&self.known_ids_of(labels)))
    }
}
