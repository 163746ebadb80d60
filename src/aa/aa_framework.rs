use super::{
    extension_cache::ExtensionCache, Argument, ArgumentSet, Extension, FrameworkError, LabelType,
    Semantics,
};
use anyhow::Result;
use std::{
    collections::BTreeSet,
    fmt::{Debug, Display},
};

pub(crate) type IdSet = BTreeSet<usize>;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// The framework is made of a set of arguments and a set of attacks between them.
/// Each endpoint of an attack is always an argument of the framework:
/// adding an attack adds its missing endpoints, and removing an argument removes the attacks it is involved in.
///
/// The framework records the extensions computed for each semantics (see [`extensions_of`](Self::extensions_of)).
/// Any mutation that actually changes the framework makes these records stale.
/// Cloning a framework copies the records as they are.
#[derive(Clone)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks_from: Vec<IdSet>,
    attacks_to: Vec<IdSet>,
    n_attacks: usize,
    extension_cache: ExtensionCache<T>,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use dungaf::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> Default for AAFramework<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            arguments: ArgumentSet::default(),
            attacks_from: vec![],
            attacks_to: vec![],
            n_attacks: 0,
            extension_cache: ExtensionCache::default(),
        }
    }
}

fn read_attack_pairs<T, I, A>(attacks: I) -> Result<Vec<(T, T)>>
where
    T: LabelType,
    I: IntoIterator<Item = A>,
    A: AsRef<[T]>,
{
    attacks
        .into_iter()
        .map(|att| match att.as_ref() {
            [from, to] => Ok((from.clone(), to.clone())),
            other => Err(FrameworkError::MalformedAttack {
                n_endpoints: other.len(),
            }
            .into()),
        })
        .collect()
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework from a set of attacks.
    ///
    /// The arguments of the framework are the endpoints of the attacks.
    /// Each attack must be given by exactly two arguments (the attacker and the attacked one);
    /// if it is not the case, a [`FrameworkError::MalformedAttack`] error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["c", "d"]]).unwrap();
    /// assert_eq!(4, af.n_arguments());
    /// assert_eq!(2, af.n_attacks());
    /// ```
    pub fn new_with_attacks<I, A>(attacks: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[T]>,
    {
        let mut af = Self::default();
        af.add_attacks(attacks)?;
        Ok(af)
    }

    /// Builds an AA framework from a set of arguments and a set of attacks.
    ///
    /// The arguments of the framework are the provided arguments and the endpoints of the attacks.
    /// Attacks must be well-formed (see [`new_with_attacks`](Self::new_with_attacks)).
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_arguments_and_attacks(["e"], [["a", "b"], ["c", "d"]]).unwrap();
    /// assert_eq!(5, af.n_arguments());
    /// ```
    pub fn new_with_arguments_and_attacks<IA, I, A>(arguments: IA, attacks: I) -> Result<Self>
    where
        IA: IntoIterator<Item = T>,
        I: IntoIterator<Item = A>,
        A: AsRef<[T]>,
    {
        let pairs = read_attack_pairs(attacks)?;
        let mut af = Self::default();
        af.add_arguments(arguments);
        af.add_attack_pairs(pairs);
        Ok(af)
    }

    /// Adds arguments to this framework.
    ///
    /// Returns `true` iff at least one argument was not already in the framework.
    pub fn add_arguments<I>(&mut self, labels: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut changed = false;
        for label in labels {
            changed |= self.new_argument(label).1;
        }
        if changed {
            self.extension_cache.invalidate();
        }
        changed
    }

    fn new_argument(&mut self, label: T) -> (usize, bool) {
        let (id, is_new) = self.arguments.new_argument(label);
        if is_new {
            self.attacks_from.push(IdSet::new());
            self.attacks_to.push(IdSet::new());
        }
        (id, is_new)
    }

    /// Adds attacks to this framework.
    ///
    /// The endpoints of the attacks that are not in the framework are added as new arguments.
    /// Returns `true` iff the framework was changed.
    ///
    /// Each attack must be given by exactly two arguments.
    /// If an attack is malformed, a [`FrameworkError::MalformedAttack`] error is returned and the framework is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let mut af = AAFramework::default();
    /// assert!(af.add_attacks([["a", "b"]]).unwrap());
    /// assert!(!af.add_attacks([["a", "b"]]).unwrap());
    /// assert!(af.add_attacks([vec!["a"], vec!["b", "a"]]).is_err());
    /// assert_eq!(1, af.n_attacks());
    /// ```
    pub fn add_attacks<I, A>(&mut self, attacks: I) -> Result<bool>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[T]>,
    {
        let pairs = read_attack_pairs(attacks)?;
        Ok(self.add_attack_pairs(pairs))
    }

    fn add_attack_pairs(&mut self, pairs: Vec<(T, T)>) -> bool {
        let mut changed = false;
        for (from, to) in pairs {
            let (from_id, from_is_new) = self.new_argument(from);
            let (to_id, to_is_new) = self.new_argument(to);
            changed |= from_is_new || to_is_new;
            if self.attacks_from[from_id].insert(to_id) {
                self.attacks_to[to_id].insert(from_id);
                self.n_attacks += 1;
                changed = true;
            }
        }
        if changed {
            self.extension_cache.invalidate();
        }
        changed
    }

    /// Removes arguments from this framework.
    ///
    /// The attacks involving the removed arguments are removed too.
    /// The other endpoints of these attacks are kept in the framework.
    /// Labels that do not refer to arguments of the framework are ignored.
    ///
    /// Returns `true` iff at least one argument was removed.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let mut af = AAFramework::new_with_attacks([["a", "b"], ["c", "d"]]).unwrap();
    /// assert!(af.remove_arguments(["a"]));
    /// assert!(!af.remove_arguments(["a"]));
    /// assert_eq!(3, af.n_arguments());
    /// assert_eq!(1, af.n_attacks());
    /// ```
    pub fn remove_arguments<I>(&mut self, labels: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut changed = false;
        for label in labels {
            if let Some(removed) = self.arguments.remove_argument(&label) {
                self.remove_attacks_involving(removed.id());
                changed = true;
            }
        }
        if changed {
            if self.arguments.is_sparse() {
                self.compact_ids();
            }
            self.extension_cache.invalidate();
        }
        changed
    }

    fn compact_ids(&mut self) {
        let mapping = self.arguments.compact();
        let remap = |ids: &IdSet| -> IdSet { ids.iter().filter_map(|i| mapping[*i]).collect() };
        let mut attacks_from = Vec::with_capacity(self.arguments.id_bound());
        let mut attacks_to = Vec::with_capacity(self.arguments.id_bound());
        for (old_id, new_id) in mapping.iter().enumerate() {
            if new_id.is_some() {
                attacks_from.push(remap(&self.attacks_from[old_id]));
                attacks_to.push(remap(&self.attacks_to[old_id]));
            }
        }
        self.attacks_from = attacks_from;
        self.attacks_to = attacks_to;
    }

    fn remove_attacks_involving(&mut self, id: usize) {
        let attacked = std::mem::take(&mut self.attacks_from[id]);
        let attackers = std::mem::take(&mut self.attacks_to[id]);
        for other in attacked.iter().filter(|other| **other != id) {
            self.attacks_to[*other].remove(&id);
        }
        for other in attackers.iter().filter(|other| **other != id) {
            self.attacks_from[*other].remove(&id);
        }
        self.n_attacks -= attacked.len() + attackers.iter().filter(|o| **o != id).count();
    }

    /// Removes attacks from this framework.
    ///
    /// The arguments are left untouched, including the endpoints of the removed attacks.
    /// Attacks that are not in the framework are ignored.
    ///
    /// Returns `true` iff at least one attack was removed.
    /// If an attack is malformed, a [`FrameworkError::MalformedAttack`] error is returned and the framework is left untouched.
    pub fn remove_attacks<I, A>(&mut self, attacks: I) -> Result<bool>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[T]>,
    {
        let pairs = read_attack_pairs(attacks)?;
        Ok(self.remove_attack_pairs(&pairs))
    }

    fn remove_attack_pairs(&mut self, pairs: &[(T, T)]) -> bool {
        let mut changed = false;
        for (from, to) in pairs {
            let ids = self
                .arguments
                .get_argument_index(from)
                .zip(self.arguments.get_argument_index(to));
            if let Some((from_id, to_id)) = ids {
                if self.attacks_from[from_id].remove(&to_id) {
                    self.attacks_to[to_id].remove(&from_id);
                    self.n_attacks -= 1;
                    changed = true;
                }
            }
        }
        if changed {
            self.extension_cache.invalidate();
        }
        changed
    }

    /// Adds the arguments and the attacks of another framework to this one.
    ///
    /// Returns `true` iff this framework was changed.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let mut af = AAFramework::new_with_attacks([["a", "b"]]).unwrap();
    /// let other = AAFramework::new_with_attacks([["c", "c"]]).unwrap();
    /// assert!(af.ensure_subsumes(&other));
    /// assert!(!af.ensure_subsumes(&other));
    /// assert!(af.subsumes(&other));
    /// ```
    pub fn ensure_subsumes(&mut self, other: &AAFramework<T>) -> bool {
        let args_changed = self.add_arguments(other.argument_set().iter().map(|a| a.label().clone()));
        let atts_changed = self.add_attack_pairs(other.attack_pairs());
        args_changed || atts_changed
    }

    /// Removes from this framework the arguments and the attacks it shares with another framework.
    ///
    /// Returns `true` iff this framework was changed.
    pub fn ensure_disjoint_with(&mut self, other: &AAFramework<T>) -> bool {
        let atts_changed = self.remove_attack_pairs(&other.attack_pairs());
        let args_changed =
            self.remove_arguments(other.argument_set().iter().map(|a| a.label().clone()));
        atts_changed || args_changed
    }

    /// Returns `true` iff the arguments and the attacks of another framework all belong to this one.
    pub fn subsumes(&self, other: &AAFramework<T>) -> bool {
        other
            .argument_set()
            .iter()
            .all(|a| self.arguments.contains(a.label()))
            && other
                .iter_attacks()
                .all(|att| self.has_attack(att.attacker().label(), att.attacked().label()))
    }

    /// Returns `true` iff this framework and another one share no argument (and thus no attack).
    pub fn is_disjoint_with(&self, other: &AAFramework<T>) -> bool {
        other
            .argument_set()
            .iter()
            .all(|a| !self.arguments.contains(a.label()))
    }

    /// Removes all the arguments, all the attacks and all the recorded extensions.
    pub fn clear(&mut self) {
        self.arguments = ArgumentSet::default();
        self.attacks_from.clear();
        self.attacks_to.clear();
        self.n_attacks = 0;
        self.extension_cache.clear();
    }

    /// Returns `true` iff there is an attack between these arguments.
    pub fn has_attack(&self, from: &T, to: &T) -> bool {
        self.arguments
            .get_argument_index(from)
            .zip(self.arguments.get_argument_index(to))
            .is_some_and(|(f, t)| self.attacks_from[f].contains(&t))
    }

    /// Returns a snapshot of the arguments of this framework.
    pub fn arguments(&self) -> Extension<T> {
        self.arguments.iter().map(|a| a.label().clone()).collect()
    }

    /// Returns a snapshot of the attacks of this framework, as (attacker, attacked) couples.
    pub fn attacks(&self) -> BTreeSet<(T, T)> {
        self.attack_pairs().into_iter().collect()
    }

    fn attack_pairs(&self) -> Vec<(T, T)> {
        self.iter_attacks()
            .map(|att| (att.attacker().label().clone(), att.attacked().label().clone()))
            .collect()
    }

    /// Returns `true` iff extensions were computed for this semantics since the last change of the framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::{AAFramework, Semantics};
    /// let mut af = AAFramework::new_with_attacks([["a", "b"]]).unwrap();
    /// assert!(!af.records_extensions_of(Semantics::Grounded));
    /// af.grounded_extension();
    /// assert!(af.records_extensions_of(Semantics::Grounded));
    /// af.add_arguments(["c"]);
    /// assert!(!af.records_extensions_of(Semantics::Grounded));
    /// ```
    pub fn records_extensions_of(&self, semantics: Semantics) -> bool {
        self.extension_cache.records(semantics)
    }

    pub(crate) fn extension_cache(&self) -> &ExtensionCache<T> {
        &self.extension_cache
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator to the attacks.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.arguments.iter().flat_map(move |a| self.iter_attacks_from(a))
    }

    /// Provides an iterator to the attacks that have the given argument as attacker.
    pub fn iter_attacks_from<'a>(
        &'a self,
        arg: &'a Argument<T>,
    ) -> impl Iterator<Item = Attack<'a, T>> + 'a {
        self.attacks_from[arg.id()]
            .iter()
            .map(move |to| Attack(arg, self.arguments.get_argument_by_id(*to)))
    }

    /// Provides an iterator to the attacks that have the given argument as attacked.
    pub fn iter_attacks_to<'a>(
        &'a self,
        arg: &'a Argument<T>,
    ) -> impl Iterator<Item = Attack<'a, T>> + 'a {
        self.attacks_to[arg.id()]
            .iter()
            .map(move |from| Attack(self.arguments.get_argument_by_id(*from), arg))
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.n_attacks
    }

    pub(crate) fn argument_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.arguments.iter().map(|a| a.id())
    }

    pub(crate) fn id_bound(&self) -> usize {
        self.arguments.id_bound()
    }

    pub(crate) fn attackers_of_id(&self, id: usize) -> &IdSet {
        &self.attacks_to[id]
    }

    pub(crate) fn attacked_by_id(&self, id: usize) -> &IdSet {
        &self.attacks_from[id]
    }

    pub(crate) fn label_of_id(&self, id: usize) -> &T {
        self.arguments.get_argument_by_id(id).label()
    }

    pub(crate) fn ids_to_labels(&self, ids: &IdSet) -> Extension<T> {
        ids.iter().map(|id| self.label_of_id(*id).clone()).collect()
    }
}

impl<T> PartialEq for AAFramework<T>
where
    T: LabelType,
{
    fn eq(&self, other: &Self) -> bool {
        self.n_arguments() == other.n_arguments()
            && self.n_attacks() == other.n_attacks()
            && self.subsumes(other)
    }
}

impl<T> Eq for AAFramework<T> where T: LabelType {}

impl<T> Display for AAFramework<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args = self
            .arguments()
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>();
        let attacks = self
            .attacks()
            .iter()
            .map(|(a, b)| format!("({},{})", a, b))
            .collect::<Vec<String>>();
        write!(f, "{{{}}} {{{}}}", args.join(","), attacks.join(","))
    }
}

impl<T> Debug for AAFramework<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AAFramework{}", self)
    }
}
