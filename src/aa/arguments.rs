use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
///
/// Labels must be totally ordered, since extensions are stored as ordered sets of labels.
pub trait LabelType: Clone + Debug + Display + Eq + Hash + Ord {}
impl<T: Clone + Debug + Display + Eq + Hash + Ord> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use dungaf::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// Arguments may be removed.
/// The id of a removed argument is not given again until the set is [compacted](Self::compact),
/// even if an argument with the same label is added later.
#[derive(Clone)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Option<Argument<T>>>,
    label_to_id: HashMap<T, usize>,
    n_removed: usize,
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            arguments: vec![],
            label_to_id: HashMap::new(),
            n_removed: 0,
        }
    }
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c", "a"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
            n_removed: 0,
        };
        labels.iter().for_each(|l| {
            argument_set.new_argument(l.clone());
        });
        argument_set
    }

    /// Adds a new argument to this set.
    ///
    /// The id of the argument is returned, along with a boolean set to `true` iff the argument was not already in the set.
    /// In an argument with the same label is already defined, no argument is added.
    pub fn new_argument(&mut self, label: T) -> (usize, bool) {
        if let Some(id) = self.label_to_id.get(&label) {
            return (*id, false);
        }
        let id = self.arguments.len();
        self.label_to_id.insert(label.clone(), id);
        self.arguments.push(Some(Argument { id, label }));
        (id, true)
    }

    /// Removes an argument from this set.
    ///
    /// The removed argument is returned, or `None` if no argument has this label.
    pub fn remove_argument(&mut self, label: &T) -> Option<Argument<T>> {
        let id = self.label_to_id.remove(label)?;
        self.n_removed += 1;
        self.arguments[id].take()
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len() - self.n_removed
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.len() == self.n_removed
    }

    /// Returns an upper bound (exclusive) for the ids of the arguments in this set.
    ///
    /// Some ids under this bound may refer to removed arguments.
    pub fn id_bound(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the unique id associated to an argument label, if any.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(Some(1), arguments.get_argument_index(&"b"));
    /// assert_eq!(None, arguments.get_argument_index(&"d"));
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Option<usize> {
        self.label_to_id.get(label).copied()
    }

    /// Returns `true` iff an argument has this label.
    pub fn contains(&self, label: &T) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Returns the argument associated to an argument label, if any.
    pub fn get_argument(&self, label: &T) -> Option<&Argument<T>> {
        self.label_to_id
            .get(label)
            .and_then(|i| self.arguments[*i].as_ref())
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        self.arguments[id].as_ref().unwrap()
    }

    /// Returns `true` iff the removed arguments outnumber the remaining ones.
    pub fn is_sparse(&self) -> bool {
        self.n_removed > self.len()
    }

    /// Gives consecutive ids to the remaining arguments, keeping their order.
    ///
    /// The returned vector maps each former id to the new one, or to `None` for removed arguments.
    pub fn compact(&mut self) -> Vec<Option<usize>> {
        let mut mapping = Vec::with_capacity(self.arguments.len());
        let mut compacted = Vec::with_capacity(self.len());
        for arg in self.arguments.drain(..) {
            match arg {
                Some(a) => {
                    let id = compacted.len();
                    mapping.push(Some(id));
                    self.label_to_id.insert(a.label.clone(), id);
                    compacted.push(Some(Argument { id, label: a.label }));
                }
                None => mapping.push(None),
            }
        }
        self.arguments = compacted;
        self.n_removed = 0;
        mapping
    }

    /// Returns an iterator to the arguments.
    ///
    /// Arguments are given in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter().filter_map(|o| o.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(3, args.len());
        assert!(!args.is_empty());
        for (i, a) in args.iter().enumerate() {
            assert_eq!(i, a.id());
            assert_eq!(&arg_labels[i], a.label());
        }
    }

    #[test]
    fn test_new_with_empty_labels() {
        let args = ArgumentSet::new_with_labels(&[] as &[String]);
        assert_eq!(0, args.len());
        assert!(args.is_empty());
    }

    #[test]
    fn test_new_repeated_labels() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "a"]);
        assert_eq!(2, args.len());
        assert_eq!(2, args.id_bound());
    }

    #[test]
    fn test_new_argument_returns_id() {
        let mut args = ArgumentSet::new_with_labels(&["a", "b"]);
        assert_eq!((2, true), args.new_argument("c"));
        assert_eq!((2, false), args.new_argument("c"));
        assert_eq!((0, false), args.new_argument("a"));
    }

    #[test]
    fn test_remove_argument() {
        let mut args = ArgumentSet::new_with_labels(&["a", "b"]);
        assert_eq!("b", *args.remove_argument(&"b").unwrap().label());
        assert!(args.remove_argument(&"b").is_none());
        assert_eq!(1, args.len());
        assert!(!args.contains(&"b"));
    }

    #[test]
    fn test_removed_id_is_not_reused() {
        let mut args = ArgumentSet::new_with_labels(&["a", "b"]);
        args.remove_argument(&"b");
        assert_eq!((2, true), args.new_argument("b"));
        assert_eq!(3, args.id_bound());
        assert_eq!(vec!["a", "b"], args.iter().map(|a| *a.label()).collect::<Vec<_>>());
    }

    #[test]
    fn test_compact() {
        let mut args = ArgumentSet::new_with_labels(&["a", "b", "c", "d"]);
        args.remove_argument(&"a");
        args.remove_argument(&"c");
        assert!(!args.is_sparse());
        args.remove_argument(&"d");
        assert!(args.is_sparse());
        assert_eq!(vec![None, Some(0), None, None], args.compact());
        assert!(!args.is_sparse());
        assert_eq!(1, args.id_bound());
        assert_eq!(Some(0), args.get_argument_index(&"b"));
        assert_eq!(0, args.get_argument_by_id(0).id());
        assert_eq!((1, true), args.new_argument("a"));
    }
}
