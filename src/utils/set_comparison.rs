use std::collections::BTreeSet;

/// A collection of sets that can be filtered by inclusion.
///
/// Members are compared by content only.
pub trait SetCollection<E>
where
    E: Ord,
{
    /// Returns references to the members, in the iteration order of the collection.
    fn member_refs(&self) -> Vec<&BTreeSet<E>>;

    /// Keeps the members for which the flag at the same index (see [`member_refs`](Self::member_refs)) is `true`.
    fn retain_members(&mut self, keep: &[bool]);
}

impl<E> SetCollection<E> for Vec<BTreeSet<E>>
where
    E: Ord,
{
    fn member_refs(&self) -> Vec<&BTreeSet<E>> {
        self.iter().collect()
    }

    fn retain_members(&mut self, keep: &[bool]) {
        let mut flags = keep.iter();
        self.retain(|_| flags.next().copied().unwrap_or(true));
    }
}

impl<E> SetCollection<E> for BTreeSet<BTreeSet<E>>
where
    E: Ord,
{
    fn member_refs(&self) -> Vec<&BTreeSet<E>> {
        self.iter().collect()
    }

    fn retain_members(&mut self, keep: &[bool]) {
        let mut flags = keep.iter();
        self.retain(|_| flags.next().copied().unwrap_or(true));
    }
}

fn is_strict_subset<E>(smaller: &BTreeSet<E>, larger: &BTreeSet<E>) -> bool
where
    E: Ord,
{
    smaller.len() < larger.len() && smaller.is_subset(larger)
}

/// Removes the members of the collection that strictly include another member.
///
/// Members with the same content as another one are kept, since neither is a strict subset of the other.
///
/// # Example
///
/// ```
/// # use dungaf::utils::remove_non_minimal_members_of;
/// # use std::collections::BTreeSet;
/// let set = |v: &[u8]| v.iter().copied().collect::<BTreeSet<u8>>();
/// let mut sets = vec![set(&[0, 1]), set(&[0]), set(&[0]), set(&[2])];
/// remove_non_minimal_members_of(&mut sets);
/// assert_eq!(vec![set(&[0]), set(&[0]), set(&[2])], sets);
/// ```
pub fn remove_non_minimal_members_of<E, C>(collection: &mut C)
where
    E: Ord,
    C: SetCollection<E>,
{
    let keep = {
        let members = collection.member_refs();
        members
            .iter()
            .map(|x| !members.iter().any(|y| is_strict_subset(y, x)))
            .collect::<Vec<bool>>()
    };
    collection.retain_members(&keep);
}

/// Removes the members of the collection that are strictly included in another member.
///
/// Members with the same content as another one are kept, since neither is a strict subset of the other.
pub fn remove_non_maximal_members_of<E, C>(collection: &mut C)
where
    E: Ord,
    C: SetCollection<E>,
{
    let keep = {
        let members = collection.member_refs();
        members
            .iter()
            .map(|x| !members.iter().any(|y| is_strict_subset(x, y)))
            .collect::<Vec<bool>>()
    };
    collection.retain_members(&keep);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(labels: &[&'static str]) -> BTreeSet<&'static str> {
        labels.iter().copied().collect()
    }

    fn s0() -> BTreeSet<&'static str> {
        set(&["a", "b"])
    }

    fn s1() -> BTreeSet<&'static str> {
        set(&["a", "b", "c"])
    }

    #[test]
    fn test_non_maximal_with_duplicates() {
        let mut sets = vec![s0(), s1(), s1()];
        remove_non_maximal_members_of(&mut sets);
        assert_eq!(vec![s1(), s1()], sets);
    }

    #[test]
    fn test_non_minimal_with_duplicates() {
        let mut sets = vec![s0(), s1(), s0()];
        remove_non_minimal_members_of(&mut sets);
        assert_eq!(vec![s0(), s0()], sets);
    }

    #[test]
    fn test_incomparable_members_are_kept() {
        let mut sets = vec![set(&["a"]), set(&["b"]), set(&["a", "b"])];
        remove_non_maximal_members_of(&mut sets);
        assert_eq!(vec![set(&["a", "b"])], sets);
        let mut sets = vec![set(&["a"]), set(&["b"]), set(&["a", "b"])];
        remove_non_minimal_members_of(&mut sets);
        assert_eq!(vec![set(&["a"]), set(&["b"])], sets);
    }

    #[test]
    fn test_on_set_of_sets() {
        let mut sets = [set(&[]), s0(), s1(), set(&["d"])]
            .into_iter()
            .collect::<BTreeSet<_>>();
        remove_non_maximal_members_of(&mut sets);
        assert_eq!(
            [s1(), set(&["d"])].into_iter().collect::<BTreeSet<_>>(),
            sets
        );
    }

    #[test]
    fn test_empty_collection() {
        let mut sets: Vec<BTreeSet<&str>> = vec![];
        remove_non_minimal_members_of(&mut sets);
        assert!(sets.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let original = vec![set(&["a"]), s0(), s1(), set(&["c"]), set(&["c", "d"])];
        let mut once = original.clone();
        remove_non_minimal_members_of(&mut once);
        let mut twice = once.clone();
        remove_non_minimal_members_of(&mut twice);
        assert_eq!(once, twice);
        let mut once = original;
        remove_non_maximal_members_of(&mut once);
        let mut twice = once.clone();
        remove_non_maximal_members_of(&mut twice);
        assert_eq!(once, twice);
    }
}
