use super::{ExtensionSetComputer, SingleExtensionComputer};
use crate::{
    aa::{AAFramework, Extension, ExtensionSet, LabelType},
    utils,
};

/// A solver used to compute the preferred extensions.
///
/// The preferred extensions are the admissible sets that are maximal with respect to set inclusion.
/// They are selected among the admissible sets recorded by the framework.
///
/// # Example
///
/// ```
/// # use dungaf::aa::AAFramework;
/// # use dungaf::solvers::{ExtensionSetComputer, PreferredSemanticsSolver};
/// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "a"], ["b", "c"]]).unwrap();
/// assert_eq!(2, PreferredSemanticsSolver::new(&af).compute_extensions().len());
/// ```
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the preferred semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionSetComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&self) -> ExtensionSet<T> {
        let mut extensions = self.af.admissible_sets();
        utils::remove_non_maximal_members_of(&mut extensions);
        extensions
    }
}

/// A solver used to compute the preferred-sceptical extension.
///
/// This extension is the intersection of all the preferred extensions.
pub struct PreferredScepticalSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> PreferredScepticalSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the preferred-sceptical semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> SingleExtensionComputer<T> for PreferredScepticalSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&self) -> Extension<T> {
        intersection_of(&self.af.preferred_extensions()).unwrap_or_else(|| self.af.arguments())
    }
}

/// Returns the intersection of the extensions, or `None` if there is no extension.
pub(crate) fn intersection_of<T>(extensions: &ExtensionSet<T>) -> Option<Extension<T>>
where
    T: LabelType,
{
    let mut it = extensions.iter();
    let first = it.next()?.clone();
    Some(it.fold(first, |acc, e| acc.intersection(e).cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn read(instance: &str) -> AAFramework<String> {
        AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap()
    }

    fn labels(ext: Extension<String>) -> Vec<String> {
        ext.into_iter().collect()
    }

    #[test]
    fn test_preferred_extensions() {
        let af = read(
            r#"
        arg(a).
        arg(b).
        arg(c).
        arg(d).
        att(a,b).
        att(b,a).
        att(a,c).
        att(b,c).
        att(c,d).
        "#,
        );
        let extensions = PreferredSemanticsSolver::new(&af)
            .compute_extensions()
            .into_iter()
            .map(labels)
            .collect::<Vec<Vec<String>>>();
        assert_eq!(
            vec![
                vec!["a".to_string(), "d".to_string()],
                vec!["b".to_string(), "d".to_string()]
            ],
            extensions
        );
        assert_eq!(
            vec!["d".to_string()],
            labels(PreferredScepticalSemanticsSolver::new(&af).compute_one_extension())
        );
    }

    #[test]
    fn test_preferred_empty_extension() {
        let af = read(
            r#"
        arg(a).
        att(a,a).
        "#,
        );
        let extensions = PreferredSemanticsSolver::new(&af).compute_extensions();
        assert_eq!(1, extensions.len());
        assert!(extensions.iter().all(|e| e.is_empty()));
    }

    #[test]
    fn test_intersection_of() {
        let sets = [vec!["a", "b", "c"], vec!["b", "c"], vec!["c", "d"]]
            .into_iter()
            .map(|v| v.into_iter().collect::<Extension<&str>>())
            .collect::<ExtensionSet<&str>>();
        assert_eq!(Some(Extension::from(["c"])), intersection_of(&sets));
        assert_eq!(None, intersection_of(&ExtensionSet::<&str>::new()));
    }
}
