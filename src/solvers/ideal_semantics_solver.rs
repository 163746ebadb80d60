use super::{preferred_semantics_solver::intersection_of, SingleExtensionComputer};
use crate::aa::{AAFramework, Extension, ExtensionSet, LabelType};

/// A solver used to compute the ideal extension.
///
/// The ideal extension is the maximal admissible set included in all the preferred extensions.
/// Since the union of such admissible sets is itself admissible, it is computed as this union.
///
/// # Example
///
/// ```
/// # use dungaf::aa::AAFramework;
/// # use dungaf::solvers::{IdealSemanticsSolver, SingleExtensionComputer};
/// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "a"], ["b", "b"]]).unwrap();
/// let ideal = IdealSemanticsSolver::new(&af).compute_one_extension();
/// assert_eq!(vec!["a"], ideal.into_iter().collect::<Vec<_>>());
/// ```
pub struct IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the ideal semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> SingleExtensionComputer<T> for IdealSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&self) -> Extension<T> {
        maximal_admissible_subset_of_all(self.af, &self.af.preferred_extensions())
    }
}

/// A solver used to compute the eager extension.
///
/// The eager extension is the maximal admissible set included in all the semi-stable extensions.
/// Since the semi-stable extensions are preferred extensions, the eager extension always includes the ideal extension.
pub struct EagerSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> EagerSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the eager semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> SingleExtensionComputer<T> for EagerSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&self) -> Extension<T> {
        maximal_admissible_subset_of_all(self.af, &self.af.semi_stable_extensions())
    }
}

// The admissible sets included in a conflict-free set are compatible, so their union is admissible.
fn maximal_admissible_subset_of_all<T>(
    af: &AAFramework<T>,
    extensions: &ExtensionSet<T>,
) -> Extension<T>
where
    T: LabelType,
{
    let bound = intersection_of(extensions).unwrap_or_else(|| af.arguments());
    af.admissible_sets()
        .into_iter()
        .filter(|s| s.is_subset(&bound))
        .fold(Extension::new(), |mut acc, s| {
            acc.extend(s);
            acc
        })
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
    fn test_ideal_larger_than_grounded() {
        let af = read(
            r#"
        arg(a).
        arg(b).
        att(a,b).
        att(b,a).
        att(b,b).
        "#,
        );
        assert!(af.grounded_extension().is_empty());
        assert_eq!(
            vec!["a".to_string()],
            labels(IdealSemanticsSolver::new(&af).compute_one_extension())
        );
        assert_eq!(
            vec!["a".to_string()],
            labels(EagerSemanticsSolver::new(&af).compute_one_extension())
        );
    }

    #[test]
    fn test_ideal_smaller_than_preferred_sceptical() {
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
        assert_eq!(
            vec!["d".to_string()],
            labels(af.preferred_sceptical_extension())
        );
        assert!(IdealSemanticsSolver::new(&af)
            .compute_one_extension()
            .is_empty());
    }

    #[test]
    fn test_eager_differs_from_ideal() {
        let af = read(
            r#"
        arg(a).
        arg(b).
        arg(c).
        att(a,b).
        att(b,a).
        att(b,c).
        att(c,c).
        "#,
        );
        assert!(IdealSemanticsSolver::new(&af)
            .compute_one_extension()
            .is_empty());
        assert_eq!(
            vec!["b".to_string()],
            labels(EagerSemanticsSolver::new(&af).compute_one_extension())
        );
    }
}
