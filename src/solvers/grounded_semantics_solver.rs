use super::SingleExtensionComputer;
use crate::{
    aa::{AAFramework, Extension, LabelType},
    utils,
};

/// A solver used to compute the grounded extension.
///
/// The (unique) grounded extension is the minimal complete extension (see [CompleteSemanticsSolver](crate::solvers::CompleteSemanticsSolver) for more information).
/// It is the least fixpoint of the characteristic function, and is computed in time polynomial in the size of the framework.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::{AAFramework, LabelType};
    /// # use dungaf::solvers::{SingleExtensionComputer, GroundedSemanticsSolver};
    /// fn compute_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let solver = GroundedSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension();
    ///     println!("found the grounded extension: {:?}", ext);
    /// }
    /// # compute_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> SingleExtensionComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&self) -> Extension<T> {
        self.af.ids_to_labels(&utils::grounded_extension(self.af))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn grounded(instance: &str) -> Vec<String> {
        let af = AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        GroundedSemanticsSolver::new(&af)
            .compute_one_extension()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_independent_attacks() {
        let instance = r#"
        arg(a).
        arg(b).
        arg(c).
        arg(d).
        arg(e).
        arg(f).
        att(a,b).
        att(c,d).
        att(e,f).
        "#;
        assert_eq!(vec!["a", "c", "e"], grounded(instance));
    }

    #[test]
    fn test_mutual_attack() {
        let instance = r#"
        arg(a).
        arg(b).
        arg(c).
        att(a,b).
        att(b,a).
        att(b,c).
        "#;
        assert_eq!(vec![] as Vec<String>, grounded(instance));
    }

    #[test]
    fn test_empty_framework() {
        assert_eq!(vec![] as Vec<String>, grounded(""));
    }
}
