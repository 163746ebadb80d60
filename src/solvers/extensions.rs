use super::{
    AdmissibleSemanticsSolver, CompleteSemanticsSolver, DefenceSetsComputer, EagerSemanticsSolver,
    ExtensionSetComputer, GroundedSemanticsSolver, IdealSemanticsSolver,
    PreferredScepticalSemanticsSolver, PreferredSemanticsSolver, SemiStableSemanticsSolver,
    SingleExtensionComputer, StableSemanticsSolver,
};
use crate::aa::{AAFramework, CachedExtensions, Extension, ExtensionSet, LabelType, Semantics};
use anyhow::{anyhow, Result};
use log::debug;

impl<T> AAFramework<T>
where
    T: LabelType,
{
    fn cached_unique_extension<F>(&self, semantics: Semantics, compute: F) -> Extension<T>
    where
        F: FnOnce(&Self) -> Extension<T>,
    {
        if let Some(CachedExtensions::Unique(ext)) = self.extension_cache().get(semantics) {
            debug!("using the recorded {} extension", semantics.name());
            return ext;
        }
        debug!("computing the {} extension", semantics.name());
        let ext = compute(self);
        debug!("the {} extension has {} arguments", semantics.name(), ext.len());
        self.extension_cache()
            .store(semantics, CachedExtensions::Unique(ext.clone()));
        ext
    }

    fn cached_extension_set<F>(&self, semantics: Semantics, compute: F) -> ExtensionSet<T>
    where
        F: FnOnce(&Self) -> ExtensionSet<T>,
    {
        if let Some(CachedExtensions::Multiple(exts)) = self.extension_cache().get(semantics) {
            debug!("using the recorded {} extensions", semantics.name());
            return exts;
        }
        debug!("computing the {} extensions", semantics.name());
        let exts = compute(self);
        debug!("found {} {} extensions", exts.len(), semantics.name());
        self.extension_cache()
            .store(semantics, CachedExtensions::Multiple(exts.clone()));
        exts
    }

    /// Returns the grounded extension of this framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["c", "d"], ["e", "f"]]).unwrap();
    /// assert_eq!(vec!["a", "c", "e"], af.grounded_extension().into_iter().collect::<Vec<_>>());
    /// ```
    pub fn grounded_extension(&self) -> Extension<T> {
        self.cached_unique_extension(Semantics::Grounded, |af| {
            GroundedSemanticsSolver::new(af).compute_one_extension()
        })
    }

    /// Returns the defence-sets around an argument, that is the minimal admissible sets containing it.
    ///
    /// If the argument is not in the framework, an empty set is returned.
    /// See [`DefenceSetsComputer`] for more information.
    pub fn defence_sets_around(&self, arg: &T) -> ExtensionSet<T> {
        DefenceSetsComputer::new(self).defence_sets_around(arg)
    }

    /// Returns all the admissible sets of this framework, including the empty set.
    pub fn admissible_sets(&self) -> ExtensionSet<T> {
        self.cached_extension_set(Semantics::Admissible, |af| {
            AdmissibleSemanticsSolver::new(af).compute_extensions()
        })
    }

    /// Returns `true` iff each of the given sets is an admissible set of this framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::AAFramework;
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "c"]]).unwrap();
    /// assert!(af.admissible_sets_contain([vec!["a"], vec!["a", "c"]]));
    /// assert!(!af.admissible_sets_contain([vec!["a"], vec!["c"]]));
    /// ```
    pub fn admissible_sets_contain<C, I>(&self, sets: C) -> bool
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let admissible_sets = self.admissible_sets();
        sets.into_iter()
            .all(|s| admissible_sets.contains(&s.into_iter().collect::<Extension<T>>()))
    }

    /// Returns the preferred extensions of this framework.
    pub fn preferred_extensions(&self) -> ExtensionSet<T> {
        self.cached_extension_set(Semantics::Preferred, |af| {
            PreferredSemanticsSolver::new(af).compute_extensions()
        })
    }

    /// Returns the preferred-sceptical extension of this framework, that is the intersection of its preferred extensions.
    pub fn preferred_sceptical_extension(&self) -> Extension<T> {
        self.cached_unique_extension(Semantics::PreferredSceptical, |af| {
            PreferredScepticalSemanticsSolver::new(af).compute_one_extension()
        })
    }

    /// Returns the stable extensions of this framework.
    ///
    /// The result may be empty.
    pub fn stable_extensions(&self) -> ExtensionSet<T> {
        self.cached_extension_set(Semantics::Stable, |af| {
            StableSemanticsSolver::new(af).compute_extensions()
        })
    }

    /// Returns the complete extensions of this framework.
    pub fn complete_extensions(&self) -> ExtensionSet<T> {
        self.cached_extension_set(Semantics::Complete, |af| {
            CompleteSemanticsSolver::new(af).compute_extensions()
        })
    }

    /// Returns the semi-stable extensions of this framework.
    pub fn semi_stable_extensions(&self) -> ExtensionSet<T> {
        self.cached_extension_set(Semantics::SemiStable, |af| {
            SemiStableSemanticsSolver::new(af).compute_extensions()
        })
    }

    /// Returns the ideal extension of this framework.
    pub fn ideal_extension(&self) -> Extension<T> {
        self.cached_unique_extension(Semantics::Ideal, |af| {
            IdealSemanticsSolver::new(af).compute_one_extension()
        })
    }

    /// Returns the eager extension of this framework.
    pub fn eager_extension(&self) -> Extension<T> {
        self.cached_unique_extension(Semantics::Eager, |af| {
            EagerSemanticsSolver::new(af).compute_one_extension()
        })
    }

    /// Returns the extensions of this framework under the given semantics.
    ///
    /// For the semantics that prescribe a single extension, a singleton set is returned.
    /// For [`Semantics::Admissible`], the admissible sets are returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::{AAFramework, Semantics};
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "a"]]).unwrap();
    /// assert_eq!(1, af.extensions_of(Semantics::Grounded).len());
    /// assert_eq!(2, af.extensions_of(Semantics::Preferred).len());
    /// ```
    pub fn extensions_of(&self, semantics: Semantics) -> ExtensionSet<T> {
        match semantics {
            Semantics::Admissible => self.admissible_sets(),
            Semantics::Complete => self.complete_extensions(),
            Semantics::Grounded => ExtensionSet::from([self.grounded_extension()]),
            Semantics::Preferred => self.preferred_extensions(),
            Semantics::PreferredSceptical => {
                ExtensionSet::from([self.preferred_sceptical_extension()])
            }
            Semantics::Ideal => ExtensionSet::from([self.ideal_extension()]),
            Semantics::Eager => ExtensionSet::from([self.eager_extension()]),
            Semantics::Stable => self.stable_extensions(),
            Semantics::SemiStable => self.semi_stable_extensions(),
        }
    }

    /// Returns one extension of this framework under the given semantics, or `None` if there is no extension.
    ///
    /// When several extensions exist, the smallest one in the order of [`ExtensionSet`] is returned.
    pub fn one_extension_of(&self, semantics: Semantics) -> Option<Extension<T>> {
        self.extensions_of(semantics).into_iter().next()
    }

    fn check_argument(&self, arg: &T) -> Result<()> {
        if self.argument_set().contains(arg) {
            Ok(())
        } else {
            Err(anyhow!("no such argument: {}", arg))
        }
    }

    /// Returns `true` iff the argument belongs to at least one extension under the given semantics.
    ///
    /// An error is returned if the argument is not in the framework.
    pub fn is_credulously_accepted(&self, semantics: Semantics, arg: &T) -> Result<bool> {
        self.check_argument(arg)?;
        Ok(self
            .extensions_of(semantics)
            .iter()
            .any(|ext| ext.contains(arg)))
    }

    /// Returns `true` iff the argument belongs to all the extensions under the given semantics.
    ///
    /// If there is no extension, every argument is sceptically accepted.
    /// An error is returned if the argument is not in the framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::{AAFramework, Semantics};
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "a"], ["c", "c"]]).unwrap();
    /// assert!(af.is_credulously_accepted(Semantics::Preferred, &"a").unwrap());
    /// assert!(!af.is_skeptically_accepted(Semantics::Preferred, &"a").unwrap());
    /// assert!(af.is_skeptically_accepted(Semantics::Stable, &"c").unwrap());
    /// assert!(af.is_skeptically_accepted(Semantics::Stable, &"z").is_err());
    /// ```
    pub fn is_skeptically_accepted(&self, semantics: Semantics, arg: &T) -> Result<bool> {
        self.check_argument(arg)?;
        Ok(self
            .extensions_of(semantics)
            .iter()
            .all(|ext| ext.contains(arg)))
    }
}
