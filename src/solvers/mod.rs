//! Solvers computing the extensions of the frameworks under the supported semantics.
//!
//! Each solver may be used on its own, but the usual entry points are the methods of [`AAFramework`](crate::aa::AAFramework)
//! (for instance [`preferred_extensions`](crate::aa::AAFramework::preferred_extensions)),
//! which record the computed extensions until the framework is changed.

mod admissible_semantics_solver;
pub use admissible_semantics_solver::AdmissibleSemanticsSolver;

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod defence_sets_computer;
pub use defence_sets_computer::DefenceSetsComputer;

mod extensions;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod ideal_semantics_solver;
pub use ideal_semantics_solver::EagerSemanticsSolver;
pub use ideal_semantics_solver::IdealSemanticsSolver;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredScepticalSemanticsSolver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod semi_stable_semantics_solver;
pub use semi_stable_semantics_solver::SemiStableSemanticsSolver;

mod specs;
pub use specs::ExtensionSetComputer;
pub use specs::SingleExtensionComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;
