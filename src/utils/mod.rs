//! Miscellaneous components used in the library.

mod grounded_extension_computer;
pub(crate) use grounded_extension_computer::grounded_extension;

mod random_framework_generator;
pub use random_framework_generator::RandomFrameworkGenerator;

mod set_comparison;
pub use set_comparison::remove_non_maximal_members_of;
pub use set_comparison::remove_non_minimal_members_of;
pub use set_comparison::SetCollection;
