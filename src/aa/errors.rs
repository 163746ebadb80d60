use thiserror::Error;

/// The errors raised by the operations on frameworks and by the random framework generator.
///
/// These errors are returned wrapped into [anyhow::Error] values;
/// callers may use [anyhow::Error::downcast_ref] to recover the kind of the error.
///
/// In both cases, the operation that raised the error leaves the state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameworkError {
    /// An attack was not given as exactly two endpoints.
    #[error("an attack must be made of exactly two arguments, got {n_endpoints}")]
    MalformedAttack {
        /// The number of endpoints of the rejected attack.
        n_endpoints: usize,
    },
    /// The bounds given to the random framework generator cannot be satisfied.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            "an attack must be made of exactly two arguments, got 3",
            FrameworkError::MalformedAttack { n_endpoints: 3 }.to_string()
        );
        assert_eq!(
            "invalid configuration: min_args > max_args",
            FrameworkError::InvalidConfiguration("min_args > max_args".to_string()).to_string()
        );
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let err: anyhow::Error = FrameworkError::MalformedAttack { n_endpoints: 1 }.into();
        assert_eq!(
            Some(&FrameworkError::MalformedAttack { n_endpoints: 1 }),
            err.downcast_ref::<FrameworkError>()
        );
    }
}
