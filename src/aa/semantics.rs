use anyhow::{anyhow, Context, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The semantics handled by the extension engine.
///
/// The short names (given by [AsRef]) follow the usual acronyms used in argumentation solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, EnumIter)]
pub enum Semantics {
    /// The admissible sets
    #[strum(serialize = "AD")]
    Admissible,
    /// The complete semantics
    #[strum(serialize = "CO")]
    Complete,
    /// The grounded semantics
    #[strum(serialize = "GR")]
    Grounded,
    /// The preferred semantics
    #[strum(serialize = "PR")]
    Preferred,
    /// The preferred-sceptical semantics (intersection of the preferred extensions)
    #[strum(serialize = "PS")]
    PreferredSceptical,
    /// The ideal semantics
    #[strum(serialize = "ID")]
    Ideal,
    /// The eager semantics
    #[strum(serialize = "EA")]
    Eager,
    /// The stable semantics
    #[strum(serialize = "ST")]
    Stable,
    /// The semi-stable semantics
    #[strum(serialize = "SST")]
    SemiStable,
}

impl Semantics {
    /// Returns `true` iff this semantics prescribes exactly one extension for every framework.
    ///
    /// ```
    /// # use dungaf::aa::Semantics;
    /// assert!(Semantics::Grounded.is_unique_extension());
    /// assert!(!Semantics::Preferred.is_unique_extension());
    /// ```
    pub fn is_unique_extension(&self) -> bool {
        matches!(
            self,
            Semantics::Grounded
                | Semantics::Ideal
                | Semantics::Eager
                | Semantics::PreferredSceptical
        )
    }

    /// Returns the full name of the semantics, as used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Semantics::Admissible => "admissible",
            Semantics::Complete => "complete",
            Semantics::Grounded => "grounded",
            Semantics::Preferred => "preferred",
            Semantics::PreferredSceptical => "preferred-sceptical",
            Semantics::Ideal => "ideal",
            Semantics::Eager => "eager",
            Semantics::Stable => "stable",
            Semantics::SemiStable => "semi-stable",
        }
    }
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Semantics::iter()
            .find(|s| {
                s.as_ref().eq_ignore_ascii_case(value) || s.name().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| anyhow!(r#"undefined semantics "{}""#, value))
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Query {
    /// Enumerate all the extensions
    EE,
    /// Compute a single extension
    SE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Iterates over all the problem strings (`QUERY-SEMANTICS`) handled by the engine.
    pub fn iter_problem_strings() -> impl Iterator<Item = String> {
        Query::iter().flat_map(|q| {
            Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref()))
        })
    }
}

impl TryFrom<&str> for Query {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "ee" => Ok(Query::EE),
            "se" => Ok(Query::SE),
            "dc" => Ok(Query::DC),
            "ds" => Ok(Query::DS),
            _ => Err(anyhow!(r#"undefined query "{}""#, value)),
        }
    }
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).with_context(context)?;
            let semantics = Semantics::try_from(&problem[1 + n..]).with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}
