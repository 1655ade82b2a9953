use std::fmt;
use std::str::FromStr;

use super::error::ParseVerdictError;

/// Tri-state outcome of a rule evaluation.
///
/// `Incomplete` means "no definitive answer at this link": a chain walk moves
/// on to the next, more general rule. A well-formed chain never hands
/// `Incomplete` back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[must_use]
pub enum Verdict {
    Pass,
    Fail,
    Incomplete,
}

impl Verdict {
    /// The status code reported to dispatchers (`PASS`, `FAIL`, `INCOMPLETE`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::Incomplete => "INCOMPLETE",
        }
    }

    /// `true` for `Pass` and `Fail`.
    #[must_use]
    pub fn is_definitive(self) -> bool {
        !matches!(self, Verdict::Incomplete)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = ParseVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Verdict::Pass),
            "FAIL" => Ok(Verdict::Fail),
            "INCOMPLETE" => Ok(Verdict::Incomplete),
            other => Err(ParseVerdictError {
                input: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(Verdict::Pass.as_str(), "PASS");
        assert_eq!(Verdict::Fail.as_str(), "FAIL");
        assert_eq!(Verdict::Incomplete.to_string(), "INCOMPLETE");
    }

    #[test]
    fn parse_known_codes() {
        assert_eq!("PASS".parse::<Verdict>().unwrap(), Verdict::Pass);
        assert_eq!("FAIL".parse::<Verdict>().unwrap(), Verdict::Fail);
        assert_eq!(
            "INCOMPLETE".parse::<Verdict>().unwrap(),
            Verdict::Incomplete
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "pass".parse::<Verdict>().unwrap_err();
        assert_eq!(err.input, "pass");
    }

    #[test]
    fn definitive() {
        assert!(Verdict::Pass.is_definitive());
        assert!(Verdict::Fail.is_definitive());
        assert!(!Verdict::Incomplete.is_definitive());
    }
}
