use std::fmt;
use std::str::FromStr;

use crate::error::SegmentationError;

/// Which external matcher produced a set of detections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMethod {
    #[default]
    Correlation,
    Mfcc,
    CrossSimilarity,
}

impl MatchMethod {
    pub const ALL: [MatchMethod; 3] = [
        MatchMethod::Correlation,
        MatchMethod::Mfcc,
        MatchMethod::CrossSimilarity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchMethod::Correlation => "correlation",
            MatchMethod::Mfcc => "mfcc",
            MatchMethod::CrossSimilarity => "cross_similarity",
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMethod {
    type Err = SegmentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        MatchMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == name)
            .ok_or_else(|| SegmentationError::UnknownMethod {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for method in MatchMethod::ALL {
            assert_eq!(method.as_str().parse::<MatchMethod>().expect("known"), method);
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(" MFCC ".parse::<MatchMethod>().expect("known"), MatchMethod::Mfcc);
    }

    #[test]
    fn unknown_method_is_tagged() {
        match "melspectrogram".parse::<MatchMethod>() {
            Err(SegmentationError::UnknownMethod { name }) => assert_eq!(name, "melspectrogram"),
            other => panic!("expected UnknownMethod, got {other:?}"),
        }
    }
}
