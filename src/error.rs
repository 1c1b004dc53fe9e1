use std::io;
use std::path::PathBuf;

use crate::blocks::{ProcessType, Section};
use crate::interpolation::NormalizeError;

//=====================================================================
// Errors raised while loading an LXCat file. A load either succeeds
// with a complete set of collisions or fails with one of these; no
// partially built collection is ever handed back.
//=====================================================================
#[derive(Debug, thiserror::Error)]
pub enum LxcatError {
    #[error("failed to read LXCat file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read LXCat input: {0}")]
    Read(#[from] io::Error),
    #[error(
        "line {line}: expected {role} in {section} of {process_type} block for '{species}', got '{token}'"
    )]
    MalformedNumber {
        line: usize,
        token: String,
        role: &'static str,
        section: Section,
        process_type: ProcessType,
        species: String,
    },
    #[error(
        "line {line}: {section} of {process_type} block for '{species}' needs {expected} token(s), found {found}"
    )]
    MissingTokens {
        line: usize,
        section: Section,
        process_type: ProcessType,
        species: String,
        expected: usize,
        found: usize,
    },
    #[error(
        "{process_type} block for '{species}' starting at line {line} ended before its {section} was complete"
    )]
    TruncatedBlock {
        line: usize,
        section: Section,
        process_type: ProcessType,
        species: String,
    },
    #[error("{process_type} block for '{species}' starting at line {line}: {source}")]
    Normalize {
        line: usize,
        process_type: ProcessType,
        species: String,
        #[source]
        source: NormalizeError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_number_message() {
        let err = LxcatError::MalformedNumber {
            line: 12,
            token: String::from("abc"),
            role: "energy",
            section: Section::Data,
            process_type: ProcessType::Ionization,
            species: String::from("Ar"),
        };
        assert_eq!(
            err.to_string(),
            "line 12: expected energy in data of IONIZATION block for 'Ar', got 'abc'"
        );
    }

    #[test]
    fn test_normalize_source_is_kept() {
        use std::error::Error;

        let err = LxcatError::Normalize {
            line: 3,
            process_type: ProcessType::Excitation,
            species: String::from("N2"),
            source: NormalizeError::NothingAboveThreshold { threshold: 6.17 },
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("6.17"));
    }
}
