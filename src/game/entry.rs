use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

use crate::config::GameConfig;
use crate::set::Rejection;
use crate::ticket::Ticket;
use crate::Number;

/// Why a ticket entry was thrown away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    NotANumber {
        token: String,
        err: ParseIntError,
    },
    Incomplete {
        expected: usize,
        accepted: usize,
        rejected: Vec<(Number, Rejection)>,
    },
}

impl Display for EntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber { token, err } => write!(f, "'{token}' is not a number: {err}"),
            Self::Incomplete {
                expected,
                accepted,
                rejected,
            } => {
                write!(f, "expected {expected} numbers, got {accepted}")?;
                for (n, why) in rejected {
                    write!(f, ", {n} {why}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for EntryError {}

/// Builds a ticket for `name` out of a whitespace separated line of numbers.
///
/// The ticket is only returned when it is valid. Tokens past a full ticket
/// are ignored, like any other rejected number.
pub fn parse_ticket(rules: &GameConfig, name: &str, line: &str) -> Result<Ticket, EntryError> {
    let numbers = line
        .split_whitespace()
        .map(|token| {
            token.parse::<Number>().map_err(|err| EntryError::NotANumber {
                token: token.to_owned(),
                err,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (ticket, seeded) =
        Ticket::with_numbers(rules.lower, rules.upper, rules.entries, numbers, name);
    if !ticket.is_valid() {
        return Err(EntryError::Incomplete {
            expected: rules.entries,
            accepted: ticket.len(),
            rejected: seeded.rejected,
        });
    }

    Ok(ticket)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn accepts_six_numbers() {
        let ticket = parse_ticket(&rules(), "Al", "3 7 12 19 25 44").unwrap();

        assert_eq!(ticket.name(), "Al");
        assert!(ticket.is_valid());
        assert!(ticket.contains(44));
    }

    #[test]
    fn tolerates_extra_whitespace() {
        assert!(parse_ticket(&rules(), "Al", "  1\t2  3 4 5   6 ").is_ok());
    }

    #[test]
    fn rejects_too_few_numbers() {
        let err = parse_ticket(&rules(), "Al", "1 2 3 4 5").unwrap_err();
        assert_eq!(
            err,
            EntryError::Incomplete {
                expected: 6,
                accepted: 5,
                rejected: vec![],
            }
        );
    }

    #[test]
    fn rejects_duplicates_and_out_of_range() {
        let err = parse_ticket(&rules(), "Al", "1 1 2 3 4 50").unwrap_err();
        match err {
            EntryError::Incomplete {
                accepted, rejected, ..
            } => {
                assert_eq!(accepted, 4);
                assert_eq!(
                    rejected,
                    vec![(1, Rejection::Duplicate), (50, Rejection::AboveUpper)]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        let err = parse_ticket(&rules(), "Al", "1 2 3 x 5 6").unwrap_err();
        assert!(matches!(err, EntryError::NotANumber { ref token, .. } if token == "x"));

        // even after a complete set of numbers
        assert!(parse_ticket(&rules(), "Al", "1 2 3 4 5 6 seven").is_err());
        assert!(parse_ticket(&rules(), "Al", "1 2 3 4 5 -6").is_err());
    }

    #[test]
    fn ignores_numbers_past_a_full_ticket() {
        let ticket = parse_ticket(&rules(), "Al", "1 2 3 4 5 6 7").unwrap();

        assert_eq!(ticket.len(), 6);
        assert!(!ticket.contains(7));
    }

    #[test]
    fn empty_line_is_incomplete() {
        assert!(matches!(
            parse_ticket(&rules(), "Al", ""),
            Err(EntryError::Incomplete { accepted: 0, .. })
        ));
    }
}
