use std::fmt::{Display, Formatter};
use std::io;

use crate::set::Rejection;
use crate::Number;

pub type LottoResult<T> = Result<T, LottoError>;

#[derive(Debug)]
pub enum LottoError {
    IO(io::Error),
    Config(ConfigError),
    /// The range holds fewer distinct numbers than a draw needs.
    ImpossibleDraw {
        lower: Number,
        upper: Number,
        count: usize,
    },
    InvalidJackpot(Vec<(Number, Rejection)>),
}

#[derive(Debug)]
pub enum ConfigError {
    Read(io::Error),
    Parse(toml::de::Error),
}

impl Display for LottoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IO(e) => write!(f, "io error: {e}"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::ImpossibleDraw {
                lower,
                upper,
                count,
            } => write!(
                f,
                "cannot draw {count} distinct numbers from [{lower}, {upper}]"
            ),
            Self::InvalidJackpot(rejected) => {
                f.write_str("invalid jackpot numbers:")?;
                for (n, why) in rejected {
                    write!(f, " {n} ({why})")?;
                }
                Ok(())
            }
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LottoError {}

impl std::error::Error for ConfigError {}

impl From<io::Error> for LottoError {
    fn from(err: io::Error) -> Self {
        Self::IO(err)
    }
}

impl From<ConfigError> for LottoError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}
