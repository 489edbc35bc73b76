use std::fmt::{Display, Formatter};

use rand::Rng;
use tracing::trace;

use crate::error::{LottoError, LottoResult};
use crate::set::BoundedSet;
use crate::ticket::{render_numbers, Ticket};
use crate::Number;

/// The winning numbers of one draw.
#[derive(Debug, Clone)]
pub struct Jackpot {
    numbers: BoundedSet<Number>,
}

impl Jackpot {
    /// Draws `count` distinct numbers uniformly from `[lower, upper]`.
    pub fn draw<R>(lower: Number, upper: Number, count: usize, rng: &mut R) -> LottoResult<Self>
    where
        R: Rng + ?Sized,
    {
        check_drawable(lower, upper, count)?;

        let mut numbers = BoundedSet::new(lower, upper, count);
        let mut attempts = 0usize;
        while !numbers.is_full() {
            attempts += 1;
            numbers.insert(rng.gen_range(lower..=upper));
        }
        trace!("drew {count} numbers in {attempts} attempts");

        Ok(Self { numbers })
    }

    /// Builds a jackpot from already known numbers. Every number must be
    /// distinct and within `[lower, upper]`.
    pub fn from_numbers<I>(lower: Number, upper: Number, numbers: I) -> LottoResult<Self>
    where
        I: IntoIterator<Item = Number>,
    {
        let numbers: Vec<Number> = numbers.into_iter().collect();
        let (numbers, seeded) = BoundedSet::with_values(lower, upper, numbers.len(), numbers);
        if !seeded.is_complete() {
            return Err(LottoError::InvalidJackpot(seeded.rejected));
        }

        Ok(Self { numbers })
    }

    /// Numbers present on both the jackpot and `ticket`.
    pub fn count_hits(&self, ticket: &Ticket) -> usize {
        ticket
            .numbers()
            .filter(|n| self.numbers.contains(n))
            .count()
    }

    pub fn contains(&self, number: Number) -> bool {
        self.numbers.contains(&number)
    }

    pub fn numbers(&self) -> impl Iterator<Item = Number> + '_ {
        self.numbers.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn lower(&self) -> Number {
        *self.numbers.lower()
    }

    pub fn upper(&self) -> Number {
        *self.numbers.upper()
    }

    pub fn render(&self) -> String {
        render_numbers(self.numbers(), self.upper())
    }
}

impl Display for Jackpot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Fails unless `[lower, upper]` holds at least `count` distinct numbers.
pub fn check_drawable(lower: Number, upper: Number, count: usize) -> LottoResult<()> {
    let impossible = || LottoError::ImpossibleDraw {
        lower,
        upper,
        count,
    };

    if count == 0 {
        return Ok(());
    }
    if upper < lower {
        return Err(impossible());
    }

    let available = u64::from(upper - lower) + 1;
    if available < count as u64 {
        return Err(impossible());
    }

    Ok(())
}
