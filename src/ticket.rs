use std::fmt::{Display, Formatter, Write};

use crate::set::{BoundedSet, Rejection, Seeded};
use crate::Number;

/// A named lottery entry. Valid once it holds exactly `limit` numbers.
#[derive(Debug, Clone)]
pub struct Ticket {
    name: String,
    numbers: BoundedSet<Number>,
}

impl Ticket {
    pub fn new<S: Into<String>>(lower: Number, upper: Number, limit: usize, name: S) -> Self {
        Self {
            name: name.into(),
            numbers: BoundedSet::new(lower, upper, limit),
        }
    }

    /// Creates a ticket holding every acceptable number of `numbers`.
    ///
    /// Numbers out of range, repeated, or beyond `limit` are skipped and
    /// listed in the returned [`Seeded`].
    pub fn with_numbers<I, S>(
        lower: Number,
        upper: Number,
        limit: usize,
        numbers: I,
        name: S,
    ) -> (Self, Seeded<Number>)
    where
        I: IntoIterator<Item = Number>,
        S: Into<String>,
    {
        let (numbers, seeded) = BoundedSet::with_values(lower, upper, limit, numbers);
        let ticket = Self {
            name: name.into(),
            numbers,
        };

        (ticket, seeded)
    }

    pub fn insert(&mut self, number: Number) -> bool {
        self.numbers.insert(number)
    }

    pub fn try_insert(&mut self, number: Number) -> Result<(), Rejection> {
        self.numbers.try_insert(number)
    }

    pub fn remove(&mut self, number: Number) -> bool {
        self.numbers.remove(&number)
    }

    pub fn contains(&self, number: Number) -> bool {
        self.numbers.contains(&number)
    }

    pub fn is_valid(&self) -> bool {
        self.numbers.len() == self.numbers.capacity()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.numbers.capacity()
    }

    pub fn lower(&self) -> Number {
        *self.numbers.lower()
    }

    pub fn upper(&self) -> Number {
        *self.numbers.upper()
    }

    pub fn numbers(&self) -> impl Iterator<Item = Number> + '_ {
        self.numbers.iter().copied()
    }

    pub fn render(&self) -> String {
        render_numbers(self.numbers(), self.upper())
    }
}

impl Display for Ticket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Number of decimal digits of `n`.
pub(crate) fn digits(n: Number) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Zero pads each number to the width of `upper`, space separated.
pub(crate) fn render_numbers<I>(numbers: I, upper: Number) -> String
where
    I: IntoIterator<Item = Number>,
{
    let width = digits(upper);
    let mut s = String::new();
    for n in numbers {
        let _ = write!(s, "{n:0width$} ");
    }

    s.truncate(s.trim_end().len());
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_distinct_numbers_make_a_valid_ticket() {
        let mut ticket = Ticket::new(1, 49, 6, "Al");
        for n in [3, 7, 12, 19, 25, 44] {
            assert!(ticket.insert(n));
        }

        assert!(ticket.is_valid());
        assert!(!ticket.insert(45));
        assert_eq!(ticket.len(), 6);
    }

    #[test]
    fn skipped_numbers_leave_ticket_invalid() {
        let (ticket, seeded) = Ticket::with_numbers(1, 49, 6, [1, 2, 2, 3, 50, 4, 5], "Bo");

        assert_eq!(ticket.name(), "Bo");
        assert_eq!(ticket.len(), 5);
        assert!(!ticket.is_valid());
        assert_eq!(
            seeded.rejected,
            vec![(2, Rejection::Duplicate), (50, Rejection::AboveUpper)]
        );
    }

    #[test]
    fn excess_numbers_are_capped() {
        let (ticket, seeded) = Ticket::with_numbers(1, 49, 6, 1..=10, "Cy");

        assert!(ticket.is_valid());
        assert_eq!(seeded.accepted.len(), 6);
        assert_eq!(seeded.rejected.len(), 4);
        assert!(seeded.rejected.iter().all(|(_, r)| *r == Rejection::Full));
    }

    #[test]
    fn rename() {
        let mut ticket = Ticket::new(1, 49, 6, "old");
        ticket.set_name("new");
        assert_eq!(ticket.name(), "new");
    }

    #[test]
    fn renders_zero_padded() {
        let (ticket, _) = Ticket::with_numbers(1, 49, 6, [3, 7, 12, 19, 25, 44], "Al");

        let rendered = ticket.render();
        let mut fields: Vec<&str> = rendered.split(' ').collect();
        assert!(fields.iter().all(|f| f.len() == 2));
        assert!(!rendered.ends_with(' '));

        fields.sort_unstable();
        assert_eq!(fields, vec!["03", "07", "12", "19", "25", "44"]);
        assert_eq!(ticket.to_string(), rendered);
    }

    #[test]
    fn render_width_follows_upper_bound() {
        assert_eq!(render_numbers([5], 9), "5");
        assert_eq!(render_numbers([5], 100), "005");
        assert_eq!(render_numbers([], 49), "");
        assert_eq!(digits(0), 1);
        assert_eq!(digits(49), 2);
        assert_eq!(digits(1000), 4);
    }

    #[test]
    fn remove_and_contains() {
        let (mut ticket, _) = Ticket::with_numbers(1, 49, 6, [1, 2, 3], "Di");

        assert!(ticket.contains(2));
        assert!(ticket.remove(2));
        assert!(!ticket.remove(2));
        assert!(!ticket.contains(2));
        assert_eq!(ticket.try_insert(0), Err(Rejection::BelowLower));
    }
}
