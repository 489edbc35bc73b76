use std::io::Write;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::LottoResult;
use crate::jackpot::Jackpot;
use crate::ticket::{digits, Ticket};

pub mod entry;
pub mod input;

pub use entry::{parse_ticket, EntryError};
pub use input::LineSource;

const MENU_HEADER: &str = "=== Lottery Menu ===";
const MENU_ENTER: &str = "1 Enter ticket";
const MENU_DRAW: &str = "2 Lottery drawing";
const MENU_RESULT: &str = "3 Show result";
const MENU_QUIT: &str = "0 Quit";
const MENU_PROMPT: &str = "Please enter (0-3): ";
const IO_ERROR: &str = "Error! Cannot read an input.";
const INVALID_MENU: &str = "Please enter a valid menu number!";
const ENTER_NAME: &str = "Please enter a name of the holder of this ticket: ";
const TICKET_CONFIRMED: &str = "The ticket has been added.";
const INPUT_ERROR: &str = "Error! Invalid ticket numbers.";
const CURRENT_DRAWN: &str = "Drawn Numbers: ";
const LOTTO_HEADER: &str = "Lottery Drawing Results:";
const THANK_YOU: &str = "Thank you for playing!";

const MIN_NAME_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    EnterTicket,
    Draw,
    ShowResults,
}

impl MenuChoice {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<i32>().ok()? {
            0 => Some(Self::Quit),
            1 => Some(Self::EnterTicket),
            2 => Some(Self::Draw),
            3 => Some(Self::ShowResults),
            _ => None,
        }
    }
}

/// One round of the lottery: collect tickets, draw, show the hits.
pub struct GameSession<I, O, R> {
    rules: GameConfig,
    input: I,
    output: O,
    rng: R,
    tickets: Vec<Ticket>,
    jackpot: Option<Jackpot>,
}

impl<I, O, R> GameSession<I, O, R>
where
    I: LineSource,
    O: Write,
    R: Rng,
{
    /// Fails if the rules do not allow a jackpot to be drawn.
    pub fn new(rules: GameConfig, input: I, output: O, rng: R) -> LottoResult<Self> {
        rules.validate()?;

        Ok(Self {
            rules,
            input,
            output,
            rng,
            tickets: vec![],
            jackpot: None,
        })
    }

    /// Runs the menu loop until the player quits or input runs out.
    ///
    /// Only failures to write the output end the loop early.
    pub fn run(&mut self) -> LottoResult<()> {
        loop {
            self.print_menu()?;

            let choice = match self.input.next_line() {
                Ok(Some(line)) => MenuChoice::parse(&line),
                Ok(None) => {
                    info!("Input closed, leaving the game");
                    Some(MenuChoice::Quit)
                }
                Err(e) => {
                    warn!("Cannot read menu input: {}", e);
                    writeln!(self.output, "{IO_ERROR}")?;
                    continue;
                }
            };

            match choice {
                Some(MenuChoice::EnterTicket) if !self.is_drawn() => self.enter_ticket()?,
                Some(MenuChoice::Draw) => self.draw()?,
                Some(MenuChoice::ShowResults) if self.can_show_results() => {
                    self.show_results()?
                }
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "{THANK_YOU}")?;
                    break;
                }
                _ => writeln!(self.output, "{INVALID_MENU}")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> LottoResult<()> {
        writeln!(self.output, "{MENU_HEADER}")?;
        if !self.is_drawn() {
            writeln!(self.output, "{MENU_ENTER}")?;
        }
        writeln!(self.output, "{MENU_DRAW}")?;
        if self.can_show_results() {
            writeln!(self.output, "{MENU_RESULT}")?;
        }
        writeln!(self.output, "{MENU_QUIT}")?;
        write!(self.output, "{MENU_PROMPT}")?;
        self.output.flush()?;

        Ok(())
    }

    /// Reads a name and a line of numbers. The ticket is kept only if it is
    /// valid as a whole.
    pub fn enter_ticket(&mut self) -> LottoResult<()> {
        write!(self.output, "{ENTER_NAME}")?;
        self.output.flush()?;
        let Some(name) = self.read_entry_line()? else {
            return Ok(());
        };

        writeln!(
            self.output,
            "Please enter {} numbers, all between {} and {}: ",
            self.rules.entries, self.rules.lower, self.rules.upper
        )?;
        let Some(line) = self.read_entry_line()? else {
            return Ok(());
        };

        match parse_ticket(&self.rules, &name, &line) {
            Ok(ticket) => {
                info!("Ticket added for '{}': {}", ticket.name(), ticket);
                self.tickets.push(ticket);
                writeln!(self.output, "{TICKET_CONFIRMED}")?;
            }
            Err(e) => {
                debug!("Ticket for '{}' rejected: {}", name, e);
                writeln!(self.output, "{INPUT_ERROR}")?;
            }
        }

        Ok(())
    }

    /// `None` if the line could not be read, the entry is reported as
    /// invalid in that case.
    fn read_entry_line(&mut self) -> LottoResult<Option<String>> {
        match self.input.next_line() {
            Ok(Some(line)) => Ok(Some(line)),
            Ok(None) => {
                debug!("Input closed during ticket entry");
                writeln!(self.output, "{INPUT_ERROR}")?;
                Ok(None)
            }
            Err(e) => {
                warn!("Cannot read ticket entry: {}", e);
                writeln!(self.output, "{INPUT_ERROR}")?;
                Ok(None)
            }
        }
    }

    /// Draws a new jackpot, replacing any previous one.
    pub fn draw(&mut self) -> LottoResult<()> {
        let GameConfig {
            lower,
            upper,
            entries,
        } = self.rules;
        let jackpot = Jackpot::draw(lower, upper, entries, &mut self.rng)?;
        info!("Jackpot drawn: {}", jackpot);

        writeln!(self.output, "{CURRENT_DRAWN}")?;
        writeln!(self.output, "{jackpot}")?;
        self.jackpot = Some(jackpot);

        Ok(())
    }

    /// Prints the jackpot and one row per ticket with its hits.
    pub fn show_results(&mut self) -> LottoResult<()> {
        let Some(jackpot) = &self.jackpot else {
            writeln!(self.output, "{INVALID_MENU}")?;
            return Ok(());
        };

        writeln!(self.output, "{LOTTO_HEADER}")?;
        writeln!(self.output, "{CURRENT_DRAWN}")?;
        writeln!(self.output, "{jackpot}")?;

        let name_width = self.name_width();
        let numbers_width = (digits(self.rules.upper) + 1) * self.rules.entries;
        writeln!(
            self.output,
            "| {:<name_width$}| {:<numbers_width$}| Hits",
            "Name", "Numbers"
        )?;

        for ticket in &self.tickets {
            writeln!(
                self.output,
                "| {:<name_width$}: {} | {:02}",
                ticket.name(),
                ticket,
                jackpot.count_hits(ticket)
            )?;
        }

        Ok(())
    }

    fn name_width(&self) -> usize {
        self.tickets
            .iter()
            .map(|t| t.name().chars().count())
            .fold(MIN_NAME_WIDTH, usize::max)
    }

    pub fn is_drawn(&self) -> bool {
        self.jackpot.is_some()
    }

    pub fn can_show_results(&self) -> bool {
        self.is_drawn() && !self.tickets.is_empty()
    }

    pub fn rules(&self) -> &GameConfig {
        &self.rules
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn jackpot(&self) -> Option<&Jackpot> {
        self.jackpot.as_ref()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_choices() {
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::EnterTicket));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Draw));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::ShowResults));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
