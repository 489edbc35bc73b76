use std::io::{BufRead, Write};

use crate::config::GameConfig;
use crate::error::LottoResult;
use crate::game::GameSession;

pub mod config;
pub mod error;
pub mod game;
pub mod jackpot;
pub mod service;
pub mod set;
pub mod ticket;

/// A lottery number.
pub type Number = u32;

pub static WELCOME_INFO: &str = include_str!(concat!(env!("OUT_DIR"), "/welcome_info"));

/// Plays on the given console with the thread local random generator.
pub fn play<I, O>(rules: GameConfig, input: I, output: O) -> LottoResult<()>
where
    I: BufRead,
    O: Write,
{
    let mut session = GameSession::new(rules, input, output, rand::thread_rng())?;
    session.run()
}
