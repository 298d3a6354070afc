//! Interactive menu loop.
//!
//! The session reads from any `BufRead` and writes to any `Write`, so the
//! binary wires it to stdin/stdout while tests drive it with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::algos::scoring::{crack, rank};
use crate::error::{CliError, Result};
use crate::structs::{Caesar, CrackReport};
use crate::traits::{Decryptor, Encryptor};

const BANNER: &str = "Caesar Cipher encryption and decryption";
const MENU: &str = "Choose an option\n\
                    1. Encrypt text\n\
                    2. Decrypt text with known shift\n\
                    3. Decrypt text with unknown shift\n\
                    4. Exit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Encrypt,
    DecryptKnownShift,
    DecryptUnknownShift,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Encrypt),
            "2" => Some(MenuChoice::DecryptKnownShift),
            "3" => Some(MenuChoice::DecryptUnknownShift),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionOptions {
    /// List every candidate best-first with its score instead of by shift.
    pub ranked_listing: bool,
}

/// Parses a shift typed at a prompt. A blank line yields `None`.
pub fn parse_shift(raw: &str) -> Result<Option<i64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|_| CliError::InvalidShift(trimmed.to_string()))
}

enum Flow {
    Continue,
    Stop,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Session {
            input,
            output,
            options,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user picks Exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER)?;

        loop {
            writeln!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!("input closed, ending session");
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => {
                    debug!(?choice, "dispatching menu choice");
                    self.dispatch(choice)
                }
                None => {
                    writeln!(self.output, "Invalid option, please try again.")?;
                    Ok(Flow::Continue)
                }
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => return Ok(()),
                Err(CliError::InvalidShift(raw)) => {
                    warn!(%raw, "rejected shift value");
                    writeln!(self.output, "{}", CliError::InvalidShift(raw))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Encrypt => self.encrypt_input(),
            MenuChoice::DecryptKnownShift => self.decrypt_known_shift(),
            MenuChoice::DecryptUnknownShift => self.decrypt_unknown_shift(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                Ok(Flow::Stop)
            }
        }
    }

    fn encrypt_input(&mut self) -> Result<Flow> {
        let Some(text) = self.prompt("Enter text to encrypt: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(raw_shift) = self.prompt("Enter shift value: ")? else {
            return Ok(Flow::Stop);
        };

        let cipher = match parse_shift(&raw_shift)? {
            Some(shift) => Caesar::new(shift),
            None => {
                let cipher = Caesar::random();
                writeln!(self.output, "Using random shift: {}", cipher.shift)?;
                cipher
            }
        };

        writeln!(self.output, "Encrypted text: {}", cipher.encrypt(&text))?;
        Ok(Flow::Continue)
    }

    fn decrypt_known_shift(&mut self) -> Result<Flow> {
        let Some(text) = self.prompt("Enter text to decrypt: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(raw_shift) = self.prompt("Enter shift value: ")? else {
            return Ok(Flow::Stop);
        };

        let shift = parse_shift(&raw_shift)?
            .ok_or_else(|| CliError::InvalidShift(raw_shift.trim().to_string()))?;

        writeln!(self.output, "Decrypted text: {}", Caesar::new(shift).decrypt(&text))?;
        Ok(Flow::Continue)
    }

    fn decrypt_unknown_shift(&mut self) -> Result<Flow> {
        let Some(text) = self.prompt("Enter text to decrypt: ")? else {
            return Ok(Flow::Stop);
        };

        writeln!(self.output, "Trying all possible shifts and showing results...")?;
        let report = crack(&text);

        if let Some(best) = &report.best {
            writeln!(
                self.output,
                "Decrypted text with shift of {}, with confidence score of {:.6}: {}",
                best.shift, best.score, best.text
            )?;
        }

        let Some(answer) = self.prompt("All possible results? (y/n):\n")? else {
            return Ok(Flow::Stop);
        };

        if answer.trim() == "y" {
            self.list_candidates(&report)?;
        }

        Ok(Flow::Continue)
    }

    fn list_candidates(&mut self, report: &CrackReport) -> Result<()> {
        if self.options.ranked_listing {
            for candidate in rank(&report.candidates) {
                writeln!(
                    self.output,
                    "Shift {} (score {:.1}): {}",
                    candidate.shift, candidate.score, candidate.text
                )?;
            }
        } else {
            for (shift, text) in report.candidates.iter() {
                writeln!(self.output, "Shift {}: {}", shift, text)?;
            }
        }

        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }
}
