//! Interactive console front end.
//!
//! Generic over the input and output streams so tests can script a whole
//! session without a terminal.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::debug;

use adaptive_quiz::{
    render_summary, session_report_json, DifficultyTier, QuizSession, SessionConfig,
};

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

/// Settings collected from the command line. `None` fields are prompted for.
#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    pub name: Option<String>,
    pub tier: Option<DifficultyTier>,
    pub rounds: usize,
    pub seed: Option<u64>,
    pub json: bool,
    pub explain: bool,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref()).context("failed to write to output")
    }

    /// Print `message` without a newline and read one line back.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            bail!("input closed before the session finished");
        }
        Ok(line.trim().to_string())
    }

    fn ask_name(&mut self) -> Result<String> {
        let name = self.prompt("Enter your name to begin: ")?;
        Ok(if name.is_empty() { SessionConfig::default().player_name } else { name })
    }

    /// Accepts an exact tier label or its menu number; re-prompts on anything else.
    fn ask_tier(&mut self) -> Result<DifficultyTier> {
        self.say("Choose your starting difficulty:")?;
        for tier in DifficultyTier::ALL {
            self.say(format!("  {}: {}", tier.index() + 1, tier))?;
        }
        loop {
            let choice = self.prompt("Enter Easy, Medium or Hard (or 1, 2, 3): ")?;
            let parsed = match choice.parse::<u8>() {
                Ok(n) => DifficultyTier::try_from(n),
                Err(_) => choice.parse::<DifficultyTier>(),
            };
            match parsed {
                Ok(tier) => return Ok(tier),
                Err(e) => {
                    debug!(error = %e, "rejected tier choice");
                    self.say("Invalid choice. Please enter Easy, Medium or Hard.")?;
                }
            }
        }
    }

    /// Read an integer answer, re-prompting on non-numeric input.
    fn ask_answer(&mut self) -> Result<i64> {
        loop {
            let text = self.prompt("Your answer: ")?;
            match text.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }
}

/// Run one full session and return it for inspection.
pub fn run<R: BufRead, W: Write>(
    options: &DriverOptions,
    console: &mut Console<R, W>,
) -> Result<QuizSession> {
    console.say(RULE)?;
    console.say("   Welcome to Adaptive Quiz!")?;
    console.say(RULE)?;

    let name = match &options.name {
        Some(name) => name.clone(),
        None => console.ask_name()?,
    };
    console.say(format!("\nHello, {name}! Let's get started."))?;

    let starting_tier = match options.tier {
        Some(tier) => tier,
        None => console.ask_tier()?,
    };

    let mut session = QuizSession::new(SessionConfig {
        player_name: name,
        starting_tier,
        total_puzzles: options.rounds,
        rng_seed: options.seed,
    });

    let total = session.total_puzzles();
    console.say(format!("\nGreat! We will do {total} puzzles."))?;
    console.say(THIN_RULE)?;

    loop {
        let round = session.completed_rounds() + 1;
        let (tier, question) = match session.next_puzzle() {
            Some(p) => (p.tier, p.question.clone()),
            None => break,
        };
        console.say(format!("\n--- Puzzle {round} of {total} ---"))?;
        console.say(format!("Difficulty: {tier}"))?;
        console.say(format!("Question: {question}"))?;

        let answer = console.ask_answer()?;
        let outcome = session.submit_answer(answer)?;
        if outcome.was_correct() {
            console.say("Correct! Good job.")?;
        } else {
            console.say(format!("Not quite. The correct answer was {}.", outcome.puzzle.answer))?;
        }
        if options.explain {
            console.say(format!("-> {}", outcome.adjustment.decision.reason()))?;
        }
    }

    console.say(format!("\n{RULE}"))?;
    console.say("         Session Over!")?;
    console.say(RULE)?;
    console.say(render_summary(&session.summary()))?;
    console.say(format!(
        "Recommended starting level for next time: {}",
        session.recommended_tier()
    ))?;

    if options.json {
        let report = serde_json::to_string_pretty(&session_report_json(&session))
            .context("failed to serialize session report")?;
        console.say(report)?;
    }

    Ok(session)
}
