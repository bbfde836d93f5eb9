//! Terminal prompts and text output for the game.

use sim_core::constants::*;
use sim_core::{
    format_usd, validate_startup_name, InvestorState, PlayerChoice, StartupState,
};
use sim_runtime::{AutoPilot, DecisionSource, GameSummary, TurnReport};
use std::io::{self, BufRead, Write};
use tracing::warn;

pub const INTRO: &str = "\
Startup Survival Simulator
--------------------------

You are the founder of a tech startup. Each week, choose between hiring
developers, pitching to investors, or pushing the team for overtime while
managing cash, team morale, product progress, and investor confidence.

Launch your MVP with investor backing before the money or the team runs out.
";

/// Reads player input and writes game text.
///
/// With an autopilot attached, choices come from the heuristic instead of
/// the input stream, but status and narrative are still written.
pub struct Console<R, W> {
    input: R,
    output: W,
    autopilot: Option<AutoPilot>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            autopilot: None,
        }
    }

    pub fn with_autopilot(mut self) -> Self {
        self.autopilot = Some(AutoPilot);
        self
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask for the startup name until a non-empty one is entered.
    pub fn request_startup_name(&mut self) -> io::Result<String> {
        loop {
            write!(self.output, "\nWhat is the name of your startup?: ")?;
            self.output.flush()?;
            let name = self.read_line()?;
            match validate_startup_name(&name) {
                Ok(()) => return Ok(name),
                Err(e) => writeln!(self.output, "{e}. Please try again.")?,
            }
        }
    }

    /// Show the menu and ask until a valid choice is entered.
    pub fn request_weekly_choice(&mut self) -> io::Result<PlayerChoice> {
        writeln!(self.output, "\nChoose your strategy this week:")?;
        for choice in PlayerChoice::ALL {
            writeln!(self.output, "{}", menu_line(choice))?;
        }
        loop {
            write!(self.output, "Enter Option 1, 2, or 3: ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match line.parse::<PlayerChoice>() {
                Ok(choice) => return Ok(choice),
                Err(_) => writeln!(self.output, "Invalid input. Please enter 1, 2, or 3")?,
            }
        }
    }

    pub fn show_status(
        &mut self,
        startup_name: &str,
        startup: &StartupState,
        investor: &InvestorState,
    ) -> io::Result<()> {
        writeln!(self.output, "\n---WEEK {}--- | {}", startup.week, startup_name)?;
        writeln!(self.output, "Cash: {}", format_usd(startup.cash))?;
        writeln!(self.output, "Morale: {}", startup.morale)?;
        writeln!(self.output, "Product Progress: {}%", startup.product_progress)?;
        writeln!(self.output, "Investor Confidence: {}%", investor.confidence)
    }

    pub fn show_report(&mut self, startup_name: &str, report: &TurnReport) -> io::Result<()> {
        writeln!(self.output)?;
        for line in report.narrative(startup_name) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    pub fn show_summary(&mut self, summary: &GameSummary) -> io::Result<()> {
        writeln!(self.output, "\nFINAL STATS for {}", summary.startup_name)?;
        writeln!(self.output, "Weeks survived: {}", summary.final_week)?;
        writeln!(self.output, "Cash: {}", format_usd(summary.cash))?;
        writeln!(self.output, "Product Progress: {}%", summary.product_progress)?;
        writeln!(self.output, "Team Morale: {}", summary.morale)?;
        writeln!(self.output, "Investor Confidence: {}%", summary.confidence)
    }
}

impl<R: BufRead, W: Write> DecisionSource for Console<R, W> {
    type Error = io::Error;

    fn decide(
        &mut self,
        startup_name: &str,
        startup: &StartupState,
        investor: &InvestorState,
    ) -> io::Result<PlayerChoice> {
        self.show_status(startup_name, startup, investor)?;
        match self.autopilot.as_mut() {
            Some(pilot) => {
                let choice = pilot
                    .decide(startup_name, startup, investor)
                    .unwrap_or_else(|never| match never {});
                writeln!(self.output, "\nAutopilot: {choice}")?;
                Ok(choice)
            }
            None => self.request_weekly_choice(),
        }
    }

    fn observe(&mut self, startup_name: &str, report: &TurnReport) {
        if let Err(e) = self.show_report(startup_name, report) {
            warn!(error = %e, "failed to write week report");
        }
    }
}

fn menu_line(choice: PlayerChoice) -> String {
    let effect = match choice {
        PlayerChoice::HireDeveloper => format!(
            "-{}, +{HIRE_DEV_GAIN}% Product",
            format_usd(HIRE_DEV_COST)
        ),
        PlayerChoice::PitchInvestors => {
            format!("+{PITCH_CONFIDENCE_GAIN}% Confidence, -{PITCH_MORALE_COST} Morale")
        }
        PlayerChoice::PushOvertime => {
            format!("+{OVERTIME_PRODUCT_GAIN}% Product, -{OVERTIME_MORALE_PENALTY} Morale")
        }
    };
    format!("{}. {} ({effect})", choice.menu_key(), choice.title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::GameStatus;
    use sim_events::ScriptedDice;
    use sim_runtime::Simulation;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn text(c: &mut Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.output().clone()).unwrap()
    }

    #[test]
    fn name_prompt_repeats_until_non_empty() {
        let mut c = console("\n   \nAcme Labs\n");
        assert_eq!(c.request_startup_name().unwrap(), "Acme Labs");
        let out = text(&mut c);
        assert_eq!(out.matches("What is the name").count(), 3);
        assert_eq!(out.matches("cannot be empty").count(), 2);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut c = console("");
        let err = c.request_startup_name().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn choice_prompt_rejects_bad_keys() {
        let mut c = console("9\nhire\n2\n");
        assert_eq!(
            c.request_weekly_choice().unwrap(),
            PlayerChoice::PitchInvestors
        );
        let out = text(&mut c);
        assert!(out.contains("1. Hire a Developer (-$10,000, +10% Product)"));
        assert!(out.contains("3. Push Team Overtime (+5% Product, -20 Morale)"));
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn status_block_format() {
        let mut c = console("");
        c.show_status("Acme", &StartupState::default(), &InvestorState::default())
            .unwrap();
        assert_eq!(
            text(&mut c),
            "\n---WEEK 1--- | Acme\nCash: $100,000\nMorale: 100\nProduct Progress: 0%\nInvestor Confidence: 100%\n"
        );
    }

    #[test]
    fn interactive_game_until_burnout() {
        let mut c = console("3\n3\n3\n3\n3\n");
        let mut sim = Simulation::new("Acme", ScriptedDice::quiet()).unwrap();
        let summary = sim.run(&mut c).unwrap();
        assert_eq!(summary.status, GameStatus::LossMoraleBurnout);
        c.show_summary(&summary).unwrap();
        let out = text(&mut c);
        assert_eq!(out.matches("---WEEK").count(), 5);
        assert!(out.contains("Your team at Acme burned out. Game over!"));
        assert!(out.contains("Weeks survived: 6"));
        assert!(out.contains("Team Morale: 0"));
    }

    #[test]
    fn autopilot_needs_no_input() {
        let mut c = console("").with_autopilot();
        let mut sim = Simulation::new("Acme", ScriptedDice::quiet()).unwrap();
        let summary = sim.run(&mut c).unwrap();
        assert!(summary.status.is_terminal());
        assert!(text(&mut c).contains("Autopilot: Hire a Developer"));
    }
}
