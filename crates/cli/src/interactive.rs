use crate::display;
use agent_exposure_assessment::{question, risk, AssessmentState};
use agent_exposure_common::{CompleteProfile, ExposureError, StepPosition};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

const COMMANDS: &str = "  Enter a number or label to answer, Enter to keep the marked answer\n  \
                        back | restart | help | quit\n";

/// What the loop should do after a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Show(String),
    Quit,
}

/// Line-driven front end for one assessment session
pub struct Wizard {
    state: AssessmentState,
    show_help: bool,
}

impl Wizard {
    pub fn new(show_help: bool) -> Self {
        Self {
            state: AssessmentState::new(),
            show_help,
        }
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    /// Render the current question, or the result once all steps are done
    pub fn screen(&mut self) -> String {
        match self.state.current_step() {
            StepPosition::Question(step) => display::render_question(
                &question(step),
                self.state.profile().get(step),
                self.show_help,
            ),
            StepPosition::Results => match self.state.compute_result() {
                Ok(result) => {
                    let breakdown = CompleteProfile::try_from(self.state.profile())
                        .ok()
                        .map(|profile| risk::score_breakdown(&profile));
                    let mut out = display::render_result(&result, breakdown.as_ref().map(|b| &b[..]));
                    out.push_str("\n  back | restart | quit\n");
                    out
                }
                Err(err @ ExposureError::IncompleteProfile { .. }) => {
                    self.state.reset();
                    format!(
                        "  {}. Please restart the assessment.\n{}",
                        err,
                        self.screen()
                    )
                }
                Err(err) => format!("  {}\n", err),
            },
        }
    }

    pub fn handle(&mut self, line: &str) -> WizardOutcome {
        let input = line.trim();
        match input.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => return WizardOutcome::Quit,
            "?" => return WizardOutcome::Show(COMMANDS.to_string()),
            "h" | "help" => {
                self.show_help = !self.show_help;
                return WizardOutcome::Show(self.screen());
            }
            "r" | "restart" => {
                self.state.reset();
                return WizardOutcome::Show(self.screen());
            }
            "b" | "back" => {
                return match self.state.retreat() {
                    Ok(_) => WizardOutcome::Show(self.screen()),
                    Err(_) => WizardOutcome::Show("  Already at the first question\n".to_string()),
                };
            }
            _ => {}
        }

        let step = match self.state.current_step() {
            StepPosition::Question(step) => step,
            StepPosition::Results => return WizardOutcome::Show(COMMANDS.to_string()),
        };

        if !input.is_empty() {
            let answered = match input.parse::<usize>() {
                Ok(number) => match question(step).option(number) {
                    Some(answer) => self.state.set_answer(step, answer),
                    None => Err(ExposureError::validation(format!(
                        "{} is not one of the listed options",
                        number
                    ))),
                },
                Err(_) => self.state.set_raw_answer(step, input).map(|_| ()),
            };
            if let Err(err) = answered {
                return WizardOutcome::Show(format!("  {}\n", err));
            }
        }

        match self.state.advance() {
            Ok(position) => {
                debug!(%position, "Wizard moved");
                WizardOutcome::Show(self.screen())
            }
            Err(err) => WizardOutcome::Show(format!("  {}\n", err)),
        }
    }
}

pub fn run(show_help: bool) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut wizard = Wizard::new(show_help);

    println!("AI Agent Structural Exposure Model");
    println!("Assess how autonomy and configuration affect systemic risk.");
    print!("{}", COMMANDS);
    print!("{}", wizard.screen());

    loop {
        match rl.readline("exposure> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match wizard.handle(&line) {
                    WizardOutcome::Show(text) => print!("{}", text),
                    WizardOutcome::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_exposure_common::{AutonomyLevel, ExposureTier, Step};

    fn show(outcome: WizardOutcome) -> String {
        match outcome {
            WizardOutcome::Show(text) => text,
            WizardOutcome::Quit => panic!("wizard quit unexpectedly"),
        }
    }

    #[test]
    fn test_full_walk_by_number_and_label() {
        let mut wizard = Wizard::new(false);
        wizard.handle("2");
        wizard.handle("no");
        wizard.handle("yes");
        wizard.handle("moderate");
        let screen = show(wizard.handle("3"));

        assert!(wizard.state().current_step().is_results());
        assert!(screen.contains("Composite Risk Score:  9"));
        assert!(screen.contains("Moderate"));

        let result = wizard.state().compute_result().unwrap();
        assert_eq!(result.exposure_tier, ExposureTier::Moderate);
    }

    #[test]
    fn test_enter_without_answer_stays_put() {
        let mut wizard = Wizard::new(false);
        let screen = show(wizard.handle(""));
        assert!(screen.contains("must be answered"));
        assert_eq!(
            wizard.state().current_step(),
            StepPosition::Question(Step::Autonomy)
        );
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let mut wizard = Wizard::new(false);
        assert!(show(wizard.handle("7")).contains("not one of the listed options"));
        assert!(show(wizard.handle("rogue")).contains("not a valid answer"));
        assert!(wizard.state().profile().autonomy.is_none());
    }

    #[test]
    fn test_back_keeps_answer_and_enter_reuses_it() {
        let mut wizard = Wizard::new(false);
        wizard.handle("full");
        let screen = show(wizard.handle("back"));
        assert!(screen.contains(" * 3) Fully autonomous"));

        wizard.handle("");
        assert_eq!(
            wizard.state().current_step(),
            StepPosition::Question(Step::ToolAccess)
        );
        assert_eq!(
            wizard.state().profile().autonomy,
            Some(AutonomyLevel::FullyAutonomous)
        );
    }

    #[test]
    fn test_back_at_first_question() {
        let mut wizard = Wizard::new(false);
        assert!(show(wizard.handle("back")).contains("Already at the first question"));
    }

    #[test]
    fn test_restart_and_quit() {
        let mut wizard = Wizard::new(false);
        wizard.handle("1");
        wizard.handle("restart");
        assert_eq!(wizard.state(), &AssessmentState::new());
        assert_eq!(wizard.handle("quit"), WizardOutcome::Quit);
    }

    #[test]
    fn test_help_toggles_descriptions() {
        let mut wizard = Wizard::new(false);
        assert!(!wizard.screen().contains("Degree to which"));
        assert!(show(wizard.handle("help")).contains("Degree to which"));
    }
}
