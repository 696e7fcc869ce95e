//! Questionnaire step machine
//!
//! Linear chain `1 -> 2 -> 3 -> 4 -> 5 -> results`. `advance` only moves past a
//! step once it is answered, `retreat` walks back one step keeping every answer,
//! and `reset` returns to step 1 with an empty profile.

use agent_exposure_common::{
    AgentProfile, Answer, AssessmentResult, ExposureError, Result, Step, StepPosition,
};
use tracing::{debug, warn};

use crate::risk;

/// One session's questionnaire progress. Owned by the driving shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentState {
    position: StepPosition,
    profile: AgentProfile,
}

impl AssessmentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> StepPosition {
        self.position
    }

    /// Answers given so far, for re-displaying earlier choices
    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    pub fn is_complete(&self) -> bool {
        self.profile.is_complete()
    }

    /// Store an answer for `step` without moving.
    ///
    /// The answer must belong to `step`'s domain; a tool-access flag offered
    /// for the autonomy step is rejected.
    pub fn set_answer(&mut self, step: Step, answer: Answer) -> Result<()> {
        if answer.step() != step {
            warn!(%step, answer_step = %answer.step(), "Answer does not belong to step");
            return Err(ExposureError::validation(format!(
                "answer '{}' belongs to {}, not {}",
                answer,
                answer.step(),
                step
            )));
        }

        debug!(%step, %answer, "Recording answer");
        self.profile.set(answer);
        Ok(())
    }

    /// Parse raw input for `step` and store it
    pub fn set_raw_answer(&mut self, step: Step, raw: &str) -> Result<Answer> {
        let answer = Answer::parse(step, raw)?;
        self.set_answer(step, answer)?;
        Ok(answer)
    }

    pub fn advance(&mut self) -> Result<StepPosition> {
        let step = match self.position {
            StepPosition::Question(step) => step,
            StepPosition::Results => {
                warn!("Advance requested past results");
                return Err(ExposureError::invalid_transition(
                    StepPosition::Results,
                    StepPosition::Results,
                ));
            }
        };

        if !self.profile.is_answered(step) {
            warn!(%step, "Advance requested before step was answered");
            return Err(ExposureError::validation(format!(
                "{} must be answered before continuing",
                step
            )));
        }

        let next = step.next();
        debug!(from = %self.position, to = %next, "Advancing");
        self.position = next;
        Ok(next)
    }

    pub fn retreat(&mut self) -> Result<StepPosition> {
        let previous = match self.position {
            StepPosition::Results => Some(Step::DecisionImpact),
            StepPosition::Question(step) => step.previous(),
        };

        let Some(previous) = previous else {
            warn!("Retreat requested at the first step");
            return Err(ExposureError::invalid_transition(
                self.position,
                self.position,
            ));
        };

        let target = StepPosition::Question(previous);
        debug!(from = %self.position, to = %target, "Retreating");
        self.position = target;
        Ok(target)
    }

    pub fn reset(&mut self) {
        debug!(from = %self.position, "Resetting assessment");
        *self = Self::default();
    }

    /// Score the collected answers; only valid once the session reached results
    pub fn compute_result(&self) -> Result<AssessmentResult> {
        // A partial profile reports what is missing rather than where we are.
        if !self.position.is_results() && self.profile.is_complete() {
            return Err(ExposureError::invalid_transition(
                self.position,
                StepPosition::Results,
            ));
        }
        risk::compute_result(&self.profile)
    }
}
