//! Question catalog shown by the driving shells

use agent_exposure_common::{
    Answer, AutonomyLevel, DataSensitivity, DecisionImpact, Step,
};
use serde::Serialize;
use strum::IntoEnumIterator;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A selectable answer and the JSON value that submits it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AnswerOption {
    pub label: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub step: Step,
    pub number: u8,
    pub title: String,
    pub help: String,
    /// Checkbox wording for yes/no steps
    pub prompt: Option<String>,
    pub options: Vec<AnswerOption>,
    #[serde(skip)]
    answers: Vec<Answer>,
}

impl Question {
    /// Answer behind the 1-based option number
    pub fn option(&self, number: usize) -> Option<Answer> {
        number
            .checked_sub(1)
            .and_then(|index| self.answers.get(index))
            .copied()
    }

    /// 1-based option number of an answer, if it belongs to this question
    pub fn option_number(&self, answer: Answer) -> Option<usize> {
        self.answers
            .iter()
            .position(|candidate| *candidate == answer)
            .map(|index| index + 1)
    }
}

pub fn question(step: Step) -> Question {
    let (title, help, prompt) = match step {
        Step::Autonomy => (
            "Autonomy Level",
            "Degree to which the agent acts independently without human review. \
             Higher autonomy increases systemic exposure.",
            None,
        ),
        Step::ToolAccess => (
            "Tool Invocation Capability",
            "Ability for the agent to execute external tools, APIs, or system actions. \
             Tool access materially increases operational risk.",
            Some("Agent can call external APIs or tools"),
        ),
        Step::PublicInput => (
            "External Exposure",
            "Whether the agent accepts untrusted or public-facing input. \
             External exposure increases prompt injection and misuse risk.",
            Some("Agent accepts public or untrusted input"),
        ),
        Step::DataSensitivity => (
            "Data Sensitivity Level",
            "Nature of data the agent processes. \
             Higher sensitivity increases regulatory and reputational exposure.",
            None,
        ),
        Step::DecisionImpact => (
            "Decision Criticality",
            "Degree to which agent outputs influence or execute business actions. \
             Execution authority significantly increases risk exposure.",
            None,
        ),
    };

    let answers = answers_for(step);
    let options = answers.iter().map(|answer| option_for(*answer)).collect();

    Question {
        step,
        number: step.number(),
        title: title.to_string(),
        help: help.to_string(),
        prompt: prompt.map(str::to_string),
        options,
        answers,
    }
}

/// All five questions in order
pub fn catalog() -> Vec<Question> {
    Step::iter().map(question).collect()
}

fn answers_for(step: Step) -> Vec<Answer> {
    match step {
        Step::Autonomy => AutonomyLevel::iter().map(Answer::Autonomy).collect(),
        Step::ToolAccess => vec![Answer::ToolAccess(true), Answer::ToolAccess(false)],
        Step::PublicInput => vec![Answer::PublicInput(true), Answer::PublicInput(false)],
        Step::DataSensitivity => DataSensitivity::iter()
            .map(Answer::DataSensitivity)
            .collect(),
        Step::DecisionImpact => DecisionImpact::iter().map(Answer::DecisionImpact).collect(),
    }
}

fn option_for(answer: Answer) -> AnswerOption {
    let value = match answer {
        Answer::ToolAccess(flag) | Answer::PublicInput(flag) => serde_json::Value::Bool(flag),
        Answer::Autonomy(level) => serde_json::Value::String(format!("{:?}", level)),
        Answer::DataSensitivity(level) => serde_json::Value::String(format!("{:?}", level)),
        Answer::DecisionImpact(level) => serde_json::Value::String(format!("{:?}", level)),
    };

    AnswerOption {
        label: answer.to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_values_decode_back_to_answers() {
        for question in catalog() {
            for (index, option) in question.options.iter().enumerate() {
                let decoded = Answer::from_json(question.step, &option.value).unwrap();
                assert_eq!(question.option(index + 1), Some(decoded));
            }
        }
    }

    #[test]
    fn test_option_numbers_are_one_based() {
        let autonomy = question(Step::Autonomy);
        assert_eq!(autonomy.option(0), None);
        assert_eq!(
            autonomy.option(1),
            Some(Answer::Autonomy(AutonomyLevel::HumanInTheLoop))
        );
        assert_eq!(autonomy.option(4), None);
        assert_eq!(
            autonomy.option_number(Answer::Autonomy(AutonomyLevel::FullyAutonomous)),
            Some(3)
        );
        assert_eq!(autonomy.option_number(Answer::ToolAccess(true)), None);
    }
}
