//! Plain-text rendering for the terminal

use agent_exposure_assessment::{risk, Contribution, Question};
use agent_exposure_common::{Answer, AssessmentResult};
use std::fmt::Write;

pub fn render_question(question: &Question, current: Option<Answer>, show_help: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "[{}/5] {}", question.number, question.title);
    if show_help {
        let _ = writeln!(out, "  {}", question.help);
    }
    if let Some(prompt) = &question.prompt {
        let _ = writeln!(out, "  {}?", prompt);
    }

    let selected = current.and_then(|answer| question.option_number(answer));
    for (index, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(index + 1) { "*" } else { " " };
        let _ = writeln!(out, " {} {}) {}", marker, index + 1, option.label);
    }

    if current.is_some() {
        let _ = writeln!(out, "  (press Enter to keep the marked answer)");
    }
    out
}

pub fn render_result(result: &AssessmentResult, breakdown: Option<&[Contribution]>) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Structural Exposure Assessment");
    let _ = writeln!(out, "  Exposure Level:        {}", result.exposure_tier);
    let _ = writeln!(out, "  Composite Risk Score:  {}", result.score);

    if let Some(breakdown) = breakdown {
        for contribution in breakdown {
            let _ = writeln!(
                out,
                "    {:<16} +{}",
                contribution.step.to_string(),
                contribution.points
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", risk::posture_headline(result.exposure_tier));
    for control in &result.controls {
        let _ = writeln!(out, "  - {}", control);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", risk::DISCLAIMER);
    out
}

pub fn render_catalog(questions: &[Question]) -> String {
    questions
        .iter()
        .map(|question| render_question(question, None, true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_exposure_assessment::question;
    use agent_exposure_common::{AutonomyLevel, ExposureTier, Step};

    #[test]
    fn test_render_question_marks_current_answer() {
        let rendered = render_question(
            &question(Step::Autonomy),
            Some(Answer::Autonomy(AutonomyLevel::SemiAutonomous)),
            false,
        );
        assert!(rendered.contains("[1/5] Autonomy Level"));
        assert!(rendered.contains(" * 2) Semi-autonomous"));
        assert!(rendered.contains("   1) Human-in-the-loop"));
        assert!(!rendered.contains("Degree to which"));
    }

    #[test]
    fn test_render_result_lists_controls_in_order() {
        let result = AssessmentResult {
            score: 4,
            exposure_tier: ExposureTier::Low,
            controls: risk::controls(ExposureTier::Low)
                .iter()
                .map(|c| c.to_string())
                .collect(),
        };
        let rendered = render_result(&result, None);
        assert!(rendered.contains("Baseline Controls Recommended:"));
        let first = rendered.find("Prompt version control").unwrap();
        let last = rendered.find("Basic input validation").unwrap();
        assert!(first < last);
        assert!(rendered.contains(risk::DISCLAIMER));
    }
}
