//! Exposure risk model
//!
//! Maps a complete agent profile to a composite score, an exposure tier and
//! the tier's recommended controls. Weights are fixed constants.
//!
//! ```text
//! score = autonomy (1-3) + tool access (0|3) + public input (0|2)
//!       + data sensitivity (1-3) + decision impact (1-3)
//! ```

use agent_exposure_common::{
    AgentProfile, Answer, AssessmentResult, AutonomyLevel, CompleteProfile, DataSensitivity,
    DecisionImpact, ExposureTier, Result, Step,
};
use serde::Serialize;
use tracing::{debug, warn};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub const TOOL_ACCESS_WEIGHT: u8 = 3;
pub const PUBLIC_INPUT_WEIGHT: u8 = 2;

pub const MIN_SCORE: u8 = 4;
pub const MAX_SCORE: u8 = 14;

const LOW_TIER_MAX: u8 = 6;
const MODERATE_TIER_MAX: u8 = 11;

const LOW_CONTROLS: &[&str] = &[
    "Prompt version control",
    "Logging and traceability",
    "Basic input validation",
];

const MODERATE_CONTROLS: &[&str] = &[
    "Guardrail layer (policy enforcement)",
    "Human approval for high-impact outputs",
    "Tool invocation restrictions",
    "Structured output validation",
];

const HIGH_CONTROLS: &[&str] = &[
    "Policy enforcement gateway",
    "Strong human oversight",
    "Tool sandboxing constraints",
    "Output validation framework",
    "Audit and rollback capability",
];

pub const DISCLAIMER: &str = "This model is illustrative. Weighting assumptions are intentionally transparent to enable refinement.";

/// Points one answered step adds to the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub step: Step,
    pub points: u8,
}

pub fn autonomy_weight(level: AutonomyLevel) -> u8 {
    match level {
        AutonomyLevel::HumanInTheLoop => 1,
        AutonomyLevel::SemiAutonomous => 2,
        AutonomyLevel::FullyAutonomous => 3,
    }
}

pub fn sensitivity_weight(level: DataSensitivity) -> u8 {
    match level {
        DataSensitivity::Low => 1,
        DataSensitivity::Moderate => 2,
        DataSensitivity::High => 3,
    }
}

pub fn impact_weight(level: DecisionImpact) -> u8 {
    match level {
        DecisionImpact::AdvisoryOnly => 1,
        DecisionImpact::OperationalInfluence => 2,
        DecisionImpact::AutomatedExecution => 3,
    }
}

/// Points for a single answer, independent of the other steps
pub fn answer_weight(answer: Answer) -> u8 {
    match answer {
        Answer::Autonomy(level) => autonomy_weight(level),
        Answer::ToolAccess(flag) => flag_weight(flag, TOOL_ACCESS_WEIGHT),
        Answer::PublicInput(flag) => flag_weight(flag, PUBLIC_INPUT_WEIGHT),
        Answer::DataSensitivity(level) => sensitivity_weight(level),
        Answer::DecisionImpact(level) => impact_weight(level),
    }
}

fn flag_weight(flag: bool, weight: u8) -> u8 {
    if flag {
        weight
    } else {
        0
    }
}

/// Per-step contributions in questionnaire order; they sum to [`score`]
pub fn score_breakdown(profile: &CompleteProfile) -> [Contribution; 5] {
    let answers = [
        Answer::Autonomy(profile.autonomy),
        Answer::ToolAccess(profile.tool_access),
        Answer::PublicInput(profile.public_input),
        Answer::DataSensitivity(profile.data_sensitivity),
        Answer::DecisionImpact(profile.decision_impact),
    ];

    answers.map(|answer| Contribution {
        step: answer.step(),
        points: answer_weight(answer),
    })
}

/// Composite score in `MIN_SCORE..=MAX_SCORE`
pub fn score(profile: &CompleteProfile) -> u8 {
    score_breakdown(profile)
        .iter()
        .map(|contribution| contribution.points)
        .sum()
}

pub fn exposure_tier(score: u8) -> ExposureTier {
    if score <= LOW_TIER_MAX {
        ExposureTier::Low
    } else if score <= MODERATE_TIER_MAX {
        ExposureTier::Moderate
    } else {
        ExposureTier::High
    }
}

/// Recommended controls for a tier, in priority order
pub fn controls(tier: ExposureTier) -> &'static [&'static str] {
    match tier {
        ExposureTier::Low => LOW_CONTROLS,
        ExposureTier::Moderate => MODERATE_CONTROLS,
        ExposureTier::High => HIGH_CONTROLS,
    }
}

/// Heading shown above the control list
pub fn posture_headline(tier: ExposureTier) -> &'static str {
    match tier {
        ExposureTier::Low => "Baseline Controls Recommended",
        ExposureTier::Moderate => "Enhanced Controls Required",
        ExposureTier::High => "High-Risk Configuration: deployment should not proceed without",
    }
}

pub fn assess(profile: &CompleteProfile) -> AssessmentResult {
    let score = score(profile);
    let exposure_tier = exposure_tier(score);
    debug!(score, tier = %exposure_tier, "Computed exposure assessment");

    AssessmentResult {
        score,
        exposure_tier,
        controls: controls(exposure_tier)
            .iter()
            .map(|control| control.to_string())
            .collect(),
    }
}

/// Score a profile that may still be partial.
///
/// Fails with `IncompleteProfile` naming the unanswered steps; never defaults them.
pub fn compute_result(profile: &AgentProfile) -> Result<AssessmentResult> {
    let complete = CompleteProfile::try_from(profile).map_err(|err| {
        warn!(error = %err, "Refusing to score a partial profile");
        err
    })?;
    Ok(assess(&complete))
}
