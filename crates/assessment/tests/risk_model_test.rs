//! Integration tests for the exposure risk model

use agent_exposure_assessment::risk::{self, MAX_SCORE, MIN_SCORE};
use agent_exposure_common::*;
use strum::IntoEnumIterator;

fn profile(
    autonomy: AutonomyLevel,
    tool_access: bool,
    public_input: bool,
    data_sensitivity: DataSensitivity,
    decision_impact: DecisionImpact,
) -> CompleteProfile {
    CompleteProfile {
        autonomy,
        tool_access,
        public_input,
        data_sensitivity,
        decision_impact,
    }
}

fn all_profiles() -> Vec<CompleteProfile> {
    let mut profiles = Vec::new();
    for autonomy in AutonomyLevel::iter() {
        for tool_access in [false, true] {
            for public_input in [false, true] {
                for data_sensitivity in DataSensitivity::iter() {
                    for decision_impact in DecisionImpact::iter() {
                        profiles.push(profile(
                            autonomy,
                            tool_access,
                            public_input,
                            data_sensitivity,
                            decision_impact,
                        ));
                    }
                }
            }
        }
    }
    profiles
}

#[test]
fn test_minimal_profile_scores_low() {
    let result = risk::assess(&profile(
        AutonomyLevel::HumanInTheLoop,
        false,
        false,
        DataSensitivity::Low,
        DecisionImpact::AdvisoryOnly,
    ));

    assert_eq!(result.score, 4);
    assert_eq!(result.exposure_tier, ExposureTier::Low);
    assert_eq!(
        result.controls,
        vec![
            "Prompt version control",
            "Logging and traceability",
            "Basic input validation",
        ]
    );
}

#[test]
fn test_maximal_profile_scores_high() {
    let result = risk::assess(&profile(
        AutonomyLevel::FullyAutonomous,
        true,
        true,
        DataSensitivity::High,
        DecisionImpact::AutomatedExecution,
    ));

    assert_eq!(result.score, 14);
    assert_eq!(result.exposure_tier, ExposureTier::High);
    assert_eq!(result.controls.len(), 5);
    assert_eq!(result.controls[0], "Policy enforcement gateway");
    assert_eq!(result.controls[4], "Audit and rollback capability");
}

#[test]
fn test_mixed_profile_scores_moderate() {
    let result = risk::assess(&profile(
        AutonomyLevel::SemiAutonomous,
        false,
        true,
        DataSensitivity::Moderate,
        DecisionImpact::OperationalInfluence,
    ));

    assert_eq!(result.score, 8);
    assert_eq!(result.exposure_tier, ExposureTier::Moderate);
    assert_eq!(
        result.controls,
        vec![
            "Guardrail layer (policy enforcement)",
            "Human approval for high-impact outputs",
            "Tool invocation restrictions",
            "Structured output validation",
        ]
    );
}

#[test]
fn test_every_profile_scores_within_range() {
    let profiles = all_profiles();
    assert_eq!(profiles.len(), 108);

    for p in &profiles {
        let score = risk::score(p);
        assert!((MIN_SCORE..=MAX_SCORE).contains(&score), "{:?} -> {}", p, score);
    }

    let scores: Vec<u8> = profiles.iter().map(risk::score).collect();
    assert_eq!(scores.iter().min(), Some(&MIN_SCORE));
    assert_eq!(scores.iter().max(), Some(&MAX_SCORE));
}

#[test]
fn test_tier_is_a_function_of_score_only() {
    for p in all_profiles() {
        let result = risk::assess(&p);
        let expected = match result.score {
            s if s <= 6 => ExposureTier::Low,
            s if s <= 11 => ExposureTier::Moderate,
            _ => ExposureTier::High,
        };
        assert_eq!(result.exposure_tier, expected);
        assert_eq!(result.controls, risk::controls(expected));
    }
}

#[test]
fn test_each_dimension_moves_score_by_its_weight() {
    for base in all_profiles() {
        let base_score = i16::from(risk::score(&base));

        if base.autonomy == AutonomyLevel::HumanInTheLoop {
            let bumped = CompleteProfile {
                autonomy: AutonomyLevel::SemiAutonomous,
                ..base
            };
            assert_eq!(i16::from(risk::score(&bumped)) - base_score, 1);
        }
        if base.autonomy == AutonomyLevel::SemiAutonomous {
            let bumped = CompleteProfile {
                autonomy: AutonomyLevel::FullyAutonomous,
                ..base
            };
            assert_eq!(i16::from(risk::score(&bumped)) - base_score, 1);
        }
        if !base.tool_access {
            let bumped = CompleteProfile {
                tool_access: true,
                ..base
            };
            assert_eq!(i16::from(risk::score(&bumped)) - base_score, 3);
        }
        if !base.public_input {
            let bumped = CompleteProfile {
                public_input: true,
                ..base
            };
            assert_eq!(i16::from(risk::score(&bumped)) - base_score, 2);
        }
        if base.data_sensitivity == DataSensitivity::Low {
            let bumped = CompleteProfile {
                data_sensitivity: DataSensitivity::Moderate,
                ..base
            };
            assert_eq!(i16::from(risk::score(&bumped)) - base_score, 1);
        }
        if base.decision_impact == DecisionImpact::OperationalInfluence {
            let bumped = CompleteProfile {
                decision_impact: DecisionImpact::AutomatedExecution,
                ..base
            };
            assert_eq!(i16::from(risk::score(&bumped)) - base_score, 1);
        }
    }
}

#[test]
fn test_breakdown_sums_to_score() {
    for p in all_profiles() {
        let breakdown = risk::score_breakdown(&p);
        let steps: Vec<Step> = breakdown.iter().map(|c| c.step).collect();
        assert_eq!(steps, Step::ALL.to_vec());
        assert_eq!(
            breakdown.iter().map(|c| c.points).sum::<u8>(),
            risk::score(&p)
        );
    }
}

#[test]
fn test_assessment_is_deterministic() {
    let p = profile(
        AutonomyLevel::FullyAutonomous,
        false,
        true,
        DataSensitivity::Low,
        DecisionImpact::AutomatedExecution,
    );
    assert_eq!(risk::assess(&p), risk::assess(&p));
}

#[test]
fn test_partial_profile_is_rejected() {
    let mut partial = AgentProfile::new();
    partial.set(Answer::Autonomy(AutonomyLevel::SemiAutonomous));

    let err = risk::compute_result(&partial).unwrap_err();
    match &err {
        ExposureError::IncompleteProfile { missing } => {
            assert_eq!(missing.len(), 4);
            assert_eq!(missing[0], Step::ToolAccess);
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(!err.is_recoverable());
}

#[test]
fn test_result_json_shape() {
    let result = risk::assess(&profile(
        AutonomyLevel::HumanInTheLoop,
        false,
        false,
        DataSensitivity::Low,
        DecisionImpact::AdvisoryOnly,
    ));

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["score"], 4);
    assert_eq!(value["exposureTier"], "Low");
    assert_eq!(value["controls"].as_array().unwrap().len(), 3);
}
