use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::error::{ExposureError, Result};

/// Unique identifier for an assessment session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ExposureError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ExposureError::SessionNotFound(s.to_string()))
    }
}

/// How independently the agent acts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum AutonomyLevel {
    #[strum(
        to_string = "Human-in-the-loop",
        serialize = "HumanInTheLoop",
        serialize = "hitl",
        serialize = "human"
    )]
    HumanInTheLoop,
    #[strum(
        to_string = "Semi-autonomous",
        serialize = "SemiAutonomous",
        serialize = "semi"
    )]
    SemiAutonomous,
    #[strum(
        to_string = "Fully autonomous",
        serialize = "FullyAutonomous",
        serialize = "fully-autonomous",
        serialize = "full"
    )]
    FullyAutonomous,
}

/// Nature of the data the agent processes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum DataSensitivity {
    #[strum(to_string = "Low (non-sensitive)", serialize = "Low")]
    Low,
    #[strum(to_string = "Moderate (internal business data)", serialize = "Moderate")]
    Moderate,
    #[strum(to_string = "High (regulated / confidential)", serialize = "High")]
    High,
}

/// How far agent outputs reach into business actions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum DecisionImpact {
    #[strum(
        to_string = "Advisory only",
        serialize = "AdvisoryOnly",
        serialize = "advisory"
    )]
    AdvisoryOnly,
    #[strum(
        to_string = "Operational influence",
        serialize = "OperationalInfluence",
        serialize = "operational"
    )]
    OperationalInfluence,
    #[strum(
        to_string = "Automated execution",
        serialize = "AutomatedExecution",
        serialize = "automated"
    )]
    AutomatedExecution,
}

/// Three-level risk category derived from the composite score
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter, Display,
)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum ExposureTier {
    Low,
    Moderate,
    High,
}

/// One question of the questionnaire, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Step {
    Autonomy,
    ToolAccess,
    PublicInput,
    DataSensitivity,
    DecisionImpact,
}

impl Step {
    pub const FIRST: Step = Step::Autonomy;
    pub const ALL: [Step; 5] = [
        Step::Autonomy,
        Step::ToolAccess,
        Step::PublicInput,
        Step::DataSensitivity,
        Step::DecisionImpact,
    ];

    /// 1-based position of the step
    pub fn number(self) -> u8 {
        match self {
            Step::Autonomy => 1,
            Step::ToolAccess => 2,
            Step::PublicInput => 3,
            Step::DataSensitivity => 4,
            Step::DecisionImpact => 5,
        }
    }

    pub fn from_number(number: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(number).wrapping_sub(1))
            .copied()
            .ok_or_else(|| {
                ExposureError::validation(format!("step must be between 1 and 5, got {}", number))
            })
    }

    /// Where `advance` lands from this step
    pub fn next(self) -> StepPosition {
        match self {
            Step::Autonomy => StepPosition::Question(Step::ToolAccess),
            Step::ToolAccess => StepPosition::Question(Step::PublicInput),
            Step::PublicInput => StepPosition::Question(Step::DataSensitivity),
            Step::DataSensitivity => StepPosition::Question(Step::DecisionImpact),
            Step::DecisionImpact => StepPosition::Results,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Autonomy => None,
            Step::ToolAccess => Some(Step::Autonomy),
            Step::PublicInput => Some(Step::ToolAccess),
            Step::DataSensitivity => Some(Step::PublicInput),
            Step::DecisionImpact => Some(Step::DataSensitivity),
        }
    }

    /// Whether the step takes a yes/no answer
    pub fn is_flag(self) -> bool {
        matches!(self, Step::ToolAccess | Step::PublicInput)
    }
}

/// Position of a session in the linear questionnaire chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepPosition {
    Question(Step),
    Results,
}

impl StepPosition {
    pub fn step(self) -> Option<Step> {
        match self {
            StepPosition::Question(step) => Some(step),
            StepPosition::Results => None,
        }
    }

    pub fn is_results(self) -> bool {
        matches!(self, StepPosition::Results)
    }
}

impl Default for StepPosition {
    fn default() -> Self {
        StepPosition::Question(Step::FIRST)
    }
}

impl fmt::Display for StepPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepPosition::Question(step) => write!(f, "step {} ({})", step.number(), step),
            StepPosition::Results => write!(f, "results"),
        }
    }
}

/// Serialized as the step number, or `"results"`
impl Serialize for StepPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            StepPosition::Question(step) => serializer.serialize_u8(step.number()),
            StepPosition::Results => serializer.serialize_str("results"),
        }
    }
}

/// A typed answer to one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Autonomy(AutonomyLevel),
    ToolAccess(bool),
    PublicInput(bool),
    DataSensitivity(DataSensitivity),
    DecisionImpact(DecisionImpact),
}

impl Answer {
    pub fn step(&self) -> Step {
        match self {
            Answer::Autonomy(_) => Step::Autonomy,
            Answer::ToolAccess(_) => Step::ToolAccess,
            Answer::PublicInput(_) => Step::PublicInput,
            Answer::DataSensitivity(_) => Step::DataSensitivity,
            Answer::DecisionImpact(_) => Step::DecisionImpact,
        }
    }

    /// Parse raw text into an answer for `step`.
    ///
    /// Enum steps accept the option label, the variant name or a short alias;
    /// flag steps accept yes/no style words. Matching ignores ASCII case.
    pub fn parse(step: Step, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let invalid = || {
            ExposureError::validation(format!("'{}' is not a valid answer for {}", raw, step))
        };

        match step {
            Step::Autonomy => AutonomyLevel::from_str(raw)
                .map(Answer::Autonomy)
                .map_err(|_| invalid()),
            Step::ToolAccess => parse_flag(raw).map(Answer::ToolAccess).ok_or_else(invalid),
            Step::PublicInput => parse_flag(raw).map(Answer::PublicInput).ok_or_else(invalid),
            Step::DataSensitivity => DataSensitivity::from_str(raw)
                .map(Answer::DataSensitivity)
                .map_err(|_| invalid()),
            Step::DecisionImpact => DecisionImpact::from_str(raw)
                .map(Answer::DecisionImpact)
                .map_err(|_| invalid()),
        }
    }

    /// Decode a JSON answer for `step`: a boolean for flag steps, a string otherwise.
    pub fn from_json(step: Step, value: &serde_json::Value) -> Result<Self> {
        match (value, step.is_flag()) {
            (serde_json::Value::Bool(flag), true) => Ok(match step {
                Step::ToolAccess => Answer::ToolAccess(*flag),
                _ => Answer::PublicInput(*flag),
            }),
            (serde_json::Value::String(raw), _) => Self::parse(step, raw),
            (other, _) => Err(ExposureError::validation(format!(
                "{} is not a valid answer for {}",
                other, step
            ))),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Autonomy(level) => write!(f, "{}", level),
            Answer::ToolAccess(flag) | Answer::PublicInput(flag) => {
                write!(f, "{}", if *flag { "Yes" } else { "No" })
            }
            Answer::DataSensitivity(level) => write!(f, "{}", level),
            Answer::DecisionImpact(level) => write!(f, "{}", level),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

/// Answer set built step by step; any field may still be unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    #[serde(default)]
    pub autonomy: Option<AutonomyLevel>,
    #[serde(default)]
    pub tool_access: Option<bool>,
    #[serde(default)]
    pub public_input: Option<bool>,
    #[serde(default)]
    pub data_sensitivity: Option<DataSensitivity>,
    #[serde(default)]
    pub decision_impact: Option<DecisionImpact>,
}

impl AgentProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, step: Step) -> Option<Answer> {
        match step {
            Step::Autonomy => self.autonomy.map(Answer::Autonomy),
            Step::ToolAccess => self.tool_access.map(Answer::ToolAccess),
            Step::PublicInput => self.public_input.map(Answer::PublicInput),
            Step::DataSensitivity => self.data_sensitivity.map(Answer::DataSensitivity),
            Step::DecisionImpact => self.decision_impact.map(Answer::DecisionImpact),
        }
    }

    /// Decode a profile object field by field with [`Answer::from_json`].
    ///
    /// Accepts the same labels and aliases as a single answer. Absent or
    /// `null` fields stay unset; unknown keys are ignored.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let fields = value.as_object().ok_or_else(|| {
            ExposureError::validation(format!("profile must be a JSON object, got {}", value))
        })?;

        let mut profile = Self::new();
        for step in Step::ALL {
            match fields.get(&step.to_string()) {
                None | Some(serde_json::Value::Null) => {}
                Some(raw) => profile.set(Answer::from_json(step, raw)?),
            }
        }
        Ok(profile)
    }

    pub fn set(&mut self, answer: Answer) {
        match answer {
            Answer::Autonomy(value) => self.autonomy = Some(value),
            Answer::ToolAccess(value) => self.tool_access = Some(value),
            Answer::PublicInput(value) => self.public_input = Some(value),
            Answer::DataSensitivity(value) => self.data_sensitivity = Some(value),
            Answer::DecisionImpact(value) => self.decision_impact = Some(value),
        }
    }

    pub fn is_answered(&self, step: Step) -> bool {
        self.get(step).is_some()
    }

    /// Unanswered steps, in questionnaire order
    pub fn missing(&self) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|step| !self.is_answered(*step))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        Step::ALL.iter().all(|step| self.is_answered(*step))
    }
}

/// Answer set with every field present; the only input the risk model accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CompleteProfile {
    pub autonomy: AutonomyLevel,
    pub tool_access: bool,
    pub public_input: bool,
    pub data_sensitivity: DataSensitivity,
    pub decision_impact: DecisionImpact,
}

impl TryFrom<&AgentProfile> for CompleteProfile {
    type Error = ExposureError;

    fn try_from(profile: &AgentProfile) -> Result<Self> {
        match (
            profile.autonomy,
            profile.tool_access,
            profile.public_input,
            profile.data_sensitivity,
            profile.decision_impact,
        ) {
            (
                Some(autonomy),
                Some(tool_access),
                Some(public_input),
                Some(data_sensitivity),
                Some(decision_impact),
            ) => Ok(Self {
                autonomy,
                tool_access,
                public_input,
                data_sensitivity,
                decision_impact,
            }),
            _ => Err(ExposureError::IncompleteProfile {
                missing: profile.missing(),
            }),
        }
    }
}

impl TryFrom<AgentProfile> for CompleteProfile {
    type Error = ExposureError;

    fn try_from(profile: AgentProfile) -> Result<Self> {
        Self::try_from(&profile)
    }
}

impl From<CompleteProfile> for AgentProfile {
    fn from(profile: CompleteProfile) -> Self {
        Self {
            autonomy: Some(profile.autonomy),
            tool_access: Some(profile.tool_access),
            public_input: Some(profile.public_input),
            data_sensitivity: Some(profile.data_sensitivity),
            decision_impact: Some(profile.decision_impact),
        }
    }
}

/// Score, tier and recommended controls for one complete profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub score: u8,
    pub exposure_tier: ExposureTier,
    pub controls: Vec<String>,
}
