use agent_exposure_common::{
    AutonomyLevel, CompleteProfile, DataSensitivity, DecisionImpact, ExposureConfig,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exposure")]
#[command(about = "AI agent structural exposure assessment")]
pub struct Cli {
    /// Config file path
    #[arg(
        short,
        long,
        global = true,
        default_value = "exposure.toml",
        env = "EXPOSURE_CONFIG"
    )]
    pub config: PathBuf,

    /// Override the configured log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Fold command-line overrides into the loaded config before it is validated
    pub fn apply_overrides(&self, config: &mut ExposureConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(Commands::Assess(AssessArgs {
            server: Some(url), ..
        })) = &self.command
        {
            config.cli.server_url = Some(url.clone());
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer the five questions interactively (default)
    Wizard,

    /// Score a configuration given entirely on the command line
    Assess(AssessArgs),

    /// Print the questions and their options
    Questions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AssessArgs {
    /// human-in-the-loop, semi-autonomous or fully-autonomous
    #[arg(long)]
    pub autonomy: AutonomyLevel,

    /// Agent can call external APIs or tools
    #[arg(long)]
    pub tool_access: bool,

    /// Agent accepts public or untrusted input
    #[arg(long)]
    pub public_input: bool,

    /// low, moderate or high
    #[arg(long)]
    pub data_sensitivity: DataSensitivity,

    /// advisory, operational or automated
    #[arg(long)]
    pub decision_impact: DecisionImpact,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Score on a remote assessment server instead of locally
    #[arg(long)]
    pub server: Option<String>,
}

impl AssessArgs {
    pub fn profile(&self) -> CompleteProfile {
        CompleteProfile {
            autonomy: self.autonomy,
            tool_access: self.tool_access,
            public_input: self.public_input,
            data_sensitivity: self.data_sensitivity,
            decision_impact: self.decision_impact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assess_command() {
        let cli = Cli::try_parse_from([
            "exposure",
            "assess",
            "--autonomy",
            "semi-autonomous",
            "--public-input",
            "--data-sensitivity",
            "moderate",
            "--decision-impact",
            "operational",
        ])
        .unwrap();

        let Some(Commands::Assess(args)) = cli.command else {
            panic!("expected assess command");
        };
        let profile = args.profile();
        assert_eq!(profile.autonomy, AutonomyLevel::SemiAutonomous);
        assert!(!profile.tool_access);
        assert!(profile.public_input);
        assert_eq!(profile.data_sensitivity, DataSensitivity::Moderate);
        assert_eq!(profile.decision_impact, DecisionImpact::OperationalInfluence);
    }

    #[test]
    fn test_parse_rejects_unknown_option_value() {
        let result = Cli::try_parse_from([
            "exposure",
            "assess",
            "--autonomy",
            "reckless",
            "--data-sensitivity",
            "low",
            "--decision-impact",
            "advisory",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_server_override_is_validated_like_config() {
        let cli = Cli::try_parse_from([
            "exposure",
            "assess",
            "--autonomy",
            "hitl",
            "--data-sensitivity",
            "low",
            "--decision-impact",
            "advisory",
            "--server",
            "ftp://localhost:8080",
        ])
        .unwrap();

        let mut config = ExposureConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.cli.server_url.as_deref(), Some("ftp://localhost:8080"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_keep_config_server_without_flag() {
        let cli = Cli::try_parse_from(["exposure", "--log-level", "debug", "questions"]).unwrap();

        let mut config = ExposureConfig::default();
        config.cli.server_url = Some("http://assess.internal:8080".to_string());
        cli.apply_overrides(&mut config);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.cli.server_url.as_deref(),
            Some("http://assess.internal:8080")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_subcommand_means_wizard() {
        let cli = Cli::try_parse_from(["exposure"]).unwrap();
        assert!(cli.command.is_none());
    }
}
