use crate::api_client::ApiClient;
use crate::display;
use agent_exposure_assessment::risk;
use agent_exposure_common::{CompleteProfile, OutputFormat};

/// Score one profile and print it, locally or through a running server
pub async fn execute(
    profile: &CompleteProfile,
    output: OutputFormat,
    server: Option<&str>,
) -> anyhow::Result<()> {
    let (result, breakdown) = match server {
        Some(url) => (ApiClient::new(url).assess(profile).await?, None),
        None => (risk::assess(profile), Some(risk::score_breakdown(profile))),
    };

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!(
            "{}",
            display::render_result(&result, breakdown.as_ref().map(|b| &b[..]))
        ),
    }
    Ok(())
}
