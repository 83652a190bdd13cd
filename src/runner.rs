// src/runner.rs
use log::info;
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::time::sleep;

use crate::args::CliArgs;
use crate::client::LitmusClient;
use crate::errors::{LitmusError, Result};
use crate::models::{RunRequest, RunStatus};
use crate::persist;

/// Creates a test run and returns its identifier.
pub async fn start_run(client: &LitmusClient, request: &RunRequest) -> Result<String> {
    let body = client.post_json("/api/testRuns", request).await?;

    info!("Response JSON: {body}");

    let run_id = extract_run_id(&body).ok_or(LitmusError::MissingRunId)?;

    info!("Run ID: {run_id}");

    Ok(run_id)
}

/// Fetches the current run snapshot. The full body is returned; the
/// poller extracts the status field itself.
pub async fn check_status(client: &LitmusClient, run_id: &str) -> Result<Value> {
    info!("Checking status");
    client.get_json(&format!("/api/testRuns/{run_id}")).await
}

/// Polls the run on a fixed interval until a terminal status is observed
/// or the attempt budget `timeout / interval` is spent. Each check is
/// preceded by one full-interval sleep, so the first status request goes
/// out `interval` seconds after the run was created.
pub async fn wait_for_terminal(
    client: &LitmusClient,
    run_id: &str,
    interval: u64,
    timeout: u64,
) -> Result<RunStatus> {
    // interval of 0 or interval > timeout leaves no checks at all; fail
    // fast before sleeping rather than reporting a misleading timeout.
    let max_attempts = timeout.checked_div(interval).unwrap_or(0);
    if max_attempts == 0 {
        return Err(LitmusError::NoPollingBudget { interval, timeout });
    }

    info!("Checking status in {interval} seconds...");

    for attempt in 1..=max_attempts {
        sleep(Duration::from_secs(interval)).await;

        let snapshot = check_status(client, run_id).await?;

        info!("{}", serde_json::to_string_pretty(&snapshot)?);

        let label = snapshot.get("status").and_then(Value::as_str);

        // Unknown or missing statuses are not terminal; keep polling.
        if let Some(status) = label.and_then(|s| s.parse::<RunStatus>().ok()) {
            if status.is_terminal() {
                return Ok(status);
            }
        }

        if attempt < max_attempts {
            info!(
                "Test is still running with status: {}. Checking again in {interval} seconds...",
                label.unwrap_or("UNKNOWN")
            );
        }
    }

    Err(LitmusError::Timeout { timeout })
}

/// Fetches the run's results in both formats: parsed JSON and raw HTML.
pub async fn fetch_results(client: &LitmusClient, run_id: &str) -> Result<(Value, String)> {
    let json = client
        .get_json(&format!("/api/testResults/{run_id}?format=json"))
        .await?;
    let html = client
        .get_text(&format!("/api/testResults/{run_id}?format=html"))
        .await?;
    Ok((json, html))
}

/// Drives one full run lifecycle: create, poll to a terminal status,
/// fetch both result artifacts, persist them, and report the elapsed
/// time and the online result URL.
pub async fn run(args: CliArgs) -> Result<()> {
    let start = Instant::now();

    let client = LitmusClient::new(args.base_url, args.api_key);
    let request = RunRequest::new(
        args.run_name,
        args.endpoint,
        args.test_suite,
        args.num_of_prompts,
    );

    println!("🚀 Starting Litmus test with the following data:");
    println!("{}", serde_json::to_string_pretty(&request)?);

    let run_id = start_run(&client, &request).await?;

    let final_status =
        wait_for_terminal(&client, &run_id, args.check_interval, args.timeout).await?;

    println!("✅ Test was completed, final status: {final_status}");

    println!("📥 Fetching results of the test");
    let (json, html) = fetch_results(&client, &run_id).await?;
    persist::save_results(std::path::Path::new(persist::RESULTS_DIR), &json, &html)?;

    println!(
        "⏱️  Test completed successfully in {}s. The result can be viewed online at {}/test-runs/{run_id}",
        start.elapsed().as_secs(),
        client.base_url().trim_end_matches('/'),
    );

    Ok(())
}

/// The creation response's `id` may arrive as a JSON string or number.
/// An empty string counts as missing.
fn extract_run_id(body: &Value) -> Option<String> {
    match body.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_run_id_from_string() {
        assert_eq!(extract_run_id(&json!({"id": "r1"})), Some("r1".to_string()));
    }

    #[test]
    fn test_extract_run_id_from_number() {
        assert_eq!(extract_run_id(&json!({"id": 42})), Some("42".to_string()));
    }

    #[test]
    fn test_extract_run_id_missing_or_empty() {
        assert_eq!(extract_run_id(&json!({})), None);
        assert_eq!(extract_run_id(&json!({"id": ""})), None);
        assert_eq!(extract_run_id(&json!({"id": null})), None);
    }
}
