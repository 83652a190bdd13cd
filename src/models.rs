// src/models.rs
use serde::Serialize;
use std::str::FromStr;

/// POST body for run creation. Built once from the CLI arguments and sent
/// as-is; the service dictates the field names.
#[derive(Serialize, Debug, Clone)]
pub struct RunRequest {
    pub run_name: String,
    pub endpoint: String,
    pub test_suites: Vec<String>,
    pub num_of_prompts: String,
}

impl RunRequest {
    pub fn new(run_name: String, endpoint: String, test_suite: String, num_of_prompts: String) -> Self {
        Self {
            run_name,
            endpoint,
            test_suites: vec![test_suite],
            num_of_prompts,
        }
    }
}

/// Server-side lifecycle states of a test run. The client only observes
/// these; transitions are entirely server-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    New,
    Queued,
    Running,
    Completed,
    Aborted,
    Errored,
    Skipped,
}

impl RunStatus {
    /// Whether the run will not change state further.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunStatus::Completed | RunStatus::Aborted | RunStatus::Errored | RunStatus::Skipped
        )
    }
}

impl FromStr for RunStatus {
    type Err = ();

    /// Exact wire names only. Unknown strings are not an error to the
    /// poller; it treats them as not-yet-terminal.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(RunStatus::New),
            "QUEUED" => Ok(RunStatus::Queued),
            "RUNNING" => Ok(RunStatus::Running),
            "COMPLETED" => Ok(RunStatus::Completed),
            "ABORTED" => Ok(RunStatus::Aborted),
            "ERRORED" => Ok(RunStatus::Errored),
            "SKIPPED" => Ok(RunStatus::Skipped),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RunStatus::New => "NEW",
            RunStatus::Queued => "QUEUED",
            RunStatus::Running => "RUNNING",
            RunStatus::Completed => "COMPLETED",
            RunStatus::Aborted => "ABORTED",
            RunStatus::Errored => "ERRORED",
            RunStatus::Skipped => "SKIPPED",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_partition() {
        for s in ["COMPLETED", "ABORTED", "ERRORED", "SKIPPED"] {
            assert!(s.parse::<RunStatus>().unwrap().is_terminal(), "{s}");
        }
        for s in ["NEW", "QUEUED", "RUNNING"] {
            assert!(!s.parse::<RunStatus>().unwrap().is_terminal(), "{s}");
        }
    }

    #[test]
    fn test_unknown_status_does_not_parse() {
        assert!("PAUSED".parse::<RunStatus>().is_err());
        assert!("completed".parse::<RunStatus>().is_err());
    }

    #[test]
    fn test_display_round_trips_wire_names() {
        assert_eq!(RunStatus::Running.to_string(), "RUNNING");
        assert_eq!(RunStatus::Skipped.to_string(), "SKIPPED");
    }

    #[test]
    fn test_run_request_wraps_single_suite() {
        let req = RunRequest::new(
            "My Run".into(),
            "my-endpoint-1".into(),
            "baseline".into(),
            "5".into(),
        );
        assert_eq!(req.test_suites, vec!["baseline".to_string()]);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["num_of_prompts"], "5");
        assert_eq!(body["test_suites"][0], "baseline");
    }
}
