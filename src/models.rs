//! Response models for the CapSolver API.
//!
//! Every response carries the error trio: `errorId` (0 = success,
//! 1 = failure, the authoritative flag), `errorCode` and
//! `errorDescription`. Solution payloads stay opaque `Value`s; their
//! shape depends on the task type and is documented by the service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response from `/createTask`.
///
/// A pending creation carries `task_id` for polling; recognition tasks
/// the backend resolves synchronously come back with `status == "ready"`
/// and the solution embedded instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskResponse {
    #[serde(default)]
    pub error_id: i32,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    /// `"ready"` or null.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub solution: Option<Value>,
    #[serde(default)]
    pub task_id: Option<String>,
}

impl CreateTaskResponse {
    /// Whether the backend reported a failure.
    pub fn is_error(&self) -> bool {
        self.error_id == 1
    }

    /// Whether the job resolved inside the creation call.
    pub fn is_ready(&self) -> bool {
        self.status.as_deref() == Some("ready")
    }
}

/// Response from `/getTaskResult`.
///
/// `status: null` with `errorId: 0` means the job is still pending.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResultResponse {
    #[serde(default)]
    pub error_id: i32,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub solution: Option<Value>,
}

impl TaskResultResponse {
    pub fn is_error(&self) -> bool {
        self.error_id == 1
    }

    pub fn is_ready(&self) -> bool {
        self.status.as_deref() == Some("ready")
    }
}

/// Response from `/feedbackTask`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    #[serde(default)]
    pub error_id: i32,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FeedbackResponse {
    pub fn is_error(&self) -> bool {
        self.error_id == 1
    }
}

/// Response from `/getBalance`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    #[serde(default)]
    pub error_id: i32,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    /// Remaining balance in USD.
    #[serde(default)]
    pub balance: Option<f64>,
    /// Active monthly/weekly packages, opaque.
    #[serde(default)]
    pub packages: Vec<Value>,
}

impl BalanceResponse {
    pub fn is_error(&self) -> bool {
        self.error_id == 1
    }
}

/// Validity feedback reported back for a completed job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    /// Whether the returned solution failed validation on the target site.
    pub invalid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FeedbackResult {
    /// Report a solution that passed.
    pub fn valid() -> Self {
        Self {
            invalid: false,
            code: None,
            message: None,
        }
    }

    /// Report a solution the target site rejected.
    pub fn invalid(code: Option<i64>, message: Option<String>) -> Self {
        Self {
            invalid: true,
            code,
            message,
        }
    }
}

/// Terminal outcome of [`solve`](crate::CapSolver::solve).
///
/// Backend failures arrive here as values (`error_id == 1`) rather than
/// as `Err`, exactly as the service reported them. `task_id` is present
/// whenever a remote job was created, including for failed polls, so the
/// id can still be fed to `feedbackTask`.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub error_id: i32,
    pub error_code: Option<String>,
    pub error_description: Option<String>,
    pub status: Option<String>,
    pub solution: Option<Value>,
    pub task_id: Option<String>,
}

impl SolveResult {
    /// Whether the backend reported a failure.
    pub fn is_error(&self) -> bool {
        self.error_id == 1
    }

    /// Whether the job resolved with a solution.
    pub fn is_ready(&self) -> bool {
        self.status.as_deref() == Some("ready")
    }

    /// The solution payload, when the job resolved.
    pub fn solution(&self) -> Option<&Value> {
        self.solution.as_ref()
    }

    /// The locally synthesized result for a missing task, returned
    /// without any network call.
    pub(crate) fn invalid_task_data() -> Self {
        Self {
            error_id: 1,
            error_code: Some("ERROR_INVALID_TASK_DATA".to_string()),
            error_description: Some("Missing task data.".to_string()),
            status: None,
            solution: None,
            task_id: None,
        }
    }

    pub(crate) fn from_poll(result: TaskResultResponse, task_id: String) -> Self {
        Self {
            error_id: result.error_id,
            error_code: result.error_code,
            error_description: result.error_description,
            status: result.status,
            solution: result.solution,
            task_id: Some(task_id),
        }
    }
}

impl From<CreateTaskResponse> for SolveResult {
    fn from(response: CreateTaskResponse) -> Self {
        Self {
            error_id: response.error_id,
            error_code: response.error_code,
            error_description: response.error_description,
            status: response.status,
            solution: response.solution,
            task_id: response.task_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pending_result_is_neither_ready_nor_error() {
        let response: TaskResultResponse =
            serde_json::from_value(json!({"errorId": 0, "status": null})).unwrap();
        assert!(!response.is_ready());
        assert!(!response.is_error());
        assert!(response.solution.is_none());
    }

    #[test]
    fn test_ready_result_carries_solution() {
        let response: TaskResultResponse = serde_json::from_value(json!({
            "errorId": 0,
            "status": "ready",
            "solution": {"text": "w9h5k"}
        }))
        .unwrap();
        assert!(response.is_ready());
        assert_eq!(response.solution.unwrap()["text"], "w9h5k");
    }

    #[test]
    fn test_error_flag_is_authoritative_regardless_of_status() {
        // errorId decides the outcome even with a stray status value.
        let response: TaskResultResponse = serde_json::from_value(json!({
            "errorId": 1,
            "errorCode": "ERROR_CAPTCHA_UNSOLVABLE",
            "errorDescription": "Could not be solved",
            "status": "ready"
        }))
        .unwrap();
        assert!(response.is_error());
    }

    #[test]
    fn test_create_response_with_task_id() {
        let response: CreateTaskResponse = serde_json::from_value(json!({
            "errorId": 0,
            "taskId": "37223a89-06ed-442c-a0b8-22067b79c5b4"
        }))
        .unwrap();
        assert!(!response.is_error());
        assert!(!response.is_ready());
        assert_eq!(
            response.task_id.as_deref(),
            Some("37223a89-06ed-442c-a0b8-22067b79c5b4")
        );
    }

    #[test]
    fn test_balance_response_defaults() {
        let response: BalanceResponse =
            serde_json::from_value(json!({"errorId": 0, "balance": 4.25})).unwrap();
        assert_eq!(response.balance, Some(4.25));
        assert!(response.packages.is_empty());
    }

    #[test]
    fn test_feedback_result_wire_shape() {
        let value =
            serde_json::to_value(FeedbackResult::invalid(Some(1001), Some("token expired".into())))
                .unwrap();
        assert_eq!(
            value,
            json!({"invalid": true, "code": 1001, "message": "token expired"})
        );

        let value = serde_json::to_value(FeedbackResult::valid()).unwrap();
        assert_eq!(value, json!({"invalid": false}));
    }

    #[test]
    fn test_invalid_task_data_shape() {
        let result = SolveResult::invalid_task_data();
        assert!(result.is_error());
        assert_eq!(result.error_code.as_deref(), Some("ERROR_INVALID_TASK_DATA"));
        assert_eq!(result.error_description.as_deref(), Some("Missing task data."));
        assert!(result.task_id.is_none());
    }
}
