//! # capsolver
//!
//! An async Rust client for the [CapSolver](https://capsolver.com) captcha-solving API.
//!
//! ## Features
//!
//! - **One-call solving**: `solve` creates the remote job and polls it to a
//!   terminal result with a configurable delay.
//! - **Typed task catalog**: every supported task shape is a variant of
//!   [`Task`], tagged exactly like the wire format.
//! - **Binary-friendly**: image fields take raw bytes and are base64-encoded
//!   automatically at serialization time.
//! - **Proxy Support**: HTTP and SOCKS5 proxy support with authentication.
//! - **Async/Await**: Built on Tokio; concurrent solves share one client.
//!
//! ## Quick Start
//!
//! ```ignore
//! use capsolver::{CapSolver, ImageData, ImageToTextTask, Task};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let solver = CapSolver::builder("CAI-XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")
//!         .verbose(true)
//!         .build()?;
//!
//!     let result = solver
//!         .solve(Task::ImageToTextTask(ImageToTextTask {
//!             // Raw bytes are converted to base64 for you.
//!             body: ImageData::Binary(std::fs::read("captcha.png")?),
//!             module: None,
//!             score: None,
//!         }))
//!         .await?;
//!
//!     if result.is_ready() {
//!         println!("text: {}", result.solution().unwrap()["text"]);
//!     } else {
//!         println!("failed: {:?}", result.error_description);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Bounding the wait
//!
//! `solve` polls until the backend reports a terminal state and never times
//! out on its own. Wrap it when you need a ceiling:
//!
//! ```ignore
//! let result = tokio::time::timeout(
//!     std::time::Duration::from_secs(120),
//!     solver.solve(task),
//! )
//! .await;
//! ```
//!
//! ## Individual operations
//!
//! The composed pieces are public too: `get_balance`, `create_task`,
//! `get_task_result` and `feedback_task` each map to one API endpoint.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod task;
pub mod transport;

// Re-exports for convenience
pub use client::{CapSolver, CapSolverBuilder};
pub use config::{ApiEndpoint, ClientConfig, DEFAULT_APP_ID, DEFAULT_POLL_DELAY};
pub use error::{CapSolverError, Result};
pub use models::{
    BalanceResponse, CreateTaskResponse, FeedbackResponse, FeedbackResult, SolveResult,
    TaskResultResponse,
};
pub use task::{
    AwsWafClassification, AwsWafTask, Cookie, DatadomeSliderTask, FriendlyCaptchaTask,
    GeeTestTask, GeeTestTaskProxyLess, ImageData, ImageToTextTask, MTCaptchaTask,
    ReCaptchaV2Classification, ReCaptchaV2EnterpriseTask, ReCaptchaV2EnterpriseTaskProxyLess,
    ReCaptchaV2Task, ReCaptchaV2TaskProxyLess, ReCaptchaV3EnterpriseTask,
    ReCaptchaV3EnterpriseTaskProxyLess, ReCaptchaV3Task, ReCaptchaV3TaskProxyLess, Task,
    TurnstileMetadata, TurnstileTask, VisionEngine, YandexCaptchaTask,
};
pub use transport::{HttpTransport, Transport};
