//! Example: proxyless reCAPTCHA v2 token, with validity feedback.
//!
//! Run with: cargo run --example recaptcha

use capsolver::{CapSolver, FeedbackResult, ReCaptchaV2TaskProxyLess, Task};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let solver = CapSolver::builder("CAI-XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")
        .verbose(true)
        .build()?;

    let result = solver
        .solve(Task::ReCaptchaV2TaskProxyLess(ReCaptchaV2TaskProxyLess {
            website_url: "https://www.google.com/recaptcha/api2/demo".into(),
            website_key: "6Le-wvkSAAAAAPBMRTvw0Q4Muexq9bi0DJwx_mJ-".into(),
            page_action: None,
            is_invisible: None,
            cookies: None,
        }))
        .await?;

    if !result.is_ready() {
        println!("failed: {:?}", result.error_description);
        return Ok(());
    }

    let token = &result.solution().unwrap()["gRecaptchaResponse"];
    println!("token: {token}");

    // Suppose the target site rejected the token; report it back.
    if let Some(task_id) = result.task_id.as_deref() {
        let ack = solver
            .feedback_task(task_id, &FeedbackResult::invalid(None, Some("rejected".into())))
            .await?;
        println!("feedback: {}", ack.message.as_deref().unwrap_or("ok"));
    }

    Ok(())
}
