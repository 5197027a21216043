//! Example: balance check, then an image-to-text solve.
//!
//! Run with: cargo run --example solve_image

use capsolver::{CapSolver, ImageData, ImageToTextTask, Task};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing so verbose progress lines are visible
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let solver = CapSolver::builder("CAI-XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX")
        .verbose(true)
        .verbose_identifier("[Image Solve]")
        .build()?;

    let balance = solver.get_balance().await?;
    if balance.balance.unwrap_or(0.0) <= 0.0 {
        println!("Insufficient balance.");
        return Ok(());
    }

    let result = solver
        .solve(Task::ImageToTextTask(ImageToTextTask {
            // Raw bytes are base64-encoded automatically.
            body: ImageData::Binary(std::fs::read("captcha.png")?),
            module: None,
            score: None,
        }))
        .await?;

    if result.is_ready() {
        println!("text: {}", result.solution().unwrap()["text"]);
    } else {
        println!(
            "failed: {} ({})",
            result.error_code.as_deref().unwrap_or("?"),
            result.error_description.as_deref().unwrap_or("no description")
        );
    }

    Ok(())
}
