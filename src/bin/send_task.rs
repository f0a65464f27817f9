use anyhow::Context;
use clap::Parser;
use serde_json::{json, Value};
use task_intake::ApiResponse;

/// Posts one task to a running task-intake endpoint, the way a shortcut would.
#[derive(Debug, Parser)]
#[command(name = "send_task")]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:3000/api/add-task")]
    endpoint: String,

    #[arg(long)]
    title: String,

    #[arg(long)]
    category: String,

    /// Sent as a JSON number when it parses as one, otherwise as a string.
    #[arg(long)]
    exec_month: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let args = Args::parse();
    let exec_month = args
        .exec_month
        .parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(args.exec_month.clone()));

    let payload = json!({
        "title": args.title,
        "category": args.category,
        "execMonth": exec_month,
    });
    tracing::debug!("Sending {} to {}", payload, args.endpoint);

    let response = reqwest::Client::new()
        .post(&args.endpoint)
        .json(&payload)
        .send()
        .await
        .with_context(|| format!("failed to reach {}", args.endpoint))?;

    let status = response.status();
    let reply: ApiResponse = response
        .json()
        .await
        .with_context(|| format!("endpoint answered {} without a JSON body", status))?;

    println!("{}", serde_json::to_string_pretty(&reply)?);

    if !reply.ok {
        tracing::error!("❌ Task was not created (HTTP {})", status);
        std::process::exit(1);
    }
    Ok(())
}
