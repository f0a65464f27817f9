use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;
use task_intake::adapters::lambda::{handle_proxy_event, ProxyRequest, ProxyResponse};
use task_intake::utils::{logger, validation::Validate};
use task_intake::{NotionConfig, NotionSink, TaskHandler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = NotionConfig::from_env();
    config.validate()?;

    let handler = Arc::new(TaskHandler::new(NotionSink::new(&config), config));
    tracing::info!("Starting task-intake Lambda function");

    run(service_fn(move |event: LambdaEvent<ProxyRequest>| {
        let handler = Arc::clone(&handler);
        async move { Ok::<ProxyResponse, Error>(handle_proxy_event(&*handler, &event.payload).await) }
    }))
    .await
}
