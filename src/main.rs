use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use ssm_api_proxy::handler::function_handler;
use ssm_api_proxy::http::HTTP_CLIENT;
use ssm_api_proxy::secrets::SsmSecretResolver;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let resolver = SsmSecretResolver::new(sdk_config);
    let resolver = &resolver;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(event, resolver, &*HTTP_CLIENT).await
    }))
    .await
}
