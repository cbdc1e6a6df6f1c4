use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};
use serde_json::Value;
use tracing::{debug, info};

const HEALTH_PATH: &str = "/health";

/// Handle the check action
///
/// # Errors
/// Returns an error if the backend is unreachable or reports a failure status.
pub async fn handle(action: Action) -> Result<()> {
    let Action::Check { globals } = action else {
        return Err(anyhow!("invalid action for check"));
    };

    let status = execute(&globals).await?;
    println!("{status}");

    Ok(())
}

/// Calls the backend health endpoint and returns a one-line status summary.
///
/// # Errors
/// Returns the translated client error when the request fails.
pub async fn execute(globals: &GlobalArgs) -> Result<String> {
    let client = globals.client()?;
    debug!(api_url = %globals.api_url, "checking backend health");

    let body: Value = client
        .get(HEALTH_PATH)
        .await
        .map_err(|err| anyhow!("health check failed: {}", err.user_message(globals.locale)))?;

    let status = body
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("ok")
        .to_string();
    info!(status = %status, "backend healthy");

    Ok(format!("{}: {status}", globals.api_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[tokio::test]
    async fn test_healthy_backend() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start_async().await;
        let health_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/health");
                then.status(200).json_body(json!({"status": "up"}));
            })
            .await;

        let globals = GlobalArgs::new(server.url("/api/v1"));
        let summary = execute(&globals).await?;
        assert!(summary.ends_with(": up"));
        health_mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_unhealthy_backend_is_an_error() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/health");
                then.status(503);
            })
            .await;

        let globals = GlobalArgs::new(server.url("/api/v1"));
        let err = execute(&globals).await.unwrap_err();
        assert!(err.to_string().starts_with("health check failed"));
        Ok(())
    }
}
