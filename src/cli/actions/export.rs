use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};
use consulta_client::{pagination::collect_all, Locale};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;
use tracing::info;

/// Page size used while walking a collection.
const EXPORT_PAGE_SIZE: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Pages,
    Services,
    Posts,
    Categories,
    UseCases,
}

impl FromStr for Collection {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "pages" => Ok(Self::Pages),
            "services" => Ok(Self::Services),
            "posts" => Ok(Self::Posts),
            "categories" => Ok(Self::Categories),
            "use-cases" => Ok(Self::UseCases),
            other => Err(anyhow!("unknown collection: {other}")),
        }
    }
}

/// Handle the export action
///
/// # Errors
/// Returns an error if any page fails to load or the items cannot be serialized.
pub async fn handle(action: Action) -> Result<()> {
    let Action::Export {
        globals,
        collection,
    } = action
    else {
        return Err(anyhow!("invalid action for export"));
    };

    let items = execute(&globals, collection).await?;
    println!("{}", serde_json::to_string_pretty(&items)?);

    Ok(())
}

/// Loads every item of `collection` as a JSON array.
///
/// # Errors
/// Returns the translated client error for the first failing page.
pub async fn execute(globals: &GlobalArgs, collection: Collection) -> Result<Value> {
    let client = globals.client()?;
    let client = &client;
    let locale = client.locale();

    let items = match collection {
        Collection::Pages => to_json(
            collect_all(EXPORT_PAGE_SIZE, move |page| async move {
                client.pages().list(&page).await
            })
            .await,
            locale,
        )?,
        Collection::Services => to_json(
            collect_all(EXPORT_PAGE_SIZE, move |page| async move {
                client.services().list(&page).await
            })
            .await,
            locale,
        )?,
        Collection::Posts => to_json(
            collect_all(EXPORT_PAGE_SIZE, move |page| async move {
                client.blog_posts().list(&page).await
            })
            .await,
            locale,
        )?,
        Collection::Categories => to_json(
            collect_all(EXPORT_PAGE_SIZE, move |page| async move {
                client.blog_categories().list(&page).await
            })
            .await,
            locale,
        )?,
        Collection::UseCases => to_json(
            collect_all(EXPORT_PAGE_SIZE, move |page| async move {
                client.use_cases().list(&page).await
            })
            .await,
            locale,
        )?,
    };

    info!(
        collection = ?collection,
        count = items.as_array().map_or(0, Vec::len),
        "export complete"
    );
    Ok(items)
}

fn to_json<T: Serialize>(items: consulta_client::Result<Vec<T>>, locale: Locale) -> Result<Value> {
    let items = items.map_err(|err| anyhow!("export failed: {}", err.user_message(locale)))?;
    Ok(serde_json::to_value(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn use_case(slug: &str) -> Value {
        json!({
            "id": format!("id-{slug}"),
            "slug": slug,
            "title": slug,
            "industry": "Finance",
            "challenge": "",
            "solution": "",
            "results": "",
            "is_featured": false
        })
    }

    #[test]
    fn test_collection_from_str() {
        assert_eq!("use-cases".parse::<Collection>().unwrap(), Collection::UseCases);
        assert_eq!("pages".parse::<Collection>().unwrap(), Collection::Pages);
        assert!("orders".parse::<Collection>().is_err());
    }

    #[tokio::test]
    async fn test_export_walks_every_page() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start_async().await;
        let first = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/use-cases").query_param("page", "1");
                then.status(200).json_body(json!({
                    "items": [use_case("retail")],
                    "total": 101,
                    "page": 1,
                    "per_page": 100
                }));
            })
            .await;
        let second = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/use-cases").query_param("page", "2");
                then.status(200).json_body(json!({
                    "items": [use_case("banking")],
                    "total": 101,
                    "page": 2,
                    "per_page": 100
                }));
            })
            .await;

        let globals = GlobalArgs::new(server.url("/api/v1"));
        let items = execute(&globals, Collection::UseCases).await?;
        let slugs: Vec<&str> = items
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|item| item.get("slug").and_then(Value::as_str))
            .collect();
        assert_eq!(slugs, vec!["retail", "banking"]);
        first.assert_async().await;
        second.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_export_sends_token() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start_async().await;
        let pages_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/cms/pages")
                    .header("authorization", "Bearer access");
                then.status(200).json_body(json!({
                    "items": [],
                    "total": 0,
                    "page": 1,
                    "per_page": 100
                }));
            })
            .await;

        let mut globals = GlobalArgs::new(server.url("/api/v1"));
        globals.set_token(secrecy::SecretString::from("access"));
        let items = execute(&globals, Collection::Pages).await?;
        assert_eq!(items, json!([]));
        pages_mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_export_failure_is_reported() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/services");
                then.status(500);
            })
            .await;

        let globals = GlobalArgs::new(server.url("/api/v1"));
        let err = execute(&globals, Collection::Services).await.unwrap_err();
        assert!(err.to_string().starts_with("export failed"));
        Ok(())
    }
}
