//! Dataset Refresh Task
//!
//! Background task that periodically re-fetches the upstream country
//! dataset. A successful fetch replaces the in-memory dataset and clears
//! the response cache; a failed fetch keeps the previous dataset in
//! service.

use std::time::Duration;

use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::api::AppState;
use crate::dataset::fetch_countries;

/// Spawns a background task that periodically refreshes the dataset.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between fetches. The returned JoinHandle is used to abort the task
/// during graceful shutdown.
///
/// # Arguments
/// * `state` - Shared application state holding dataset and cache
/// * `client` - HTTP client used for the upstream fetch
/// * `upstream_url` - URL of the upstream country dataset
/// * `refresh_interval_secs` - Interval in seconds between fetches
pub fn spawn_refresh_task(
    state: AppState,
    client: Client,
    upstream_url: String,
    refresh_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(refresh_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting dataset refresh task with interval of {} seconds",
            refresh_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            match fetch_countries(&client, &upstream_url).await {
                Ok(countries) => {
                    let count = countries.len();
                    state.replace_dataset(countries).await;
                    info!("Dataset refresh: installed {} countries", count);
                }
                Err(err) => {
                    // Keep serving the previous dataset
                    warn!("Dataset refresh failed: {}", err);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LruCache;
    use axum::{routing::get, Json, Router};
    use std::time::Duration;

    fn test_state() -> AppState {
        AppState::new(LruCache::new(4).unwrap())
    }

    /// Serves a one-country dataset from a local listener and returns its
    /// base URL.
    async fn spawn_upstream_stub() -> String {
        let app = Router::new().route(
            "/v3.1/all",
            get(|| async {
                Json(serde_json::json!([
                    {"name": {"common": "France", "official": "French Republic"}, "cca2": "FR"}
                ]))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v3.1/all", addr)
    }

    #[tokio::test]
    async fn test_refresh_task_installs_fetched_dataset() {
        let state = test_state();
        let url = spawn_upstream_stub().await;

        let handle = spawn_refresh_task(state.clone(), Client::new(), url, 1);

        // Wait for at least one refresh cycle
        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let dataset = state.dataset.read().await;
            assert_eq!(dataset.len(), 1);
            assert_eq!(dataset[0].name, "France");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_refresh_clears_memoized_responses() {
        let state = test_state();
        state
            .cache
            .write()
            .await
            .set("GET /countries".to_string(), serde_json::json!([]));
        let url = spawn_upstream_stub().await;

        let handle = spawn_refresh_task(state.clone(), Client::new(), url, 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(state.cache.read().await.is_empty());
        handle.abort();
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_dataset() {
        let state = test_state();
        state
            .replace_dataset(vec![crate::models::Country {
                name: "Japan".to_string(),
                ..Default::default()
            }])
            .await;

        // Nothing listens on this port; every fetch fails
        let handle = spawn_refresh_task(
            state.clone(),
            Client::new(),
            "http://127.0.0.1:9/v3.1/all".to_string(),
            1,
        );
        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let dataset = state.dataset.read().await;
            assert_eq!(dataset.len(), 1);
            assert_eq!(dataset[0].name, "Japan");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_refresh_task_can_be_aborted() {
        let state = test_state();
        let handle = spawn_refresh_task(
            state,
            Client::new(),
            "http://127.0.0.1:9/v3.1/all".to_string(),
            1,
        );

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
