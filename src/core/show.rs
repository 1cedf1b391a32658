use crate::adapters::http::SpreakerClient;
use crate::domain::model::{Page, Show, Target};
use crate::domain::ports::Resource;
use crate::utils::error::Result;

pub async fn fetch_episodes(client: &SpreakerClient, show_id: u64) -> Result<Page<u64>> {
    client
        .get_page(&["shows", &show_id.to_string(), "episodes"], "episode_id")
        .await
}

#[async_trait::async_trait]
impl Resource for Show {
    async fn fetch(client: &SpreakerClient, target: &Target) -> Result<Self> {
        let payload = client
            .get_entity(&["shows", &target.to_string()], "show")
            .await?;
        let mut show: Show = serde_json::from_value(payload)?;

        match show.show_id {
            Some(show_id) => {
                show.episodes_ids = fetch_episodes(client, show_id).await?.items;
                tracing::info!(
                    "Fetched show {} ({} episodes on first page)",
                    show_id,
                    show.episodes_ids.len()
                );
            }
            None => tracing::warn!("Show '{}' has no show_id, skipping episodes", target),
        }

        Ok(show)
    }
}
