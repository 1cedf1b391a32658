use crate::adapters::http::SpreakerClient;
use crate::domain::model::{Page, Target, User};
use crate::domain::ports::Resource;
use crate::utils::error::Result;

pub async fn fetch_followers(client: &SpreakerClient, user_id: u64) -> Result<Page<u64>> {
    client
        .get_page(&["users", &user_id.to_string(), "followers"], "user_id")
        .await
}

pub async fn fetch_followings(client: &SpreakerClient, user_id: u64) -> Result<Page<u64>> {
    client
        .get_page(&["users", &user_id.to_string(), "followings"], "user_id")
        .await
}

pub async fn fetch_shows(client: &SpreakerClient, user_id: u64) -> Result<Page<u64>> {
    client
        .get_page(&["users", &user_id.to_string(), "shows"], "show_id")
        .await
}

/// 只取得基本資料，不抓 followers / followings / shows
pub async fn fetch_profile(client: &SpreakerClient, target: &Target) -> Result<User> {
    let payload = client
        .get_entity(&["users", &target.to_string()], "user")
        .await?;
    Ok(serde_json::from_value(payload)?)
}

#[async_trait::async_trait]
impl Resource for User {
    async fn fetch(client: &SpreakerClient, target: &Target) -> Result<Self> {
        let mut user = fetch_profile(client, target).await?;

        // 列表 endpoint 一律使用數字 user_id，不用 slug
        let Some(user_id) = user.user_id else {
            tracing::warn!("User '{}' has no user_id, skipping follower lists", target);
            return Ok(user);
        };

        user.followers_ids = fetch_followers(client, user_id).await?.items;
        user.followings_ids = fetch_followings(client, user_id).await?.items;
        user.shows_ids = fetch_shows(client, user_id).await?.items;

        tracing::info!(
            "Fetched user {} ({} followers, {} followings, {} shows)",
            user_id,
            user.followers_ids.len(),
            user.followings_ids.len(),
            user.shows_ids.len()
        );

        Ok(user)
    }
}
