use anyhow::Result;
use httpmock::prelude::*;
use spreaks::app::export::render_show;
use spreaks::core::show::fetch_episodes;
use spreaks::{OutputFormat, Resource, Show, SpreakerClient, SpreaksError, Target};

fn show_payload() -> serde_json::Value {
    serde_json::json!({
        "response": {
            "show": {
                "show_id": 1060718,
                "title": "The Robot Hour",
                "author_id": 1234,
                "site_url": "https://www.spreaker.com/show/the-robot-hour",
                "image_url": "https://d3wo5wojvuv7l.cloudfront.net/t_square_limited_160/a.jpg",
                "image_original_url": "https://d3wo5wojvuv7l.cloudfront.net/images.spreaker.com/original/a.jpg",
                "explicit": false,
                "permalink": "the-robot-hour",
                "description": "Weekly news about robots",
                "category_id": 12,
                "language": "en",
                "website_url": null,
                "email": "hello@robots.example.com",
                "twitter_name": "robothour",
                "facebook_url": null,
                "itunes_url": "https://podcasts.apple.com/podcast/id1",
                "last_episode_at": "2026-09-30 08:00:00"
            }
        }
    })
}

#[tokio::test]
async fn test_fetch_show_by_permalink() -> Result<()> {
    let server = MockServer::start();

    let show_mock = server.mock(|when, then| {
        when.method(GET).path("/shows/the-robot-hour");
        then.status(200).json_body(show_payload());
    });
    let episodes_mock = server.mock(|when, then| {
        when.method(GET).path("/shows/1060718/episodes");
        then.status(200).json_body(serde_json::json!({
            "response": {
                "items": [{"episode_id": 9001, "title": "Pilot"}, {"episode_id": 9002, "title": "Two"}],
                "next_url": null
            }
        }));
    });

    let client = SpreakerClient::new(&server.base_url())?;
    let show = Show::fetch(&client, &"the-robot-hour".parse::<Target>()?).await?;

    show_mock.assert();
    episodes_mock.assert();

    assert_eq!(show.show_id, Some(1060718));
    assert_eq!(show.author_id, Some(1234));
    assert_eq!(show.explicit, Some(false));
    assert_eq!(show.twitter(), Some("robothour"));
    assert_eq!(show.website_url, None);
    assert_eq!(show.last_episode_at.as_deref(), Some("2026-09-30 08:00:00"));
    assert_eq!(show.episodes_ids, vec![9001, 9002]);
    assert_eq!(show.to_string(), "The Robot Hour (the-robot-hour - 1060718)");

    let text = render_show(&show, OutputFormat::Text)?;
    assert!(text.contains("Weekly news about robots"));
    assert!(text.ends_with("episodes (first page): 2"));

    Ok(())
}

#[tokio::test]
async fn test_episodes_respect_page_limit() -> Result<()> {
    let server = MockServer::start();

    let episodes_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/shows/5/episodes")
            .query_param("limit", "2");
        then.status(200).json_body(serde_json::json!({
            "response": {
                "items": [{"episode_id": 1}, {"episode_id": 2}],
                "next_url": "https://api.spreaker.com/v2/shows/5/episodes?last_id=2&limit=2"
            }
        }));
    });

    let client = SpreakerClient::new(&server.base_url())?.with_page_limit(Some(2));
    let page = fetch_episodes(&client, 5).await?;

    episodes_mock.assert();
    assert_eq!(page.items, vec![1, 2]);
    assert!(page.has_more());

    Ok(())
}

#[tokio::test]
async fn test_malformed_response_envelope() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/shows/5");
        then.status(200).json_body(serde_json::json!({"show": {"show_id": 5}}));
    });

    let client = SpreakerClient::new(&server.base_url())?;
    let err = Show::fetch(&client, &Target::Id(5)).await.unwrap_err();

    assert!(matches!(err, SpreaksError::UnexpectedPayload { .. }));

    Ok(())
}

#[tokio::test]
async fn test_non_json_body_is_serialization_error() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/shows/5");
        then.status(200).body("<html>maintenance</html>");
    });

    let client = SpreakerClient::new(&server.base_url())?;
    let err = Show::fetch(&client, &Target::Id(5)).await.unwrap_err();

    assert!(matches!(err, SpreaksError::SerializationError(_)));

    Ok(())
}

#[tokio::test]
async fn test_show_payload_with_both_twitter_keys() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/shows/7");
        then.status(200).json_body(serde_json::json!({
            "response": {
                "show": {
                    "show_id": 7,
                    "title": "x",
                    "twitter_name": "a",
                    "twitter_username": "a"
                }
            }
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/shows/7/episodes");
        then.status(200)
            .json_body(serde_json::json!({"response": {"items": [], "next_url": null}}));
    });

    let client = SpreakerClient::new(&server.base_url())?;
    let show = Show::fetch(&client, &Target::Id(7)).await?;

    assert_eq!(show.twitter(), Some("a"));
    assert!(show.episodes_ids.is_empty());

    Ok(())
}
