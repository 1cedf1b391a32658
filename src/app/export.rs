use crate::domain::model::{Contact, Show, User};
use crate::utils::error::{Result, SpreaksError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render_user(user: &User, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![user.to_string()];
            lines.push(format!(
                "followers: {} (first page: {})",
                count_or_unknown(user.followers_count),
                user.followers_ids.len()
            ));
            lines.push(format!(
                "followings: {} (first page: {})",
                count_or_unknown(user.followings_count),
                user.followings_ids.len()
            ));
            lines.push(format!(
                "shows: {} (first page: {})",
                count_or_unknown(user.shows_count),
                user.shows_ids.len()
            ));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(user)?),
        OutputFormat::Csv => write_csv(&user_fields(user)),
    }
}

pub fn render_show(show: &Show, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![show.to_string()];
            if let Some(description) = &show.description {
                lines.push(description.clone());
            }
            lines.push(format!("episodes (first page): {}", show.episodes_ids.len()));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(show)?),
        OutputFormat::Csv => write_csv(&show_fields(show)),
    }
}

pub fn render_contact(contact: &Contact, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text if contact.is_empty() => {
            Ok("No public contact information".to_string())
        }
        OutputFormat::Text => Ok(contact
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(contact)?),
        OutputFormat::Csv => {
            let fields: Vec<(&str, String)> = contact
                .iter()
                .map(|(key, value)| (key, value.to_string()))
                .collect();
            write_csv(&fields)
        }
    }
}

/// 一列 header 加一列資料；沒有欄位時輸出空字串
fn write_csv(fields: &[(&str, String)]) -> Result<String> {
    if fields.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(fields.iter().map(|(name, _)| *name))?;
    writer.write_record(fields.iter().map(|(_, value)| value.as_str()))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| SpreaksError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| SpreaksError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn user_fields(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("user_id", opt_to_string(&user.user_id)),
        ("fullname", opt_to_string(&user.fullname)),
        ("username", opt_to_string(&user.username)),
        ("description", opt_to_string(&user.description)),
        ("kind", opt_to_string(&user.kind)),
        ("plan", opt_to_string(&user.plan)),
        ("site_url", opt_to_string(&user.site_url)),
        ("image_url", opt_to_string(&user.image_url)),
        ("image_original_url", opt_to_string(&user.image_original_url)),
        ("accept_latest_tos_url", opt_to_string(&user.accept_latest_tos_url)),
        ("followers_count", opt_to_string(&user.followers_count)),
        ("followers_ids", join_ids(&user.followers_ids)),
        ("followings_count", opt_to_string(&user.followings_count)),
        ("followings_ids", join_ids(&user.followings_ids)),
        ("shows_count", opt_to_string(&user.shows_count)),
        ("shows_ids", join_ids(&user.shows_ids)),
        ("contact_email", opt_to_string(&user.contact_email)),
        ("website_url", opt_to_string(&user.website_url)),
        ("facebook_permalink", opt_to_string(&user.facebook_permalink)),
        ("twitter_username", opt_to_string(&user.twitter_username)),
    ]
}

fn show_fields(show: &Show) -> Vec<(&'static str, String)> {
    vec![
        ("show_id", opt_to_string(&show.show_id)),
        ("title", opt_to_string(&show.title)),
        ("author_id", opt_to_string(&show.author_id)),
        ("permalink", opt_to_string(&show.permalink)),
        ("description", opt_to_string(&show.description)),
        ("explicit", opt_to_string(&show.explicit)),
        ("category_id", opt_to_string(&show.category_id)),
        ("language", opt_to_string(&show.language)),
        ("site_url", opt_to_string(&show.site_url)),
        ("image_url", opt_to_string(&show.image_url)),
        ("image_original_url", opt_to_string(&show.image_original_url)),
        ("website_url", opt_to_string(&show.website_url)),
        ("email", opt_to_string(&show.email)),
        ("twitter_username", show.twitter().unwrap_or_default().to_string()),
        ("facebook_url", opt_to_string(&show.facebook_url)),
        ("itunes_url", opt_to_string(&show.itunes_url)),
        ("last_episode_at", opt_to_string(&show.last_episode_at)),
        ("episodes_ids", join_ids(&show.episodes_ids)),
    ]
}

fn opt_to_string<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn count_or_unknown(count: Option<u64>) -> String {
    count.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(";")
}
