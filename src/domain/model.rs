use crate::utils::error::SpreaksError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 使用者或節目的識別：數字 id 或 slug，API 兩者皆接受
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Id(u64),
    Slug(String),
}

impl Target {
    pub fn as_id(&self) -> Option<u64> {
        match self {
            Target::Id(id) => Some(*id),
            Target::Slug(_) => None,
        }
    }
}

impl FromStr for Target {
    type Err = SpreaksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // `.` 與 `..` 會被當成相對路徑，無法作為單一 path segment
        if trimmed.is_empty() || trimmed.contains('/') || trimmed == "." || trimmed == ".." {
            return Err(SpreaksError::InvalidTarget {
                value: s.to_string(),
            });
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = trimmed.parse::<u64>() {
                return Ok(Target::Id(id));
            }
        }

        Ok(Target::Slug(trimmed.to_string()))
    }
}

impl From<u64> for Target {
    fn from(id: u64) -> Self {
        Target::Id(id)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Id(id) => write!(f, "{}", id),
            Target::Slug(slug) => f.write_str(slug),
        }
    }
}

/// 列表 endpoint 的第一頁；`next_url` 只回報，不會被追蹤
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_url: Option<String>,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.next_url.is_some()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_url: None,
        }
    }
}

/// Public profile of a Spreaker account.
///
/// Scalar fields mirror the `response.user` object; anything missing or
/// `null` in the payload stays `None`. The id lists hold the first page of
/// the corresponding listing only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user_id: Option<u64>,
    pub fullname: Option<String>,
    pub site_url: Option<String>,
    pub image_url: Option<String>,
    pub image_original_url: Option<String>,
    pub accept_latest_tos_url: Option<String>,
    pub username: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub plan: Option<String>,
    pub followers_count: Option<u64>,
    pub followers_ids: Vec<u64>,
    pub followings_count: Option<u64>,
    pub followings_ids: Vec<u64>,
    pub shows_count: Option<u64>,
    pub shows_ids: Vec<u64>,
    pub contact_email: Option<String>,
    pub website_url: Option<String>,
    pub facebook_permalink: Option<String>,
    pub twitter_username: Option<String>,
}

pub const CONTACT_SOURCES: [&str; 4] = [
    "contact_email",
    "website_url",
    "facebook_permalink",
    "twitter_username",
];

impl User {
    /// 回傳所有非空的聯絡方式
    pub fn contact(&self) -> Contact {
        let values = [
            &self.contact_email,
            &self.website_url,
            &self.facebook_permalink,
            &self.twitter_username,
        ];

        let entries = CONTACT_SOURCES
            .iter()
            .zip(values)
            .filter_map(|(key, value)| value.as_ref().map(|v| ((*key).to_string(), v.clone())))
            .collect();

        Contact { entries }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {}): {}",
            display_opt(&self.fullname),
            display_opt(&self.username),
            display_opt(&self.user_id),
            display_opt(&self.description)
        )
    }
}

/// Public metadata of a podcast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Show {
    pub show_id: Option<u64>,
    pub title: Option<String>,
    pub author_id: Option<u64>,
    pub site_url: Option<String>,
    pub image_url: Option<String>,
    pub image_original_url: Option<String>,
    pub explicit: Option<bool>,
    pub permalink: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<u64>,
    pub language: Option<String>,
    pub website_url: Option<String>,
    pub email: Option<String>,
    /// shows endpoint 使用的欄位名稱
    pub twitter_name: Option<String>,
    pub twitter_username: Option<String>,
    pub facebook_url: Option<String>,
    pub itunes_url: Option<String>,
    pub last_episode_at: Option<String>,
    pub episodes_ids: Vec<u64>,
}

impl Show {
    /// `twitter_username` 優先，沒有時才用 `twitter_name`
    pub fn twitter(&self) -> Option<&str> {
        self.twitter_username
            .as_deref()
            .or(self.twitter_name.as_deref())
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {})",
            display_opt(&self.title),
            display_opt(&self.permalink),
            display_opt(&self.show_id)
        )
    }
}

/// 有序的聯絡方式（依 `CONTACT_SOURCES` 的順序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    entries: Vec<(String, String)>,
}

impl Contact {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for Contact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn display_opt<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_parsing() {
        assert_eq!("12345".parse::<Target>().unwrap(), Target::Id(12345));
        assert_eq!(
            " spreaker-news ".parse::<Target>().unwrap(),
            Target::Slug("spreaker-news".to_string())
        );
        assert_eq!(
            "42abc".parse::<Target>().unwrap(),
            Target::Slug("42abc".to_string())
        );
        assert!("".parse::<Target>().is_err());
        assert!("   ".parse::<Target>().is_err());
        assert!("a/b".parse::<Target>().is_err());
        assert!(".".parse::<Target>().is_err());
        assert!(" .. ".parse::<Target>().is_err());
        assert_eq!(
            "...".parse::<Target>().unwrap(),
            Target::Slug("...".to_string())
        );
        assert_eq!(
            "jane?x=1".parse::<Target>().unwrap(),
            Target::Slug("jane?x=1".to_string())
        );
    }

    #[test]
    fn test_target_display_round_trips_into_path() {
        assert_eq!(Target::Id(7).to_string(), "7");
        assert_eq!(Target::Slug("john".to_string()).to_string(), "john");
        assert_eq!(Target::from(9).as_id(), Some(9));
    }

    #[test]
    fn test_user_deserialize_missing_and_null_fields() {
        let payload = serde_json::json!({
            "user_id": 5,
            "fullname": "Jane Doe",
            "username": "jane",
            "description": null,
            "followers_count": 12,
            "some_future_field": "ignored"
        });

        let user: User = serde_json::from_value(payload).unwrap();
        assert_eq!(user.user_id, Some(5));
        assert_eq!(user.fullname.as_deref(), Some("Jane Doe"));
        assert_eq!(user.description, None);
        assert_eq!(user.plan, None);
        assert_eq!(user.followers_count, Some(12));
        assert!(user.followers_ids.is_empty());
    }

    #[test]
    fn test_user_display() {
        let user = User {
            user_id: Some(5),
            fullname: Some("Jane Doe".to_string()),
            username: Some("jane".to_string()),
            description: Some("Podcaster".to_string()),
            ..Default::default()
        };
        assert_eq!(user.to_string(), "Jane Doe (jane - 5): Podcaster");

        let empty = User::default();
        assert_eq!(empty.to_string(), "None (None - None): None");
    }

    #[test]
    fn test_contact_skips_missing_sources_and_keeps_order() {
        let user = User {
            twitter_username: Some("jane_tw".to_string()),
            contact_email: Some("jane@example.com".to_string()),
            ..Default::default()
        };

        let contact = user.contact();
        assert_eq!(contact.len(), 2);
        assert_eq!(contact.get("contact_email"), Some("jane@example.com"));
        assert_eq!(contact.get("website_url"), None);

        let keys: Vec<&str> = contact.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["contact_email", "twitter_username"]);

        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(
            json,
            r#"{"contact_email":"jane@example.com","twitter_username":"jane_tw"}"#
        );
    }

    #[test]
    fn test_show_reads_twitter_name() {
        let payload = serde_json::json!({
            "show_id": 100,
            "title": "Morning Talk",
            "permalink": "morning-talk",
            "explicit": false,
            "twitter_name": "morningtalk"
        });

        let show: Show = serde_json::from_value(payload).unwrap();
        assert_eq!(show.twitter(), Some("morningtalk"));
        assert_eq!(show.twitter_username, None);
        assert_eq!(show.explicit, Some(false));
        assert_eq!(show.to_string(), "Morning Talk (morning-talk - 100)");
    }

    #[test]
    fn test_show_with_both_twitter_keys() {
        let payload = serde_json::json!({
            "title": "x",
            "twitter_name": "a",
            "twitter_username": "b"
        });

        let show: Show = serde_json::from_value(payload).unwrap();
        assert_eq!(show.twitter_name.as_deref(), Some("a"));
        assert_eq!(show.twitter_username.as_deref(), Some("b"));
        assert_eq!(show.twitter(), Some("b"));
    }

    #[test]
    fn test_page_has_more() {
        let page = Page {
            items: vec![1u64, 2],
            next_url: Some("https://api.spreaker.com/v2/users/1/followers?last_id=2".to_string()),
        };
        assert!(page.has_more());
        assert!(!Page::<u64>::default().has_more());
    }
}
