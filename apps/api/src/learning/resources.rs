//! Learning resource aggregation — YouTube videos plus static fallback links.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::youtube::YouTubeClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Collects learning resources for a skill: YouTube tutorials first (when the
/// client is configured and reachable), then documentation and practice
/// search links. YouTube failures degrade to the fallback links alone.
pub async fn learning_resources(
    youtube: &YouTubeClient,
    skill: &str,
    max_results: u32,
    language: &str,
) -> Vec<LearningResource> {
    let mut resources = Vec::new();

    match youtube.search_videos(skill, max_results, language).await {
        Ok(videos) => {
            resources.extend(videos.into_iter().map(|v| LearningResource {
                title: v.title,
                url: v.url,
                resource_type: "video".to_string(),
                source: Some("YouTube".to_string()),
                thumbnail: v.thumbnail,
                channel: Some(v.channel),
                published_at: Some(v.published_at),
                view_count: v.view_count,
                description: v.description,
            }));
        }
        Err(e) => {
            warn!("YouTube lookup failed for '{skill}': {e}");
        }
    }

    resources.extend(fallback_resources(skill));
    resources
}

fn fallback_resources(skill: &str) -> Vec<LearningResource> {
    let display = capitalize(skill);
    let query = skill.replace(' ', "+");
    vec![
        LearningResource {
            title: format!("{display} Documentation"),
            url: format!("https://www.google.com/search?q={query}+documentation"),
            resource_type: "documentation".to_string(),
            source: None,
            thumbnail: None,
            channel: None,
            published_at: None,
            view_count: None,
            description: None,
        },
        LearningResource {
            title: format!("{display} Projects for Practice"),
            url: format!("https://www.google.com/search?q={query}+projects+for+beginners"),
            resource_type: "practice".to_string(),
            source: None,
            thumbnail: None,
            channel: None,
            published_at: None,
            view_count: None,
            description: None,
        },
    ]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_cover_documentation_and_practice() {
        let resources = fallback_resources("rust");
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].resource_type, "documentation");
        assert_eq!(resources[0].title, "Rust Documentation");
        assert_eq!(resources[1].resource_type, "practice");
        assert!(resources[1].url.contains("rust+projects+for+beginners"));
    }

    #[test]
    fn test_multi_word_skill_url_encoding() {
        let resources = fallback_resources("machine learning");
        assert!(resources[0].url.contains("machine+learning+documentation"));
        assert_eq!(resources[0].title, "Machine learning Documentation");
    }

    #[test]
    fn test_fallback_omits_video_fields_in_json() {
        let json = serde_json::to_value(&fallback_resources("go")[0]).unwrap();
        assert_eq!(json["type"], "documentation");
        assert!(json.get("thumbnail").is_none());
        assert!(json.get("view_count").is_none());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("python"), "Python");
        assert_eq!(capitalize(""), "");
    }
}
