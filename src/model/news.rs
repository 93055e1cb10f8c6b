use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub published_at: NaiveDateTime,
}

impl NewsDto {
    /// First `max_chars` characters of the content, with an ellipsis when truncated.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let excerpt: String = chars.by_ref().take(max_chars).collect();

        if chars.next().is_some() {
            format!("{}…", excerpt.trim_end())
        } else {
            excerpt
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateNewsDto {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}
