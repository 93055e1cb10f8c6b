use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used for event dates across the portal, e.g. `05.03.2026 18:30`.
pub const EVENT_DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Event summary as shown in listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub image_url: Option<String>,
    pub participants_limit: Option<i32>,
    pub current_participants: i32,
}

impl EventDto {
    /// Whether the event has reached its participant limit.
    ///
    /// Events without a limit are never full.
    pub fn is_full(&self) -> bool {
        self.participants_limit
            .is_some_and(|limit| self.current_participants >= limit)
    }

    pub fn formatted_date(&self) -> String {
        format_event_date(&self.date)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EventParticipantDto {
    pub user_id: i32,
}

/// Event detail with its participant list, loaded in a single request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EventArticleDto {
    pub event: EventDto,
    /// Registered participants ordered by registration time, empty when nobody joined.
    #[serde(default)]
    pub participants: Vec<EventParticipantDto>,
}

impl EventArticleDto {
    pub fn has_participant(&self, user_id: i32) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }
}

/// Participant entry shown to employees on the participants page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ParticipantProfileDto {
    pub user_id: i32,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub registered_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateEventDto {
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub image_url: Option<String>,
    pub participants_limit: Option<i32>,
}

/// Parses an event ID taken from a route segment.
///
/// Returns `None` for segments that are not a positive integer, which the pages treat
/// as a missing event without issuing a request.
pub fn parse_event_id(segment: &str) -> Option<i32> {
    segment.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

pub fn format_event_date(date: &NaiveDateTime) -> String {
    date.format(EVENT_DATE_FORMAT).to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::{
        format_event_date, parse_event_id, EventArticleDto, EventDto, EventParticipantDto,
    };

    pub(crate) fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 5)
            .and_then(|d| d.and_hms_opt(18, 30, 0))
            .unwrap()
    }

    pub(crate) fn article(
        id: i32,
        participants_limit: Option<i32>,
        current_participants: i32,
        participants: &[i32],
    ) -> EventArticleDto {
        EventArticleDto {
            event: EventDto {
                id,
                title: "Субботник".to_string(),
                description: "Уборка территории".to_string(),
                date: date(),
                image_url: None,
                participants_limit,
                current_participants,
            },
            participants: participants
                .iter()
                .map(|user_id| EventParticipantDto { user_id: *user_id })
                .collect(),
        }
    }

    #[test]
    fn event_is_full_only_when_limit_reached() {
        assert!(article(1, Some(10), 10, &[]).event.is_full());
        assert!(article(1, Some(10), 11, &[]).event.is_full());
        assert!(!article(1, Some(10), 9, &[]).event.is_full());
        assert!(!article(2, None, 500, &[]).event.is_full());
    }

    #[test]
    fn finds_participants_by_user_id() {
        let article = article(1, None, 2, &[3, 4]);

        assert!(article.has_participant(4));
        assert!(!article.has_participant(5));
    }

    #[test]
    fn parses_only_positive_numeric_ids() {
        assert_eq!(parse_event_id("12"), Some(12));
        assert_eq!(parse_event_id("abc"), None);
        assert_eq!(parse_event_id("0"), None);
        assert_eq!(parse_event_id("-3"), None);
        assert_eq!(parse_event_id(""), None);
    }

    #[test]
    fn formats_dates_day_first() {
        assert_eq!(format_event_date(&date()), "05.03.2026 18:30");
    }
}
