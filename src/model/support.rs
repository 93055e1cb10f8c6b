use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SupportRequestDto {
    pub id: i32,
    pub profile_id: i32,
    /// Display name of the author at the time of listing.
    pub author: String,
    pub subject: String,
    pub message: String,
    pub resolved: bool,
    pub created_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateSupportRequestDto {
    pub subject: String,
    pub message: String,
}

impl CreateSupportRequestDto {
    /// Returns the reason the request cannot be submitted, if any.
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.subject.trim().is_empty() {
            Some("Укажите тему обращения")
        } else if self.message.trim().is_empty() {
            Some("Опишите ваш вопрос")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CreateSupportRequestDto;

    #[test]
    fn rejects_blank_subject_or_message() {
        let blank_subject = CreateSupportRequestDto {
            subject: "   ".to_string(),
            message: "Не работает вход".to_string(),
        };
        let blank_message = CreateSupportRequestDto {
            subject: "Вход".to_string(),
            message: "".to_string(),
        };
        let valid = CreateSupportRequestDto {
            subject: "Вход".to_string(),
            message: "Не работает вход".to_string(),
        };

        assert!(blank_subject.validation_error().is_some());
        assert!(blank_message.validation_error().is_some());
        assert!(valid.validation_error().is_none());
    }
}
