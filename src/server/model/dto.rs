//! Conversions from database models into the DTOs shared with the client.

use dioxus_logger::tracing;

use crate::{
    model::{
        document::DocumentDto,
        event::{EventDto, EventParticipantDto, ParticipantProfileDto},
        news::NewsDto,
        profile::{ProfileDto, Role},
        support::SupportRequestDto,
    },
    server::model::db::{
        DocumentModel, EventModel, EventParticipantModel, NewsModel, ProfileModel,
        SupportRequestModel,
    },
};

/// Parses the stored role, unknown values fall back to the member role.
pub fn parse_role(profile: &ProfileModel) -> Role {
    Role::parse(&profile.role).unwrap_or_else(|| {
        tracing::warn!(
            profile_id = %profile.id,
            role = %profile.role,
            "Unknown role stored for profile, treating as member"
        );

        Role::default()
    })
}

impl From<ProfileModel> for ProfileDto {
    fn from(profile: ProfileModel) -> Self {
        Self {
            role: parse_role(&profile),
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            created_at: profile.created_at,
        }
    }
}

impl From<EventModel> for EventDto {
    fn from(event: EventModel) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date: event.date,
            image_url: event.image_url,
            participants_limit: event.participants_limit,
            current_participants: event.current_participants,
        }
    }
}

impl From<EventParticipantModel> for EventParticipantDto {
    fn from(participant: EventParticipantModel) -> Self {
        Self {
            user_id: participant.user_id,
        }
    }
}

impl From<(EventParticipantModel, Option<ProfileModel>)> for ParticipantProfileDto {
    fn from((participant, profile): (EventParticipantModel, Option<ProfileModel>)) -> Self {
        let (full_name, email) = profile
            .map(|profile| (profile.full_name, profile.email))
            .unwrap_or_default();

        Self {
            user_id: participant.user_id,
            full_name,
            email,
            registered_at: participant.created_at,
        }
    }
}

impl From<NewsModel> for NewsDto {
    fn from(news: NewsModel) -> Self {
        Self {
            id: news.id,
            title: news.title,
            content: news.content,
            image_url: news.image_url,
            published_at: news.published_at,
        }
    }
}

impl From<DocumentModel> for DocumentDto {
    fn from(document: DocumentModel) -> Self {
        Self {
            id: document.id,
            title: document.title,
            description: document.description,
            url: document.url,
            created_at: document.created_at,
        }
    }
}

impl From<(SupportRequestModel, Option<ProfileModel>)> for SupportRequestDto {
    fn from((request, author): (SupportRequestModel, Option<ProfileModel>)) -> Self {
        let author = author
            .map(|author| ProfileDto::from(author).display_name())
            .unwrap_or_else(|| format!("#{}", request.profile_id));

        Self {
            id: request.id,
            profile_id: request.profile_id,
            author,
            subject: request.subject,
            message: request.message,
            resolved: request.resolved,
            created_at: request.created_at,
            resolved_at: request.resolved_at,
        }
    }
}
