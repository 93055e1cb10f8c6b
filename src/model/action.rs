//! Role-gated actions offered on detail pages.
//!
//! The event page combines two independent results, the event with its participants
//! and the viewer's role, into exactly one of a fixed set of actions. Everything here
//! is pure and recomputed on every render.

use crate::model::{
    event::EventArticleDto, notification::Notification, profile::ViewerRole,
    session::ViewerSession,
};

/// The single action control rendered under an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventAction {
    /// No control is rendered.
    None,
    /// Employees get a link to the participants list.
    ViewParticipants,
    /// Members who have not joined yet get the join button, disabled when the event is full.
    Join { disabled: bool },
}

/// Viewer facts derived from the two page queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerFacts {
    pub is_employee: bool,
    pub is_participant: bool,
}

impl ViewerFacts {
    /// Derives the viewer facts.
    ///
    /// An unresolved role lookup or a missing profile row both mean the viewer is not an
    /// employee.
    pub fn derive(session: &ViewerSession, role: ViewerRole, article: &EventArticleDto) -> Self {
        let is_participant = session
            .user_id()
            .is_some_and(|user_id| article.has_participant(user_id));

        Self {
            is_employee: role.is_employee(),
            is_participant,
        }
    }
}

impl EventAction {
    /// Decides which action to render, in priority order: no session, employee,
    /// not yet registered, already registered.
    ///
    /// Nothing is offered until the role lookup has settled.
    pub fn derive(session: &ViewerSession, role: ViewerRole, article: &EventArticleDto) -> Self {
        if session.user().is_none() || !role.resolved {
            return EventAction::None;
        }

        let facts = ViewerFacts::derive(session, role, article);

        if facts.is_employee {
            EventAction::ViewParticipants
        } else if !facts.is_participant {
            EventAction::Join {
                disabled: article.event.is_full(),
            }
        } else {
            EventAction::None
        }
    }
}

/// Outcome of pressing the join button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JoinClick {
    /// Navigate to the join flow for the event.
    Navigate { event_id: i32 },
    /// Abort and show the notification, nothing is written or navigated.
    Rejected(Notification),
}

impl JoinClick {
    pub fn resolve(session: &ViewerSession, event_id: i32) -> Self {
        match session.user() {
            Some(_) => JoinClick::Navigate { event_id },
            None => JoinClick::Rejected(Notification::authentication_required()),
        }
    }
}
