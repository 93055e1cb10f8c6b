use crate::model::profile::ProfileDto;

/// Identity of the signed-in viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub id: i32,
    pub display_name: String,
}

impl From<&ProfileDto> for SessionUser {
    fn from(profile: &ProfileDto) -> Self {
        Self {
            id: profile.id,
            display_name: profile.display_name(),
        }
    }
}

/// Session state provided to every page.
///
/// `Pending` covers the window before the session lookup resolves; pages treat it like
/// `Anonymous` when deciding which actions to offer.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewerSession {
    #[default]
    Pending,
    Anonymous,
    Authenticated(SessionUser),
}

impl ViewerSession {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            ViewerSession::Authenticated(user) => Some(user),
            ViewerSession::Pending | ViewerSession::Anonymous => None,
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user().map(|user| user.id)
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, ViewerSession::Pending)
    }
}
