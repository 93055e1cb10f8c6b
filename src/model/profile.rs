use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Role of a profile within the portal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum Role {
    /// Staff member allowed to manage events, content and users.
    Employee,
    #[default]
    Member,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Role; 2] = [Role::Employee, Role::Member];

    /// Value stored in the `profile.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Member => "member",
        }
    }

    /// Parses a stored role value, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "employee" => Some(Role::Employee),
            "member" => Some(Role::Member),
            _ => None,
        }
    }

    /// Localized label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Сотрудник",
            Role::Member => "Участник",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of the signed-in viewer as seen by the pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewerRole {
    /// False until both the session and the role lookup have settled.
    pub resolved: bool,
    /// `None` for anonymous viewers, viewers without a profile row and failed lookups.
    pub role: Option<Role>,
}

impl ViewerRole {
    pub fn settled(role: Option<Role>) -> Self {
        Self {
            resolved: true,
            role,
        }
    }

    pub fn is_employee(&self) -> bool {
        self.role == Some(Role::Employee)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProfileDto {
    pub id: i32,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Role,
    pub created_at: NaiveDateTime,
}

impl ProfileDto {
    /// Name shown in lists, falling back to the email and then the profile ID.
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// Role lookup result; `role` is `None` when no profile row exists for the ID.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RoleDto {
    pub role: Option<Role>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateProfileDto {
    pub full_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateRoleDto {
    pub role: Role,
}
