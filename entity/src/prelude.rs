pub use super::document::Entity as Document;
pub use super::event::Entity as Event;
pub use super::event_participant::Entity as EventParticipant;
pub use super::news::Entity as News;
pub use super::profile::Entity as Profile;
pub use super::support_request::Entity as SupportRequest;
