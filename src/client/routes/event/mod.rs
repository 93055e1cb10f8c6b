mod article;
mod join;
pub mod list;
mod participants;

pub use article::EventArticle;
pub use join::JoinEvent;
pub use list::{EventCard, Events};
pub use participants::EventParticipants;
