pub mod documents;
pub mod event;
pub mod home;
pub mod info;
pub mod login;
pub mod news;
pub mod not_found;
pub mod profile;
pub mod support;
pub mod user_management;

pub use documents::Documents;
pub use event::{EventArticle, EventParticipants, Events, JoinEvent};
pub use home::Home;
pub use info::{Contacts, Council};
pub use login::Login;
pub use news::{News, NewsArticle};
pub use not_found::NotFound;
pub use profile::Profile;
pub use support::{ReceivedRequests, Support};
pub use user_management::UserManagement;
