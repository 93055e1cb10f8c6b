use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{
        Contacts, Council, Documents, EventArticle, EventParticipants, Events, Home, JoinEvent,
        Login, News, NewsArticle, NotFound, Profile, ReceivedRequests, Support, UserManagement,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/events")]
    Events {},

    #[route("/events/:id")]
    EventArticle { id: String },

    #[route("/join-event/:id")]
    JoinEvent { id: String },

    #[route("/event-participants/:id")]
    EventParticipants { id: String },

    #[route("/news")]
    News {},

    #[route("/news/:id")]
    NewsArticle { id: String },

    #[route("/documents")]
    Documents {},

    #[route("/council")]
    Council {},

    #[route("/contacts")]
    Contacts {},

    #[route("/support")]
    Support {},

    #[route("/received-requests")]
    ReceivedRequests {},

    #[route("/profile")]
    Profile {},

    #[route("/user-management")]
    UserManagement {},

    #[route("/login")]
    Login {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
