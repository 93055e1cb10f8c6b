use std::fmt;

/// Remote collections the client reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Events,
    EventParticipants,
    Profiles,
    Roles,
    News,
    Documents,
    SupportRequests,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::EventParticipants => "event_participants",
            Collection::Profiles => "profiles",
            Collection::Roles => "roles",
            Collection::News => "news",
            Collection::Documents => "documents",
            Collection::SupportRequests => "support_requests",
        }
    }
}

/// Cache key of a query: collection, resource ID and viewer ID.
///
/// List queries carry no resource ID; queries whose result does not depend on the viewer
/// carry no viewer ID.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub collection: Collection,
    pub id: Option<i32>,
    pub viewer: Option<i32>,
}

impl QueryKey {
    /// Key of a whole-collection listing.
    pub fn list(collection: Collection) -> Self {
        Self {
            collection,
            id: None,
            viewer: None,
        }
    }

    /// Key of a single resource.
    pub fn resource(collection: Collection, id: i32) -> Self {
        Self {
            collection,
            id: Some(id),
            viewer: None,
        }
    }

    pub fn for_viewer(mut self, viewer: Option<i32>) -> Self {
        self.viewer = viewer;
        self
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.collection.as_str())?;
        if let Some(id) = self.id {
            write!(f, "/{}", id)?;
        }
        if let Some(viewer) = self.viewer {
            write!(f, "@{}", viewer)?;
        }
        Ok(())
    }
}
