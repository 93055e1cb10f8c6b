use sea_orm::entity::prelude::*;

/// A portal member, created on first sign-in with the identity provider.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Subject claim issued by the identity provider.
    #[sea_orm(unique)]
    pub subject: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// Either `employee` or `member`.
    pub role: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_participant::Entity")]
    EventParticipant,
    #[sea_orm(has_many = "super::support_request::Entity")]
    SupportRequest,
}

impl Related<super::event_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventParticipant.def()
    }
}

impl Related<super::support_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupportRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
