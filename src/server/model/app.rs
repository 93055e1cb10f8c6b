use sea_orm::DatabaseConnection;

use crate::server::model::auth::IdentityProvider;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: IdentityProvider,
}
