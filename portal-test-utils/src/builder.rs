//! Declarative test builder.
//!
//! Configuration methods only queue work; tables, fixtures and mock endpoints are created
//! in order during [`TestBuilder::build`].

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_portal_tables: bool,

    profiles: Vec<(String, String)>, // (subject, role)

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    identity_endpoints: Vec<(String, Option<String>, Option<String>)>, // (sub, email, name)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_portal_tables: false,
            profiles: Vec::new(),
            mock_builders: Vec::new(),
            identity_endpoints: Vec::new(),
        }
    }

    /// Creates every portal table: profile, event, event_participant, news, document and
    /// support_request.
    pub fn with_portal_tables(mut self) -> Self {
        self.include_portal_tables = true;
        self
    }

    /// Adds a single entity table, chain calls to add several.
    ///
    /// ```no_run
    /// use portal_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), portal_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Profile)
    ///     .with_table(Document)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Inserts a profile with the given identity-provider subject and role.
    ///
    /// Profiles get IDs in insertion order starting from 1.
    pub fn with_profile(mut self, subject: impl Into<String>, role: impl Into<String>) -> Self {
        self.profiles.push((subject.into(), role.into()));
        self
    }

    /// Mocks the token and userinfo endpoints for one successful login.
    pub fn with_identity_endpoints(
        mut self,
        sub: impl Into<String>,
        email: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        self.identity_endpoints.push((
            sub.into(),
            email.map(str::to_string),
            name.map(str::to_string),
        ));
        self
    }

    /// Adds a custom mock endpoint.
    ///
    /// Custom endpoints are created before the preconfigured ones so tests can register
    /// several mocks for the same path in the order they should match.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_portal_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Profile),
                schema.create_table_from_entity(entity::prelude::Event),
                schema.create_table_from_entity(entity::prelude::EventParticipant),
                schema.create_table_from_entity(entity::prelude::News),
                schema.create_table_from_entity(entity::prelude::Document),
                schema.create_table_from_entity(entity::prelude::SupportRequest),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (subject, role) in self.profiles {
            setup.profile().insert_profile(&subject, &role).await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (sub, email, name) in self.identity_endpoints {
            mocks.push(setup.auth().create_token_endpoint(1));
            mocks.push(setup.auth().create_userinfo_endpoint(
                &sub,
                email.as_deref(),
                name.as_deref(),
                1,
            ));
        }

        // Stored so the mocks live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
