//! Startup sequence: schema first, then seed data.

use crate::catalog::SEED_CATALOG;
use crate::db::DataSource;
use crate::error::{SchemaError, SeedError};
use crate::model::EmployeeSeed;
use crate::schema::SchemaInitializer;
use crate::seeder::{SeedOutcome, Seeder};

/// What each startup phase produced. Failures have already been logged.
#[derive(Debug)]
pub struct BootstrapReport {
    pub schema: Result<(), SchemaError>,
    pub seed: Result<SeedOutcome, SeedError>,
}

impl BootstrapReport {
    pub fn is_ready(&self) -> bool {
        self.schema.is_ok() && self.seed.is_ok()
    }
}

pub struct Bootstrap {
    schema: SchemaInitializer,
    seeder: Seeder,
    catalog: &'static [EmployeeSeed],
}

impl Bootstrap {
    pub fn new(source: DataSource) -> Self {
        Bootstrap {
            schema: SchemaInitializer::new(source.clone()),
            seeder: Seeder::new(source),
            catalog: SEED_CATALOG,
        }
    }

    pub fn with_catalog(mut self, catalog: &'static [EmployeeSeed]) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_seeder(mut self, seeder: Seeder) -> Self {
        self.seeder = seeder;
        self
    }

    /// Runs both phases once, in order, without retrying. Never fails: a
    /// schema failure is logged and seeding is still attempted, so the
    /// seeder reports its own error against the missing table.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn initialize(&self) -> BootstrapReport {
        let schema = self.schema.ensure_schema().await;
        if let Err(err) = &schema {
            tracing::error!(error = %err, "error creating `employees` table");
        }

        let seed = self.seeder.seed_if_empty(self.catalog).await;
        match &seed {
            Ok(SeedOutcome::Seeded { rows }) => tracing::info!(rows, "seed data inserted"),
            Ok(SeedOutcome::AlreadySeeded { .. }) => {}
            Err(err) => tracing::error!(error = %err, "error seeding `employees`"),
        }

        tracing::info!(ready = schema.is_ok() && seed.is_ok(), "database initialized");

        BootstrapReport { schema, seed }
    }
}
