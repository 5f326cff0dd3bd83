//! One-time population of an empty `employees` table.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Set, TransactionTrait};

use crate::db::DataSource;
use crate::entity::employee;
use crate::error::{SeedError, StatementError};
use crate::model::EmployeeSeed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table already held rows; nothing was inserted.
    AlreadySeeded { existing: u64 },
    Seeded { rows: usize },
}

#[derive(Clone)]
pub struct Seeder {
    source: DataSource,
    transactional: bool,
}

impl Seeder {
    pub fn new(source: DataSource) -> Self {
        Seeder {
            source,
            transactional: false,
        }
    }

    /// Run the count and every insert inside one transaction so a failed
    /// insert leaves the table empty. Off by default.
    pub fn transactional(mut self, transactional: bool) -> Self {
        self.transactional = transactional;
        self
    }

    /// Inserts `catalog` in order when the table is empty.
    ///
    /// Without transactional mode the count-then-insert sequence is not atomic
    /// against other seeders, and an insert failure leaves the rows inserted
    /// before it in place.
    pub async fn seed_if_empty(
        &self,
        catalog: &[EmployeeSeed],
    ) -> Result<SeedOutcome, SeedError> {
        tracing::info!("checking whether `employees` needs seeding");

        if !self.transactional {
            return self.seed_on(self.source.connection(), catalog).await;
        }

        let txn = self
            .source
            .bounded(self.source.connection().begin())
            .await
            .map_err(SeedError::Transaction)?;

        let outcome = match self.seed_on(&txn, catalog).await {
            Ok(outcome) => outcome,
            Err(err) => {
                if let Err(rollback) = self.source.bounded(txn.rollback()).await {
                    tracing::warn!(error = %rollback, "seed transaction rollback failed");
                }
                return Err(err);
            }
        };

        self.source
            .bounded(txn.commit())
            .await
            .map_err(SeedError::Transaction)?;

        Ok(outcome)
    }

    async fn seed_on<C>(
        &self,
        conn: &C,
        catalog: &[EmployeeSeed],
    ) -> Result<SeedOutcome, SeedError>
    where
        C: ConnectionTrait,
    {
        let existing = self
            .source
            .bounded(employee::Entity::find().count(conn))
            .await
            .map_err(SeedError::Count)?;

        if existing > 0 {
            tracing::info!(existing, "`employees` already seeded, skipping");
            return Ok(SeedOutcome::AlreadySeeded { existing });
        }

        tracing::info!(entries = catalog.len(), "seeding `employees`");

        for (index, seed) in catalog.iter().enumerate() {
            insert_seed(&self.source, conn, seed)
                .await
                .map_err(|source| SeedError::Insert {
                    index,
                    name: seed.name.to_owned(),
                    inserted: index,
                    source,
                })?;
        }

        tracing::info!(rows = catalog.len(), "seeding complete");

        Ok(SeedOutcome::Seeded { rows: catalog.len() })
    }
}

async fn insert_seed<C>(
    source: &DataSource,
    conn: &C,
    seed: &EmployeeSeed,
) -> Result<(), StatementError>
where
    C: ConnectionTrait,
{
    let row = employee::ActiveModel {
        name: Set(seed.name.to_owned()),
        phone: Set(seed.phone.to_owned()),
        is_admin: Set(seed.is_admin),
        ..Default::default()
    };

    source.bounded(employee::Entity::insert(row).exec(conn)).await?;

    Ok(())
}
