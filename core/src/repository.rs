use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

use crate::db::DataSource;
use crate::entity::employee;
use crate::error::AccessError;
use crate::model::Employee;

/// Read and insert access to `employees`.
///
/// Holds no state besides the pool handle, so clones can be used from any
/// number of concurrent requests. Inputs are not validated here; the table's
/// constraints are the only gate.
#[derive(Clone)]
pub struct EmployeeRepository {
    source: DataSource,
}

impl EmployeeRepository {
    pub fn new(source: DataSource) -> Self {
        EmployeeRepository { source }
    }

    /// Every row, in whatever order the database returns them.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Employee>, AccessError> {
        let rows = self
            .source
            .bounded(employee::Entity::find().all(self.source.connection()))
            .await?;

        Ok(rows)
    }

    /// Inserts one row and returns it with its generated `id`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn insert_one(
        &self,
        name: &str,
        phone: &str,
        is_admin: bool,
    ) -> Result<Employee, AccessError> {
        let row = employee::ActiveModel {
            name: Set(name.to_owned()),
            phone: Set(phone.to_owned()),
            is_admin: Set(is_admin),
            ..Default::default()
        };

        let employee = self.source.bounded(row.insert(self.source.connection())).await?;

        tracing::debug!(id = employee.id, "employee inserted");

        Ok(employee)
    }

    pub async fn count(&self) -> Result<u64, AccessError> {
        let count = self
            .source
            .bounded(employee::Entity::find().count(self.source.connection()))
            .await?;

        Ok(count)
    }
}
