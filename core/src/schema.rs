//! Idempotent creation of the `employees` table.

use sea_orm::sea_query::{ColumnDef, Expr, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, EntityName};

use crate::db::DataSource;
use crate::entity::employee::{self, NAME_MAX_LEN, PHONE_MAX_LEN};
use crate::error::SchemaError;

#[derive(Clone)]
pub struct SchemaInitializer {
    source: DataSource,
}

impl SchemaInitializer {
    pub fn new(source: DataSource) -> Self {
        SchemaInitializer { source }
    }

    /// Issues `CREATE TABLE IF NOT EXISTS employees`. Safe to call on every
    /// startup; an existing table and its rows are left untouched.
    pub async fn ensure_schema(&self) -> Result<(), SchemaError> {
        let conn = self.source.connection();
        let statement = conn.get_database_backend().build(&employees_table());

        self.source
            .bounded(conn.execute(statement))
            .await
            .map_err(|source| SchemaError { source })?;

        tracing::info!("table `employees` ensured");

        Ok(())
    }
}

/// Length bounds are repeated as `CHECK` constraints because not every
/// backend enforces `varchar(n)`. Blank values are rejected the same way
/// `NewEmployee::validate` rejects them.
pub fn employees_table() -> TableCreateStatement {
    Table::create()
        .table(employee::Entity.table_ref())
        .if_not_exists()
        .col(
            ColumnDef::new(employee::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(employee::Column::Name)
                .string_len(NAME_MAX_LEN as u32)
                .not_null()
                .check(Expr::cust(&format!(
                    "length(trim(name)) > 0 AND length(name) <= {NAME_MAX_LEN}"
                ))),
        )
        .col(
            ColumnDef::new(employee::Column::Phone)
                .string_len(PHONE_MAX_LEN as u32)
                .not_null()
                .check(Expr::cust(&format!(
                    "length(trim(phone)) > 0 AND length(phone) <= {PHONE_MAX_LEN}"
                ))),
        )
        .col(
            ColumnDef::new(employee::Column::IsAdmin)
                .boolean()
                .not_null()
                .default(false),
        )
        .to_owned()
}
