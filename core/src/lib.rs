//! Persistence core for the employee service: schema bootstrap, one-time
//! seeding and repository access to the `employees` table.

pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod db;
pub mod entity;
pub mod error;
pub mod model;
pub mod repository;
pub mod response;
pub mod schema;
pub mod seeder;

pub use bootstrap::{Bootstrap, BootstrapReport};
pub use db::{DataSource, DataSourceOptions};
pub use error::{AccessError, SchemaError, SeedError, StatementError, ValidationError};
pub use model::{Employee, EmployeeSeed, NewEmployee};
pub use repository::EmployeeRepository;
pub use schema::SchemaInitializer;
pub use seeder::{SeedOutcome, Seeder};
