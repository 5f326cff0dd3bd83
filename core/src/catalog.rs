//! Seed catalog inserted into an empty `employees` table.

use crate::model::EmployeeSeed;

pub static SEED_CATALOG: &[EmployeeSeed] = &[
    EmployeeSeed::new("Ada Lovelace", "555-0101", true),
    EmployeeSeed::new("Grace Hopper", "555-0102", true),
    EmployeeSeed::new("Alan Turing", "555-0103", false),
    EmployeeSeed::new("Katherine Johnson", "555-0104", false),
    EmployeeSeed::new("Edsger Dijkstra", "555-0105", false),
    EmployeeSeed::new("Barbara Liskov", "555-0106", false),
    EmployeeSeed::new("Donald Knuth", "555-0107", false),
    EmployeeSeed::new("Margaret Hamilton", "555-0108", true),
    EmployeeSeed::new("Dennis Ritchie", "555-0109", false),
    EmployeeSeed::new("Frances Allen", "555-0110", false),
];
