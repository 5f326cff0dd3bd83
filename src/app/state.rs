use roster_core::{DataSource, EmployeeRepository};

#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeRepository,
}

impl AppState {
    pub fn new(source: DataSource) -> Self {
        AppState {
            employees: EmployeeRepository::new(source),
        }
    }
}
