use roster_core::Employee;

pub use roster_core::response::ErrorBody;

pub type EmployeeResponse = roster_core::response::CoreResponse<Employee>;

pub type EmployeeListResponse = roster_core::response::CoreResponse<Vec<Employee>>;
