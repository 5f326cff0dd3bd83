pub mod controller;
pub mod middleware;
pub mod response;
pub mod state;
