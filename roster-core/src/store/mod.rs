//! Record store
//!
//! The in-memory collection that owns employee identity and CRUD mutation.

mod employee;

pub use employee::EmployeeStore;
