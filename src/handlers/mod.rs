pub mod bookings;
pub mod catalog;
pub mod employees;
pub mod expenses;
pub mod health;
pub mod inventory;
pub mod stats;
pub mod suppliers;
