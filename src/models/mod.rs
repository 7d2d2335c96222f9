pub mod booking;
pub mod catalog;
pub mod employee;
pub mod expense;
pub mod inventory;
pub mod supplier;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use catalog::{DayHours, SalonCatalog, Service, WeeklyHours};
pub use employee::{Employee, EmployeeStatus, NewEmployee};
pub use expense::{Expense, NewExpense};
pub use inventory::{InventoryItem, NewInventoryItem};
pub use supplier::{NewSupplier, Supplier};
