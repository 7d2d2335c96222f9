pub mod scheduling;
pub mod stats;
