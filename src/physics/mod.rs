pub mod chase;
pub mod flight;
pub mod math;
