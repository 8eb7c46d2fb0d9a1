pub mod employee;
pub mod review;

pub use employee::Employee;
pub use review::Review;
