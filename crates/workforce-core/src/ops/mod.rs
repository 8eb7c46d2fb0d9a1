pub mod identity_map;
pub mod lookup;

pub use identity_map::{Identified, IdentityMap};
pub use lookup::EmployeeLookup;
