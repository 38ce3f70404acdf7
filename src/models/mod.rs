pub mod availability;
pub mod employee;
pub mod remote;
pub mod skill;

pub use availability::*;
pub use employee::*;
pub use remote::*;
pub use skill::*;
