pub mod availability_repository;
pub mod employee_repository;
pub mod skill_repository;

pub use availability_repository::AvailabilityRepository;
pub use employee_repository::EmployeeRepository;
pub use skill_repository::SkillRepository;
