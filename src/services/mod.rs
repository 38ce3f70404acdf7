pub mod availability_service;
pub mod company_client;
pub mod employee_service;
pub mod reservation_client;
pub mod rules_client;
pub mod skill_service;

pub use availability_service::AvailabilityService;
pub use company_client::{CompanyClient, CompanyConfig};
pub use reservation_client::ReservationClient;
pub use rules_client::{RulesClient, RulesConfig, RulesVerdict};
