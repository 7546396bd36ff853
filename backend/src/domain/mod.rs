pub mod commands;
pub mod errors;
pub mod followup_service;
pub mod models;
pub mod mother_service;
pub mod session_service;

pub use followup_service::FollowUpService;
pub use mother_service::MotherService;
pub use session_service::SessionService;
