pub mod dashboard_use_cases;
pub mod ports;
pub mod services;

pub use dashboard_use_cases::DashboardUseCases;
