pub mod event_use_cases;
pub mod ports;
pub mod services;

pub use event_use_cases::EventUseCases;
