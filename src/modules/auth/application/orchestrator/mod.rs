pub mod registration;

pub use registration::{RegistrationError, RegistrationOrchestrator, RegistrationOutput};
