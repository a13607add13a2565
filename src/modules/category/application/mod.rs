pub mod category_use_cases;
pub mod ports;
pub mod services;

pub use category_use_cases::CategoryUseCases;
