pub mod auth;
pub mod category;
pub mod dashboard;
pub mod email;
pub mod event;
