pub mod access;
pub mod entities;
pub mod role;
