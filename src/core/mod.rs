pub mod error;
pub mod sm3;
