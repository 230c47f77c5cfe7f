pub mod dashboard;
pub mod email;
