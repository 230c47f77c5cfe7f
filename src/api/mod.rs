pub mod client;

pub use client::{DashboardClient, HealthStatus, ServiceInfo};
