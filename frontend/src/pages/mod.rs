pub mod archives;
pub mod dashboard;
pub mod not_found;

pub use dashboard::DashboardPage;
