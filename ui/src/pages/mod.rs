pub mod admin_dashboard;
pub mod home;
pub mod not_found;

pub use admin_dashboard::AdminDashboardPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
