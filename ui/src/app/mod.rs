mod dashboard_page;
mod login_page;

pub use dashboard_page::DashboardPage;
pub use login_page::LoginPage;
