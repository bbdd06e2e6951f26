mod company_repo;
mod dashboard_repo;
mod user_repo;

pub use company_repo::CompanyRepo;
pub use dashboard_repo::DashboardRepo;
pub use user_repo::UserRepo;
