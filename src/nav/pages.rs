/// Well-known paths referenced by guards and the default tree.
pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const UNAUTHORIZED: &str = "/unauthorized";
    pub const ADMIN_HOME: &str = "/admin";
    pub const ITIAN_HOME: &str = "/itian/profile";
    pub const EMPLOYER_HOME: &str = "/employer/profile";
}

/// The page components the navigation tree can point at.
///
/// The gating core does not render these; a `Page` value is the terminal
/// answer handed to whatever UI layer hosts the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Unauthorized,
    PostFeed,
    PostDetails,
    Chat,
    ProfileView,
    AdminDashboard,
    AdminUsers,
    AdminJobs,
    ItianProfile,
    ItianApplications,
    EmployerProfile,
    EmployerJobs,
    EmployerJobApplicants,
}

impl Page {
    /// Stable name used in log lines and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Register => "register",
            Page::Unauthorized => "unauthorized",
            Page::PostFeed => "post-feed",
            Page::PostDetails => "post-details",
            Page::Chat => "chat",
            Page::ProfileView => "profile-view",
            Page::AdminDashboard => "admin-dashboard",
            Page::AdminUsers => "admin-users",
            Page::AdminJobs => "admin-jobs",
            Page::ItianProfile => "itian-profile",
            Page::ItianApplications => "itian-applications",
            Page::EmployerProfile => "employer-profile",
            Page::EmployerJobs => "employer-jobs",
            Page::EmployerJobApplicants => "employer-job-applicants",
        }
    }
}
