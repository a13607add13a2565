mod view_dashboard_service;

pub use view_dashboard_service::ViewDashboardService;
