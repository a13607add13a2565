mod view_dashboard_use_case;

pub use view_dashboard_use_case::{DashboardView, ViewDashboardError, ViewDashboardUseCase};
