mod view_dashboard;

pub use view_dashboard::view_dashboard_handler;
