use std::sync::Arc;

use crate::dashboard::application::ports::incoming::use_cases::ViewDashboardUseCase;

#[derive(Clone)]
pub struct DashboardUseCases {
    pub view: Arc<dyn ViewDashboardUseCase + Send + Sync>,
}
