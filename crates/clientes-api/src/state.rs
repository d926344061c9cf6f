use std::sync::Arc;

use clientes_core::repositories::CustomerRepository;
use clientes_core::services::CustomerService;
use clientes_shared::config::AppConfig;

pub type DynCustomerService = CustomerService<dyn CustomerRepository>;

#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<DynCustomerService>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(repo: Arc<dyn CustomerRepository>, config: AppConfig) -> Self {
        Self {
            customers: Arc::new(CustomerService::new(repo)),
            config,
        }
    }
}
