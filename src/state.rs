use crate::client::ApiClient;
use crate::scheduler::SchedulerSession;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub scheduler: Arc<Mutex<SchedulerSession<ApiClient>>>,
}

impl AppState {
    pub fn new(client: ApiClient) -> Self {
        Self {
            scheduler: Arc::new(Mutex::new(SchedulerSession::new(client.clone()))),
            client,
        }
    }
}
