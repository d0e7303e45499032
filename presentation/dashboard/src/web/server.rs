use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, get,
    listener::TcpListener,
    middleware::{CookieJarManager, Tracing},
    post,
};

use crate::client::sales_api::SalesApiClient;
use crate::config::app_config::DashboardConfig;
use crate::web::pages::{self, DashboardState};
use crate::web::templates::Templates;

pub struct Server;

impl Server {
    pub fn app(state: Arc<DashboardState>) -> impl Endpoint {
        Route::new()
            .at("/", get(pages::index))
            .at("/login", post(pages::login))
            .at("/logout", post(pages::logout))
            .at("/action", get(pages::action_form).post(pages::run_action))
            .data(state)
            .with(CookieJarManager::new())
            .with(Tracing)
    }

    pub async fn run(config: DashboardConfig) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let state = Arc::new(DashboardState {
            backend: Arc::new(SalesApiClient::new(config.api_url.clone())),
            templates: Templates::new()?,
        });

        tracing::info!(
            project_id = %config.firebase.project_id(),
            api_url = %config.api_url,
            "Dashboard running at http://{}",
            addr
        );
        PoemServer::new(TcpListener::bind(&addr))
            .run(Self::app(state))
            .await?;
        Ok(())
    }
}
