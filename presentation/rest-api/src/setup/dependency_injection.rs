use std::sync::Arc;

use datamart::sale::repository::SaleRepositoryInMemory;
use firebase::client::FirebaseClient;
use firebase::identity::IdentityProviderFirebase;
use firebase::settings::FirebaseSettings;
use firebase::token_verifier::GoogleTokenVerifier;
use logger::TracingLogger;

use business::application::auth::login::LoginUseCaseImpl;
use business::application::sale::first_record::FirstRecordUseCaseImpl;
use business::application::sale::search::SearchSalesUseCaseImpl;
use business::application::sale::totals::SalesTotalsUseCaseImpl;
use business::domain::auth::services::{IdentityProvider, TokenVerifier};
use business::domain::sale::repository::SaleRepository;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub sale_api: crate::api::sale::routes::SaleApi,
    pub token_verifier: Arc<dyn TokenVerifier>,
}

impl DependencyContainer {
    pub fn new(firebase: &FirebaseSettings, sales: SaleRepositoryInMemory) -> Self {
        tracing::info!("Serving {} sales from the datamart", sales.len());

        // Infrastructure adapters
        let firebase_client = FirebaseClient::new(firebase);
        let identity_provider = Arc::new(IdentityProviderFirebase::new(firebase_client.clone()));
        let token_verifier = Arc::new(GoogleTokenVerifier::new(
            firebase_client,
            firebase.project_id(),
        ));

        Self::with_adapters(Arc::new(sales), identity_provider, token_verifier)
    }

    pub fn with_adapters(
        sale_repository: Arc<dyn SaleRepository>,
        identity_provider: Arc<dyn IdentityProvider>,
        token_verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(sale_repository.clone());

        // Auth use cases
        let login_use_case = Arc::new(LoginUseCaseImpl {
            provider: identity_provider,
            logger: logger.clone(),
        });

        // Sale use cases
        let search_use_case = Arc::new(SearchSalesUseCaseImpl {
            repository: sale_repository.clone(),
            logger: logger.clone(),
        });
        let totals_use_case = Arc::new(SalesTotalsUseCaseImpl {
            repository: sale_repository.clone(),
            logger: logger.clone(),
        });
        let first_record_use_case = Arc::new(FirstRecordUseCaseImpl {
            repository: sale_repository,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(login_use_case);
        let sale_api = crate::api::sale::routes::SaleApi::new(
            search_use_case,
            totals_use_case,
            first_record_use_case,
        );

        Self {
            health_api,
            auth_api,
            sale_api,
            token_verifier,
        }
    }
}
