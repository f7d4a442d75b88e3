use std::sync::Arc;
use std::time::Duration;

use storefront_server_lib::api::config::{AuthMode, Config};
use storefront_server_lib::api::server;
use storefront_server_lib::api::state::{AppState, Credentials};
use storefront_server_lib::data::database::Database;
use storefront_server_lib::data::repos::implementors::address_repo::AddressRepo;
use storefront_server_lib::data::repos::implementors::cart_repo::CartRepo;
use storefront_server_lib::data::repos::implementors::discount_repo::DiscountRepo;
use storefront_server_lib::data::repos::implementors::order_repo::OrderRepo;
use storefront_server_lib::data::repos::implementors::product_repo::ProductRepo;
use storefront_server_lib::data::repos::implementors::user_repo::UserRepo;
use storefront_server_lib::data::repos::traits::{
    AddressStore, CartStore, DiscountStore, OrderStore, ProductStore, UserStore,
};
use storefront_server_lib::security::jwt::JwtService;
use storefront_server_lib::security::provider::ProviderClient;
use storefront_server_lib::services::address_service::AddressService;
use storefront_server_lib::services::cart_service::CartService;
use storefront_server_lib::services::catalog_service::CatalogService;
use storefront_server_lib::services::discount_service::DiscountService;
use storefront_server_lib::services::order_service::OrderService;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "storefront_server=debug,tower_http=debug,axum=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new();
    let db = Database::connect(&config.database_url);

    let users: Arc<dyn UserStore> = Arc::new(UserRepo::new(db.clone()));
    let products: Arc<dyn ProductStore> = Arc::new(ProductRepo::new(db.clone()));
    let carts: Arc<dyn CartStore> = Arc::new(CartRepo::new(db.clone()));
    let addresses: Arc<dyn AddressStore> = Arc::new(AddressRepo::new(db.clone()));
    let orders: Arc<dyn OrderStore> = Arc::new(OrderRepo::new(db.clone()));
    let discounts: Arc<dyn DiscountStore> = Arc::new(DiscountRepo::new(db));

    let credentials = match config.auth_mode {
        AuthMode::Local => Credentials::Local {
            jwt: JwtService::new(config.jwt_secret.clone(), config.jwt_expiration_days),
        },
        AuthMode::Delegated => {
            let domain = config
                .provider_domain
                .clone()
                .expect("PROVIDER_DOMAIN must be set in delegated mode");
            let client_id = config
                .provider_client_id
                .clone()
                .expect("PROVIDER_CLIENT_ID must be set in delegated mode");
            let provider = ProviderClient::new(
                domain,
                client_id,
                Duration::from_secs(config.provider_timeout_secs),
            )
            .expect("Failed to build identity provider client");
            Credentials::Delegated { provider }
        }
    };

    let state = Arc::new(AppState {
        users,
        catalog: CatalogService::new(products.clone()),
        cart: CartService::new(carts.clone(), products.clone()),
        addresses: AddressService::new(addresses.clone()),
        discounts: DiscountService::new(discounts.clone()),
        orders: OrderService::new(orders, carts, products, addresses, discounts),
        credentials,
    });

    server::start(state, &config.bind_addr, &config.cors_origins).await;
}
