mod common;

use common::{env, seed_customer};
use storefront_server_lib::services::address_service::NewAddressFields;
use storefront_server_lib::services::errors::ServiceError;

fn fields(is_default: bool) -> NewAddressFields {
    NewAddressFields {
        full_name: "Jamie Doe".into(),
        phone: "555-0100".into(),
        address_line1: "1 Main St".into(),
        address_line2: None,
        city: "Springfield".into(),
        state: "IL".into(),
        zip_code: "62704".into(),
        country: "US".into(),
        is_default,
    }
}

#[tokio::test]
async fn at_most_one_default_address_per_user() {
    let env = env();
    let user = seed_customer(&env).await;

    let first = env
        .state
        .addresses
        .create(&user.id, fields(true))
        .await
        .expect("create failed");
    let second = env
        .state
        .addresses
        .create(&user.id, fields(true))
        .await
        .expect("create failed");

    let all = env.state.addresses.list(&user.id).await.expect("list failed");
    let defaults: Vec<_> = all.iter().filter(|a| a.is_default).collect();

    assert_eq!(all.len(), 2);
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, second.id);
    assert!(all.iter().any(|a| a.id == first.id && !a.is_default));
}

#[tokio::test]
async fn non_default_address_leaves_existing_default_alone() {
    let env = env();
    let user = seed_customer(&env).await;

    let default = env
        .state
        .addresses
        .create(&user.id, fields(true))
        .await
        .expect("create failed");
    env.state
        .addresses
        .create(&user.id, fields(false))
        .await
        .expect("create failed");

    let all = env.state.addresses.list(&user.id).await.expect("list failed");
    let defaults: Vec<_> = all.iter().filter(|a| a.is_default).collect();

    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, default.id);
}

#[tokio::test]
async fn create_requires_name_and_first_line() {
    let env = env();
    let user = seed_customer(&env).await;

    let mut bad = fields(false);
    bad.address_line1 = "  ".into();

    assert!(matches!(
        env.state.addresses.create(&user.id, bad).await,
        Err(ServiceError::Validation(_))
    ));
}

#[tokio::test]
async fn delete_is_scoped_to_the_owner() {
    let env = env();
    let owner = seed_customer(&env).await;
    let other = seed_customer(&env).await;

    let address = env
        .state
        .addresses
        .create(&owner.id, fields(false))
        .await
        .expect("create failed");

    assert!(matches!(
        env.state.addresses.delete(&address.id, &other.id).await,
        Err(ServiceError::NotFound("Address"))
    ));

    env.state
        .addresses
        .delete(&address.id, &owner.id)
        .await
        .expect("delete failed");
    assert!(env.state.addresses.list(&owner.id).await.expect("list failed").is_empty());
}
