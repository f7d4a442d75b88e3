mod common;

use common::{env, seed_customer, seed_product};
use storefront_server_lib::services::errors::ServiceError;

#[tokio::test]
async fn adding_same_product_merges_quantities() {
    let env = env();
    let user = seed_customer(&env).await;
    let product = seed_product(&env, "Trail Shoe", 79.99, "shoes", "Acme").await;

    env.state
        .cart
        .add(&user.id, &product.id, 1)
        .await
        .expect("add failed");
    let merged = env
        .state
        .cart
        .add(&user.id, &product.id, 2)
        .await
        .expect("add failed");

    assert_eq!(merged.quantity, 3);

    let cart = env.state.cart.list(&user.id).await.expect("list failed");
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity, 3);
}

#[tokio::test]
async fn simultaneous_adds_merge_into_one_line() {
    let env = env();
    let user = seed_customer(&env).await;
    let product = seed_product(&env, "Trail Shoe", 79.99, "shoes", "Acme").await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let cart = env.state.cart.clone();
        let user_id = user.id.clone();
        let product_id = product.id.clone();
        handles.push(tokio::spawn(async move {
            cart.add(&user_id, &product_id, 1).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("add failed");
    }

    let lines = env.state.cart.list(&user.id).await.expect("list failed");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 8);
}

#[tokio::test]
async fn add_rejects_unknown_product_and_zero_quantity() {
    let env = env();
    let user = seed_customer(&env).await;
    let product = seed_product(&env, "Trail Shoe", 79.99, "shoes", "Acme").await;

    assert!(matches!(
        env.state.cart.add(&user.id, "missing", 1).await,
        Err(ServiceError::NotFound("Product"))
    ));
    assert!(matches!(
        env.state.cart.add(&user.id, &product.id, 0).await,
        Err(ServiceError::Validation(_))
    ));
}

#[tokio::test]
async fn update_is_scoped_to_the_owner() {
    let env = env();
    let owner = seed_customer(&env).await;
    let other = seed_customer(&env).await;
    let product = seed_product(&env, "Trail Shoe", 79.99, "shoes", "Acme").await;

    let item = env
        .state
        .cart
        .add(&owner.id, &product.id, 1)
        .await
        .expect("add failed");

    // Another user addressing the same item id sees nothing.
    assert!(matches!(
        env.state.cart.update(&item.id, &other.id, 5).await,
        Err(ServiceError::NotFound("Cart item"))
    ));
    assert!(matches!(
        env.state.cart.remove(&item.id, &other.id).await,
        Err(ServiceError::NotFound("Cart item"))
    ));

    let updated = env
        .state
        .cart
        .update(&item.id, &owner.id, 5)
        .await
        .expect("update failed");
    assert_eq!(updated.quantity, 5);
}

#[tokio::test]
async fn clear_empties_only_that_users_cart() {
    let env = env();
    let a = seed_customer(&env).await;
    let b = seed_customer(&env).await;
    let product = seed_product(&env, "Trail Shoe", 79.99, "shoes", "Acme").await;

    env.state.cart.add(&a.id, &product.id, 1).await.expect("add failed");
    env.state.cart.add(&b.id, &product.id, 2).await.expect("add failed");

    env.state.cart.clear(&a.id).await.expect("clear failed");

    assert!(env.state.cart.list(&a.id).await.expect("list failed").is_empty());
    assert_eq!(env.state.cart.list(&b.id).await.expect("list failed").len(), 1);
}

#[tokio::test]
async fn clearing_an_empty_cart_succeeds() {
    let env = env();
    let user = seed_customer(&env).await;
    env.state.cart.clear(&user.id).await.expect("clear failed");
}
