//! Cart mutations and persistence across sessions sharing a store.

use shopbot_integration_tests::{test_catalog, test_session, test_store};
use shopbot_storefront::cart::TAX_RATE;
use shopbot_storefront::session::CHECKOUT_REPLY;

#[tokio::test]
async fn test_adding_same_product_twice_merges_the_line() {
    let mut session = test_session(test_store());
    let catalog = test_catalog();
    let products = catalog.products();
    let product = products.first().expect("seeded catalog is non-empty");

    session.add_to_cart(product.clone()).expect("add");
    session.add_to_cart(product.clone()).expect("add");

    assert_eq!(session.cart().items().len(), 1);
    assert_eq!(session.cart().item_count(), 2);
    assert_eq!(session.cart().subtotal(), product.price * 2.0);
}

#[tokio::test]
async fn test_quantity_zero_removes_the_line() {
    let mut session = test_session(test_store());
    let catalog = test_catalog();
    let products = catalog.products();
    let product = products.first().expect("seeded catalog is non-empty");

    session.add_to_cart(product.clone()).expect("add");
    session.update_quantity(&product.id, 0).expect("update");

    assert!(session.cart().is_empty());
    assert_eq!(session.cart().total(), 0.0);
}

#[tokio::test]
async fn test_totals_invariant_holds_over_mixed_lines() {
    let mut session = test_session(test_store());
    let catalog = test_catalog();
    let products = catalog.products();

    for product in products.iter().take(3) {
        session.add_to_cart(product.clone()).expect("add");
    }
    let first = products.first().expect("seeded catalog is non-empty");
    session.update_quantity(&first.id, 4).expect("update");

    let cart = session.cart();
    let subtotal: f64 = cart.items().iter().map(shopbot_core::CartItem::line_total).sum();
    assert_eq!(cart.subtotal(), subtotal);
    assert!((cart.tax() - subtotal * TAX_RATE).abs() < 1e-9);
    assert!((cart.total() - (subtotal + cart.tax())).abs() < 1e-9);
}

#[tokio::test]
async fn test_cart_survives_a_new_session_over_the_same_store() {
    let store = test_store();
    let catalog = test_catalog();
    let products = catalog.products();
    let product = products.first().expect("seeded catalog is non-empty");

    {
        let mut session = test_session(store.clone());
        session.add_to_cart(product.clone()).expect("add");
        session.add_to_cart(product.clone()).expect("add");
    }

    let restored = test_session(store);
    assert_eq!(restored.cart().items().len(), 1);
    assert_eq!(restored.cart().item_count(), 2);
    assert_eq!(
        restored.cart().items().first().map(|item| item.product.id.clone()),
        Some(product.id.clone())
    );
}

#[tokio::test]
async fn test_user_survives_a_new_session_over_the_same_store() {
    let store = test_store();

    {
        let mut session = test_session(store.clone());
        let user = session.login("dana@example.com").await.expect("login");
        assert_eq!(user.name, "dana");
    }

    let restored = test_session(store);
    let user = restored.user().expect("user restored from storage");
    assert_eq!(user.email.as_str(), "dana@example.com");
}

#[tokio::test]
async fn test_logout_clears_persisted_state() {
    let store = test_store();
    let catalog = test_catalog();
    let products = catalog.products();
    let product = products.first().expect("seeded catalog is non-empty");

    let mut session = test_session(store.clone());
    session.login("dana@example.com").await.expect("login");
    session.add_to_cart(product.clone()).expect("add");
    session.logout().await.expect("logout");

    assert!(session.user().is_none());
    assert!(session.cart().is_empty());

    let restored = test_session(store);
    assert!(restored.user().is_none());
    assert!(restored.cart().is_empty());
}

#[tokio::test]
async fn test_checkout_is_a_stub_that_leaves_the_cart_alone() {
    let mut session = test_session(test_store());
    let catalog = test_catalog();
    let products = catalog.products();
    let product = products.first().expect("seeded catalog is non-empty");

    session.add_to_cart(product.clone()).expect("add");
    assert_eq!(session.checkout(), CHECKOUT_REPLY);
    assert_eq!(session.cart().item_count(), 1);
}
