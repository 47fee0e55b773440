//! Session lifecycle and the full-state reload round trip.

use kalartz_core::{ProductId, UserRole};
use kalartz_integration_tests::{catalog_product, reload, temp_storefront};

#[tokio::test]
async fn login_survives_reload_and_logout_does_not() {
    let (mut front, _notifier, dir) = temp_storefront();

    front
        .auth_mut()
        .login("maya@example.com", "pw", UserRole::Customer)
        .await
        .unwrap();
    front.dispose().unwrap();

    let mut reloaded = reload(&dir);
    let user = reloaded.auth().user().expect("session restored");
    assert_eq!(user.email.as_str(), "maya@example.com");
    assert_eq!(user.name, "maya");
    assert_eq!(user.role, UserRole::Customer);

    reloaded.auth_mut().logout().unwrap();
    reloaded.dispose().unwrap();

    let signed_out = reload(&dir);
    assert!(signed_out.auth().user().is_none());
}

#[tokio::test]
async fn whole_state_layer_round_trips() {
    let (mut front, _notifier, dir) = temp_storefront();

    front
        .auth_mut()
        .login("vendor@example.com", "pw", UserRole::Vendor)
        .await
        .unwrap();
    let headphones = catalog_product(&front, "1");
    let coffee = catalog_product(&front, "3");
    front.cart_mut().add_item(&headphones, 2).unwrap();
    front.wishlist_mut().add_item(&coffee).unwrap();

    let cart_lines = front.cart().lines().to_vec();
    let wishlist_entries = front.wishlist().entries().to_vec();
    let user = front.auth().user().cloned().unwrap();
    front.dispose().unwrap();

    // Observable state after reload equals state before it.
    let reloaded = reload(&dir);
    assert_eq!(reloaded.cart().lines(), cart_lines.as_slice());
    assert_eq!(reloaded.wishlist().entries(), wishlist_entries.as_slice());
    assert_eq!(reloaded.auth().user(), Some(&user));
    assert!(reloaded.wishlist().contains(&ProductId::new("3")));
}
