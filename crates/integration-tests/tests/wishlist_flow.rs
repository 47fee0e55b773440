//! Wishlist behavior: idempotent adds, membership, and shopper feedback.

use kalartz_core::ProductId;
use kalartz_integration_tests::{catalog_product, reload, temp_storefront};

#[test]
fn double_add_keeps_one_entry() {
    let (mut front, _notifier, _dir) = temp_storefront();
    let headphones = catalog_product(&front, "1");

    front.wishlist_mut().add_item(&headphones).unwrap();
    front.wishlist_mut().add_item(&headphones).unwrap();

    assert_eq!(front.wishlist().entries().len(), 1);
}

#[test]
fn shopper_is_told_about_every_outcome() {
    let (mut front, notifier, _dir) = temp_storefront();
    let headphones = catalog_product(&front, "1");
    let watch = catalog_product(&front, "2");

    front.wishlist_mut().add_item(&headphones).unwrap();
    front.wishlist_mut().add_item(&headphones).unwrap();
    front.wishlist_mut().add_item(&watch).unwrap();
    front
        .wishlist_mut()
        .remove_item(&ProductId::new("2"))
        .unwrap();
    front.wishlist_mut().clear().unwrap();

    assert_eq!(
        notifier.titles(),
        vec![
            "Added to Wishlist!",
            "Already in Wishlist",
            "Added to Wishlist!",
            "Removed from Wishlist",
            "Wishlist Cleared",
        ]
    );
}

#[test]
fn membership_check_matches_contents() {
    let (mut front, _notifier, _dir) = temp_storefront();
    let coffee = catalog_product(&front, "3");
    front.wishlist_mut().add_item(&coffee).unwrap();

    assert!(front.wishlist().contains(&ProductId::new("3")));
    assert!(!front.wishlist().contains(&ProductId::new("1")));
}

#[test]
fn wishlist_survives_reload() {
    let (mut front, _notifier, dir) = temp_storefront();
    let coffee = catalog_product(&front, "3");
    front.wishlist_mut().add_item(&coffee).unwrap();
    front.dispose().unwrap();

    let reloaded = reload(&dir);
    assert!(reloaded.wishlist().contains(&ProductId::new("3")));
    assert_eq!(reloaded.wishlist().entries().len(), 1);
}
