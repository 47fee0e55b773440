//! Cart behavior through the application root, over real file storage.

use rust_decimal::Decimal;

use kalartz_core::ProductId;
use kalartz_integration_tests::{catalog_product, reload, temp_storefront};

#[test]
fn repeated_adds_accumulate_quantity() {
    let (mut front, _notifier, _dir) = temp_storefront();
    let headphones = catalog_product(&front, "1");

    // $299.99 x 2
    front.cart_mut().add_item(&headphones, 2).unwrap();
    assert_eq!(front.cart().total_items(), 2);
    assert_eq!(front.cart().total_price().amount, Decimal::new(599_98, 2));

    // Same product again folds into the existing line.
    front.cart_mut().add_item(&headphones, 1).unwrap();
    assert_eq!(front.cart().total_items(), 3);
    assert_eq!(front.cart().total_price().amount, Decimal::new(899_97, 2));
    assert_eq!(front.cart().lines().len(), 1);
}

#[test]
fn total_price_tracks_any_op_sequence() {
    let (mut front, _notifier, _dir) = temp_storefront();
    let headphones = catalog_product(&front, "1");
    let watch = catalog_product(&front, "2");
    let coffee = catalog_product(&front, "3");

    front.cart_mut().add_item(&headphones, 1).unwrap();
    front.cart_mut().add_item(&watch, 2).unwrap();
    front.cart_mut().add_item(&coffee, 4).unwrap();
    front
        .cart_mut()
        .update_quantity(&ProductId::new("2"), 1)
        .unwrap();
    front.cart_mut().remove_item(&ProductId::new("1")).unwrap();

    // 1 x $199.99 + 4 x $24.99
    assert_eq!(front.cart().total_price().amount, Decimal::new(299_95, 2));
    assert_eq!(front.cart().total_items(), 5);
}

#[test]
fn remove_absent_product_changes_nothing() {
    let (mut front, _notifier, _dir) = temp_storefront();
    let coffee = catalog_product(&front, "3");
    front.cart_mut().add_item(&coffee, 1).unwrap();

    let before = front.cart().lines().to_vec();
    front.cart_mut().remove_item(&ProductId::new("999")).unwrap();
    assert_eq!(front.cart().lines(), before.as_slice());
}

#[test]
fn cart_survives_reload() {
    let (mut front, _notifier, dir) = temp_storefront();
    let watch = catalog_product(&front, "2");
    front.cart_mut().add_item(&watch, 3).unwrap();

    let expected_lines = front.cart().lines().to_vec();
    front.dispose().unwrap();

    let reloaded = reload(&dir);
    assert_eq!(reloaded.cart().lines(), expected_lines.as_slice());
    assert_eq!(reloaded.cart().total_items(), 3);
}

#[test]
fn clear_empties_cart_and_storage_blob() {
    let (mut front, _notifier, dir) = temp_storefront();
    let watch = catalog_product(&front, "2");
    front.cart_mut().add_item(&watch, 1).unwrap();
    front.cart_mut().clear().unwrap();
    assert!(front.cart().is_empty());

    let reloaded = reload(&dir);
    assert!(reloaded.cart().is_empty());
}
