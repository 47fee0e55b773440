//! Integration tests for Kalartz.
//!
//! Exercises the state layer the way the UI shell does: a [`Storefront`]
//! built over real file-backed storage in a temp directory, reloaded
//! between assertions to prove the persistence round trip.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p kalartz-integration-tests
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use tempfile::TempDir;

use kalartz_core::{CurrencyCode, Price, ProductId};
use kalartz_storefront::Storefront;
use kalartz_storefront::catalog::{CatalogProduct, StaticCatalog};
use kalartz_storefront::config::StorefrontConfig;
use kalartz_storefront::notify::{Notifier, Toast};

/// A notifier that records every toast for later assertions.
#[derive(Debug, Default)]
pub struct CapturingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl CapturingNotifier {
    /// The titles of every toast shown so far, in order.
    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }
}

impl Notifier for CapturingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}

/// A small catalog in the shape the storefront's landing page shows.
#[must_use]
pub fn demo_catalog() -> Arc<StaticCatalog> {
    Arc::new(StaticCatalog::new(vec![
        CatalogProduct {
            id: ProductId::new("1"),
            name: "Premium Wireless Headphones X2000".to_owned(),
            price: Price::from_cents(299_99, CurrencyCode::USD),
            category: Some("Electronics".to_owned()),
            image: Some("headphones.jpg".to_owned()),
        },
        CatalogProduct {
            id: ProductId::new("2"),
            name: "Smart Fitness Watch Series 5".to_owned(),
            price: Price::from_cents(199_99, CurrencyCode::USD),
            category: Some("Wearables".to_owned()),
            image: Some("watch.jpg".to_owned()),
        },
        CatalogProduct {
            id: ProductId::new("3"),
            name: "Artisanal Dark Roast Coffee Beans".to_owned(),
            price: Price::from_cents(24_99, CurrencyCode::USD),
            category: Some("Food & Beverage".to_owned()),
            image: None,
        },
    ]))
}

/// A storefront over file-backed storage in a fresh temp directory.
///
/// Returns the temp dir guard alongside so the directory outlives the
/// storefront and can be reopened by [`reload`].
#[must_use]
pub fn temp_storefront() -> (Storefront, Arc<CapturingNotifier>, TempDir) {
    kalartz_storefront::telemetry::init();
    let dir = TempDir::new().expect("create temp data dir");
    let notifier = Arc::new(CapturingNotifier::default());
    let front = Storefront::init(
        StorefrontConfig::with_data_dir(dir.path()),
        demo_catalog(),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    )
    .expect("init storefront");
    (front, notifier, dir)
}

/// Simulate a page reload: a fresh storefront over the same data directory.
#[must_use]
pub fn reload(dir: &TempDir) -> Storefront {
    Storefront::init(
        StorefrontConfig::with_data_dir(dir.path()),
        demo_catalog(),
        Arc::new(CapturingNotifier::default()) as Arc<dyn Notifier>,
    )
    .expect("reload storefront")
}

/// Look up a catalog product that is known to exist.
#[must_use]
pub fn catalog_product(front: &Storefront, id: &str) -> CatalogProduct {
    front
        .catalog()
        .product(&ProductId::new(id))
        .expect("known catalog product")
}
