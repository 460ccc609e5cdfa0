//! Catalog fetch → page layout → add to cart → cart page, driven through the
//! same functions the UI calls, with an in-memory session store.

use shelf_common::cart::CartEntry;
use shelf_common::firestore::parse_list_response;
use shelf_common::inventory::decode_documents;
use shelf_common::pagination::PageWindow;
use shelf_common::storage::{CartStore, MemoryStore};
use shelf_common::view::{CartView, CatalogBlock, CatalogPage, CatalogView, EMPTY_CART_MESSAGE};

const SCENARIO: &str = r#"{
  "documents": [
    {
      "name": "projects/inventory-46f20/databases/(default)/documents/inventoryDetails/a",
      "fields": {
        "Title": {"stringValue": "Alpha"},
        "Price": {"doubleValue": 9.99},
        "Quantity": {"integerValue": "5"}
      }
    },
    {
      "name": "projects/inventory-46f20/databases/(default)/documents/inventoryDetails/b",
      "fields": {
        "Title": {"stringValue": "Beta"},
        "Price": {"doubleValue": 5.0},
        "Quantity": {"integerValue": "0"}
      }
    },
    {
      "name": "projects/inventory-46f20/databases/(default)/documents/inventoryDetails/c",
      "fields": {
        "Title": {"stringValue": "Gamma"},
        "Price": {"doubleValue": 1.0},
        "Quantity": {"integerValue": "30"}
      }
    },
    {
      "name": "projects/inventory-46f20/databases/(default)/documents/inventoryDetails/d",
      "fields": {
        "Title": {"stringValue": "Hidden"},
        "Price": {"doubleValue": 2.0},
        "Quantity": {"integerValue": "3"},
        "IsActive": {"booleanValue": false}
      }
    }
  ]
}"#;

fn catalog_page(admin: bool) -> CatalogPage {
    let docs = parse_list_response(200, SCENARIO).expect("scenario body decodes");
    let items = decode_documents(&docs);
    match CatalogView::from_fetch(Some(&Ok(items)), PageWindow::new(10), admin) {
        CatalogView::Page(page) => page,
        other => panic!("expected a page, got {other:?}"),
    }
}

fn summary(page: &CatalogPage) -> Vec<String> {
    page.blocks
        .iter()
        .map(|block| match block {
            CatalogBlock::LimitedHeading => "limited".to_string(),
            CatalogBlock::Divider => "---".to_string(),
            CatalogBlock::Card(card) if card.cart_entry.is_some() => card.id.clone(),
            CatalogBlock::Card(card) => format!("{} (out of stock)", card.id),
        })
        .collect()
}

#[test]
fn shopper_flow() {
    tracing_subscriber::fmt::try_init().ok();

    // ── Step 1: shopper sees active items, limited stock first ──
    let page = catalog_page(false);
    assert_eq!(
        summary(&page),
        vec!["limited", "a", "---", "c", "b (out of stock)"]
    );
    assert!(!page.show_previous);
    assert!(!page.show_next);

    // ── Step 2: empty session renders the empty cart ──
    let session = MemoryStore::new();
    let store = CartStore::new(&session);
    assert_eq!(CartView::of(&store.load().unwrap()), CartView::Empty);
    assert_eq!(EMPTY_CART_MESSAGE, "Your cart is empty.");

    // ── Step 3: "Add to Cart" on "a" twice ──
    let entry: CartEntry = page
        .cards()
        .find(|card| card.id == "a")
        .and_then(|card| card.cart_entry.clone())
        .expect("in-stock card carries an entry");
    store.add_to_cart(entry.clone()).unwrap();
    store.add_to_cart(entry).unwrap();

    // ── Step 4: cart page reads the same session ──
    let cart = store.load().unwrap();
    assert_eq!(cart.len(), 1);
    let line = &cart.lines()[0];
    assert_eq!(line.id, "a");
    assert_eq!(line.quantity, 2);
    assert_eq!(line.price, 9.99);
    assert_eq!(cart.grand_total_label(), "19.98");
    assert_eq!(store.stored_total().unwrap().as_deref(), Some("19.98"));

    match CartView::of(&cart) {
        CartView::Lines { lines, grand_total_label } => {
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].title, "Alpha");
            assert_eq!(lines[0].total_label, "Total: $19.98");
            assert_eq!(grand_total_label, "Grand Total: $19.98");
        }
        CartView::Empty => panic!("cart should not be empty"),
    }
}

#[test]
fn admin_sees_inactive_items() {
    let page = catalog_page(true);
    assert_eq!(
        summary(&page),
        vec!["limited", "a", "d", "---", "c", "b (out of stock)"]
    );
}

#[test]
fn failed_fetch_replaces_list() {
    let err = parse_list_response(
        403,
        r#"{"error":{"code":403,"message":"Permission denied","status":"PERMISSION_DENIED"}}"#,
    )
    .map(|docs| decode_documents(&docs));
    assert_eq!(
        CatalogView::from_fetch(Some(&err), PageWindow::default(), false),
        CatalogView::Failed("Error fetching inventory: Error 403: Permission denied".into())
    );
}
