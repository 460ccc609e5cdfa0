//! Build-time catalog settings.
//!
//! Values come from `SHELF_*` environment variables captured at compile time
//! (the web build has no process environment), falling back to the defaults
//! below.

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

const DEFAULT_PROJECT: &str = "inventory-46f20";
const DEFAULT_DATABASE: &str = "(default)";
const DEFAULT_COLLECTION: &str = "inventoryDetails";
const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub project_id: String,
    pub database: String,
    pub collection: String,
    pub items_per_page: usize,
    /// Show inactive items as well. Display-only, not an access control.
    pub admin_mode: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            admin_mode: false,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "SHELF_FIRESTORE_PROJECT" => option_env!("SHELF_FIRESTORE_PROJECT"),
            "SHELF_FIRESTORE_DATABASE" => option_env!("SHELF_FIRESTORE_DATABASE"),
            "SHELF_COLLECTION" => option_env!("SHELF_COLLECTION"),
            "SHELF_ITEMS_PER_PAGE" => option_env!("SHELF_ITEMS_PER_PAGE"),
            "SHELF_ADMIN_MODE" => option_env!("SHELF_ADMIN_MODE"),
            _ => None,
        })
    }

    /// Build from any key lookup; empty or unparsable values keep the default.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let get = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            project_id: get("SHELF_FIRESTORE_PROJECT")
                .map(String::from)
                .unwrap_or(defaults.project_id),
            database: get("SHELF_FIRESTORE_DATABASE")
                .map(String::from)
                .unwrap_or(defaults.database),
            collection: get("SHELF_COLLECTION")
                .map(String::from)
                .unwrap_or(defaults.collection),
            items_per_page: get("SHELF_ITEMS_PER_PAGE")
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.items_per_page),
            admin_mode: get("SHELF_ADMIN_MODE")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.admin_mode),
        }
    }

    /// Unparameterized list URL for the inventory collection.
    pub fn documents_url(&self) -> String {
        format!(
            "{FIRESTORE_BASE}/projects/{}/databases/{}/documents/{}",
            self.project_id, self.database, self.collection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url() {
        assert_eq!(
            CatalogConfig::default().documents_url(),
            "https://firestore.googleapis.com/v1/projects/inventory-46f20/databases/(default)/documents/inventoryDetails"
        );
    }

    #[test]
    fn lookup_overrides() {
        let config = CatalogConfig::from_lookup(|key| match key {
            "SHELF_FIRESTORE_PROJECT" => Some("demo"),
            "SHELF_COLLECTION" => Some(" stock "),
            "SHELF_ITEMS_PER_PAGE" => Some("4"),
            "SHELF_ADMIN_MODE" => Some("TRUE"),
            _ => None,
        });
        assert_eq!(config.project_id, "demo");
        assert_eq!(config.database, "(default)");
        assert_eq!(config.collection, "stock");
        assert_eq!(config.items_per_page, 4);
        assert!(config.admin_mode);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = CatalogConfig::from_lookup(|key| match key {
            "SHELF_ITEMS_PER_PAGE" => Some("0"),
            "SHELF_FIRESTORE_PROJECT" => Some(""),
            "SHELF_ADMIN_MODE" => Some("nope"),
            _ => None,
        });
        assert_eq!(config, CatalogConfig::default());
    }
}
