//! # Export Module
//!
//! Renders the inventory as a JSON backup document, a CSV sheet or a
//! plain-text summary. The JSON document is readable back through
//! [`Inventory::from_json`].

use crate::errors::Result;
use crate::expiry::{expiring_within, format_date, WEEK_DAYS};
use crate::inventory::{Category, Inventory, StorageLocation};
use crate::localization::LocalizationManager;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

/// Version stamped into exported JSON documents
pub const EXPORT_VERSION: &str = "1.0.0";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    #[serde(flatten)]
    inventory: &'a Inventory,
    export_date: String,
    version: &'static str,
}

/// Export the inventory as a pretty-printed JSON backup document
pub fn export_to_json(inventory: &Inventory, exported_at: DateTime<Utc>) -> Result<String> {
    let document = ExportDocument {
        inventory,
        export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        version: EXPORT_VERSION,
    };
    debug!("Exporting {} items as JSON", inventory.len());
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Quote a CSV field, doubling embedded quotes
fn csv_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Export the inventory as CSV with localized headers and section names
pub fn export_to_csv(inventory: &Inventory, localization: &LocalizationManager) -> String {
    let not_available = localization.get_message("csv-not-available", None);

    let headers = [
        "csv-header-section",
        "csv-header-name",
        "csv-header-quantity",
        "csv-header-unit",
        "csv-header-category",
        "csv-header-expiry",
    ]
    .iter()
    .map(|key| localization.get_message(key, None))
    .collect::<Vec<_>>()
    .join(",");

    let mut rows = vec![headers];
    for (location, item) in inventory.located_items() {
        let category = match item.category {
            Some(_) => localization.get_message(&item.category().message_id(), None),
            None => not_available.clone(),
        };
        let expiry = item.expiry_date.as_deref().unwrap_or(&not_available);

        rows.push(
            [
                localization.get_message(location.message_id(), None),
                csv_quote(&item.name),
                item.qty.to_string(),
                csv_quote(&item.unit),
                csv_quote(&category),
                csv_quote(expiry),
            ]
            .join(","),
        );
    }

    debug!("Exported {} CSV rows", rows.len() - 1);
    rows.join("\n")
}

/// Plain-text report of the inventory
///
/// Lists totals, item counts per category (in order of first appearance),
/// the number of items expiring within a week and item counts per location.
pub fn generate_summary(
    inventory: &Inventory,
    today: NaiveDate,
    localization: &LocalizationManager,
) -> String {
    let mut categories: IndexMap<Category, usize> = IndexMap::new();
    for item in inventory.items() {
        *categories.entry(item.category()).or_insert(0) += 1;
    }
    let expiring = expiring_within(inventory.items(), today, WEEK_DAYS).len();

    let title = localization.get_message("summary-title", None);
    let mut lines = vec![
        title.clone(),
        "=".repeat(title.chars().count()),
        String::new(),
        localization.get_message_with_args("summary-date", &[("date", &format_date(today))]),
        localization.get_message_with_args(
            "summary-total-items",
            &[("count", &inventory.len().to_string())],
        ),
        localization.get_message_with_args(
            "summary-total-quantity",
            &[("quantity", &inventory.total_quantity().to_string())],
        ),
        String::new(),
        localization.get_message("summary-categories", None),
    ];

    for (category, count) in &categories {
        let name = localization.get_message(&category.message_id(), None);
        lines.push(localization.get_message_with_args(
            "summary-category-line",
            &[("category", &name), ("count", &count.to_string())],
        ));
    }

    lines.push(String::new());
    lines.push(localization.get_message("summary-expiry", None));
    lines.push(localization.get_message_with_args(
        "summary-expiring-soon",
        &[("count", &expiring.to_string())],
    ));

    lines.push(String::new());
    lines.push(localization.get_message("summary-sections", None));
    for location in StorageLocation::ALL {
        let name = localization.get_message(location.message_id(), None);
        lines.push(localization.get_message_with_args(
            "summary-section-line",
            &[
                ("section", &name),
                ("count", &inventory.items_in(location).len().to_string()),
            ],
        ));
    }

    let mut summary = lines.join("\n");
    summary.push('\n');
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Item;
    use chrono::TimeZone;

    fn sample_inventory() -> Inventory {
        let mut inventory = Inventory::default();
        inventory.fridge.push(
            Item::new("1", "Latte \"fresco\"")
                .with_quantity(1.0, "L")
                .with_category(Category::Dairy)
                .with_expiry_date("20-10-2026"),
        );
        inventory.freezer.push(
            Item::new("2", "Piselli")
                .with_quantity(0.5, "kg")
                .with_category(Category::Frozen),
        );
        inventory
            .pantry
            .push(Item::new("3", "Pasta").with_quantity(2.0, "pz"));
        inventory
    }

    fn localization() -> LocalizationManager {
        LocalizationManager::new().unwrap()
    }

    #[test]
    fn test_export_to_json() {
        let exported_at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let json = export_to_json(&sample_inventory(), exported_at).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["exportDate"], "2026-10-18T09:30:00.000Z");
        assert_eq!(value["fridge"][0]["expiryDate"], "20-10-2026");
        assert_eq!(value["pantry"][0]["name"], "Pasta");

        let restored = Inventory::from_json(&json).unwrap();
        assert_eq!(restored, sample_inventory());
    }

    #[test]
    fn test_export_to_csv() {
        let csv = export_to_csv(&sample_inventory(), &localization());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Section,Name,Quantity,Unit,Category,Expiry Date");
        assert_eq!(
            lines[1],
            r#"Fridge,"Latte ""fresco""",1,"L","Dairy","20-10-2026""#
        );
        assert_eq!(lines[2], r#"Freezer,"Piselli",0.5,"kg","Frozen","N/A""#);
        assert_eq!(lines[3], r#"Pantry,"Pasta",2,"pz","N/A","N/A""#);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_export_to_csv_italian() {
        let localization = localization().with_language("it");
        let csv = export_to_csv(&sample_inventory(), &localization);
        assert!(csv.starts_with("Sezione,Nome,Quantità,Unità,Categoria,Data Scadenza\n"));
        assert!(csv.contains("Dispensa,\"Pasta\""));
    }

    #[test]
    fn test_generate_summary() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let summary = generate_summary(&sample_inventory(), today, &localization());

        assert!(summary.starts_with("FRIDGE, FREEZER AND PANTRY SUMMARY\n"));
        assert!(summary.contains("Date: 18-10-2026\n"));
        assert!(summary.contains("Total products: 3\n"));
        assert!(summary.contains("Total quantity: 3.5\n"));
        assert!(summary.contains("- Dairy: 1 products\n"));
        assert!(summary.contains("- Other: 1 products\n"));
        assert!(summary.contains("- Products expiring (7 days): 1\n"));
        assert!(summary.contains("- Freezer: 1 products\n"));

        let dairy = summary.find("- Dairy").unwrap();
        let frozen = summary.find("- Frozen").unwrap();
        assert!(dairy < frozen);
    }
}
