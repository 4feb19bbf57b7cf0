use serde_json::json;

use crate::catalog::Catalog;
use crate::tools::ToolResult;

/// Price lookup. Cities absent from the catalog get the "Unknown"
/// sentinel rather than a failure.
pub fn get_ticket_price(catalog: &Catalog, destination_city: &str) -> ToolResult {
    let price = catalog.price(destination_city).unwrap_or("Unknown");
    ToolResult::success(json!({
        "destination_city": destination_city,
        "price": price,
    }))
}
