use serde_json::json;

use crate::catalog::Catalog;
use crate::tools::ToolResult;

pub fn get_available_dates(catalog: &Catalog, destination_city: &str) -> ToolResult {
    let city = destination_city.to_lowercase();
    let Some(dest) = catalog.destination(&city) else {
        return ToolResult::failed(json!({
            "status": "failed",
            "message": "No flights found",
        }));
    };

    ToolResult::success(json!({
        "status": "success",
        "city": city,
        "price": dest.price,
        "available_slots": dest.slots,
    }))
}
