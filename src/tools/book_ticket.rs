use serde_json::json;

use crate::booking_log::{BookingLog, BookingRecord};
use crate::catalog::Catalog;
use crate::tools::ToolResult;

/// Booking. The chosen slot must match one of the city's offered slots
/// verbatim (string equality, no date parsing). Failed bookings never
/// touch the log.
pub fn book_ticket(
    catalog: &Catalog,
    bookings: &BookingLog,
    destination_city: &str,
    chosen_date_time: &str,
) -> ToolResult {
    let city = destination_city.to_lowercase();
    let Some(dest) = catalog.destination(&city) else {
        return ToolResult::failed(json!({
            "status": "failed",
            "message": format!("No flights found for {}", city),
        }));
    };

    if !dest.slots.iter().any(|s| s == chosen_date_time) {
        return ToolResult::failed(json!({
            "status": "failed",
            "message": format!(
                "Invalid slot. Available options are: {}",
                json!(dest.slots)
            ),
        }));
    }

    let record = BookingRecord::new(&city, chosen_date_time, &dest.price);
    if let Err(e) = bookings.append(&record) {
        return ToolResult::failed(json!({
            "status": "failed",
            "message": format!("Could not record the booking: {}", e),
        }));
    }

    ToolResult::success(json!({
        "status": "success",
        "message": "Ticket booked successfully",
        "city": city,
        "date": chosen_date_time,
    }))
}
