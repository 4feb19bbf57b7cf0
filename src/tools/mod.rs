pub use self::available_dates::get_available_dates;
pub use self::book_ticket::book_ticket;
pub use self::ticket_price::get_ticket_price;

mod available_dates;
mod book_ticket;
mod ticket_price;

use std::sync::Arc;

use serde_json::{Value, json};

use crate::booking_log::BookingLog;
use crate::catalog::Catalog;
use crate::types::ToolCall;

/// Closed set of tools the model may call. Resolution happens once, at
/// the name edge; everything past it is an exhaustive match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolKind {
    GetTicketPrice,
    GetAvailableDates,
    BookTicket,
}

impl ToolKind {
    pub fn from_name(name: &str) -> Option<ToolKind> {
        match name {
            "get_ticket_price" => Some(ToolKind::GetTicketPrice),
            "get_available_dates" => Some(ToolKind::GetAvailableDates),
            "book_ticket" => Some(ToolKind::BookTicket),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::GetTicketPrice => "get_ticket_price",
            ToolKind::GetAvailableDates => "get_available_dates",
            ToolKind::BookTicket => "book_ticket",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolStatus {
    Success,
    Failed,
}

/// Outcome of one tool execution. The payload is what the model sees,
/// serialized into the tool message content.
#[derive(Clone, Debug)]
pub struct ToolResult {
    pub status: ToolStatus,
    pub payload: Value,
}

impl ToolResult {
    pub fn success(payload: Value) -> Self {
        Self {
            status: ToolStatus::Success,
            payload,
        }
    }

    pub fn failed(payload: Value) -> Self {
        Self {
            status: ToolStatus::Failed,
            payload,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }

    pub fn content(&self) -> String {
        self.payload.to_string()
    }
}

/// Everything a tool handler may touch: the shared read-only catalog and
/// the booking log. Injected once when the agent is built.
pub struct ToolContext {
    pub catalog: Arc<Catalog>,
    pub bookings: BookingLog,
}

/// Execute one ToolCall. Never returns an error: unknown names, bad
/// argument JSON and validation failures all come back as a failed
/// ToolResult so the model can recover conversationally.
pub fn dispatch_call(ctx: &ToolContext, tool_call: &ToolCall) -> ToolResult {
    let Some(kind) = ToolKind::from_name(&tool_call.function.name) else {
        return ToolResult::failed(json!({ "error": "Unknown tool" }));
    };

    let args: Value = match serde_json::from_str(&tool_call.function.arguments) {
        Ok(v) => v,
        Err(e) => {
            return ToolResult::failed(json!({
                "status": "failed",
                "message": format!("Failed to parse tool arguments: {}", e),
            }));
        }
    };

    let city = args["destination_city"].as_str().unwrap_or("");
    match kind {
        ToolKind::GetTicketPrice => get_ticket_price(&ctx.catalog, city),
        ToolKind::GetAvailableDates => get_available_dates(&ctx.catalog, city),
        ToolKind::BookTicket => {
            let date_time = args["chosen_date_time"].as_str().unwrap_or("");
            book_ticket(&ctx.catalog, &ctx.bookings, city, date_time)
        }
    }
}
