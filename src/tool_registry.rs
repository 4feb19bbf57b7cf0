use serde_json::Value;

#[derive(Clone)]
pub struct ToolRegistry {
    schemas: Value,
}

impl ToolRegistry {
    pub fn new() -> Self {
        // Single source of truth for the "tools" schema the LLM sees.
        // Field names destination_city / chosen_date_time are wire contract.
        let schemas = serde_json::json!([
            {
                "type": "function",
                "function": {
                    "name": "get_ticket_price",
                    "description":
                        "Get the price of a return ticket to the destination city.",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "destination_city": {
                                "type": "string",
                                "description":
                                    "The city that the customer wants to travel to"
                            }
                        },
                        "required": ["destination_city"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "get_available_dates",
                    "description":
                        "Get the available dates for the destination city.",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "destination_city": {
                                "type": "string",
                                "description":
                                    "The city for which the customer wants to know the available dates"
                            }
                        },
                        "required": ["destination_city"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "book_ticket",
                    "description": "Book a ticket for a given city and date.",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "destination_city": {
                                "type": "string",
                                "description": "The city to book a ticket for"
                            },
                            "chosen_date_time": {
                                "type": "string",
                                "description":
                                    "The exact date/time to book (YYYY-MM-DD HH:MM)"
                            }
                        },
                        "required": ["destination_city", "chosen_date_time"]
                    }
                }
            }
        ]);
        Self { schemas }
    }

    pub fn schemas(&self) -> &Value {
        &self.schemas
    }
}
