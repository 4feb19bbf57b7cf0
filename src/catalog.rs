use std::collections::HashMap;

/// One bookable route: a return-ticket price and the departure slots
/// currently on offer.
#[derive(Clone, Debug)]
pub struct Destination {
    pub price: String,
    pub slots: Vec<String>, // "YYYY-MM-DD HH:MM"
}

/// Read-only reference data the tools run against. Built once at startup
/// and shared by reference; booking never mutates it.
pub struct Catalog {
    destinations: HashMap<String, Destination>,
}

impl Catalog {
    pub fn with_default_routes() -> Self {
        let mut destinations = HashMap::new();
        let mut add = |city: &str, price: &str, slots: &[&str]| {
            destinations.insert(
                city.to_string(),
                Destination {
                    price: price.to_string(),
                    slots: slots.iter().map(|s| s.to_string()).collect(),
                },
            );
        };

        add(
            "london",
            "₹58,000",
            &["2025-10-05 01:35", "2025-10-06 14:25", "2025-10-07 07:00"],
        );
        add(
            "paris",
            "₹62,000",
            &["2025-10-10 02:00", "2025-10-12 15:30", "2025-10-15 20:00"],
        );
        add(
            "tokyo",
            "₹75,000",
            &["2025-10-08 05:00", "2025-10-11 11:15", "2025-10-14 22:45"],
        );
        add(
            "new york",
            "₹70,000",
            &["2025-10-03 03:50", "2025-10-07 17:20", "2025-10-09 23:10"],
        );
        add(
            "dubai",
            "₹22,000",
            &["2025-10-05 06:30", "2025-10-06 13:00", "2025-10-08 19:45"],
        );
        add(
            "singapore",
            "₹28,000",
            &["2025-10-04 08:15", "2025-10-06 14:50", "2025-10-09 21:00"],
        );

        Self { destinations }
    }

    // Lookups are keyed by lower-cased city name; callers pass free text.
    pub fn price(&self, city: &str) -> Option<&str> {
        self.destinations
            .get(&city.to_lowercase())
            .map(|d| d.price.as_str())
    }

    pub fn destination(&self, city: &str) -> Option<&Destination> {
        self.destinations.get(&city.to_lowercase())
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.destinations.keys().map(|k| k.as_str())
    }
}
