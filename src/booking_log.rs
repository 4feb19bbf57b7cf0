use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::utils::title_case;

/// One confirmed booking. Each record carries its own id so the log can
/// hold any number of bookings from any number of conversations.
#[derive(Clone, Debug)]
pub struct BookingRecord {
    pub id: String,
    pub city: String, // normalized (lower case)
    pub date_time: String,
    pub price: String,
    pub booked_at: DateTime<Utc>,
}

impl BookingRecord {
    pub fn new(city: &str, date_time: &str, price: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            city: city.to_string(),
            date_time: date_time.to_string(),
            price: price.to_string(),
            booked_at: Utc::now(),
        }
    }
}

/// Append-only confirmation log. Records are human-readable blocks;
/// nothing here is ever overwritten or rewritten.
pub struct BookingLog {
    path: PathBuf,
}

impl BookingLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn append(&self, record: &BookingRecord) -> anyhow::Result<()> {
        let block = format!(
            "--- FlightAI Ticket Confirmation ---\n\
             Booking ID: {}\n\
             Booked At: {}\n\
             Destination: {}\n\
             Date & Time: {}\n\
             Price: {}\n\
             Status: Confirmed\n\n",
            record.id,
            record.booked_at.format("%Y-%m-%d %H:%M:%S UTC"),
            title_case(&record.city),
            record.date_time,
            record.price,
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open booking log {}", self.path.display()))?;
        file.write_all(block.as_bytes())
            .with_context(|| format!("Failed to write booking log {}", self.path.display()))?;
        Ok(())
    }
}
