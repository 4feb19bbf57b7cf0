use std::env;
use std::fs;
use std::io::{self, Write};
use std::sync::Arc;

use chrono::Utc;
use tokio::time::Duration;

mod agent;
mod artist;
mod booking_log;
mod catalog;
mod llm_client;
mod session;
mod tool_registry;
mod tools;
mod types;
mod utils;

#[cfg(test)]
mod mocks;

use agent::{Agent, AgentOptions};
use artist::OpenAiArtist;
use booking_log::BookingLog;
use catalog::Catalog;
use llm_client::LlmClient;
use session::Session;
use tool_registry::ToolRegistry;
use tools::ToolContext;
use types::Message;

const SYSTEM_PROMPT: &str = "You are a helpful assistant for an Airline called FlightAI. \
     Give short, courteous answers, no more than 1 sentence. \
     Always be accurate. If you don't know the answer, say so.";

const BOOKING_LOG_PATH: &str = "tickets.txt";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url =
        env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
    let api_key = env::var("OPENAI_API_KEY")
        .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY not set"))?;
    let model = env::var("GPT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

    let catalog = Arc::new(Catalog::with_default_routes());
    let llm = LlmClient::new(base_url.clone(), api_key.clone(), model.clone())?;
    let artist = OpenAiArtist::new(base_url, api_key)?;

    let agent = Agent::new(
        Box::new(llm),
        ToolRegistry::new(),
        ToolContext {
            catalog,
            bookings: BookingLog::new(BOOKING_LOG_PATH),
        },
        Some(Box::new(artist)),
        AgentOptions {
            system_prompt: SYSTEM_PROMPT.to_string(),
            max_tool_rounds: 5,
            step_timeout: Duration::from_secs(60),
            observation_clip: 4000,
        },
    );

    let mut session = Session::new(Some("FlightAI"), Some(&model));

    println!("\u{001b}[94mWelcome to FlightAI! Ask about flights, prices and bookings.\u{001b}[0m");

    loop {
        print!("\u{001b}[93mYou:\u{001b}[0m ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            break;
        }

        match agent.chat(&session.messages, input).await {
            Ok(turn) => {
                // The agent works on a throwaway copy of the conversation;
                // the session keeps only the user/assistant exchange.
                session.add_message(Message {
                    role: "user".to_string(),
                    content: Some(input.to_string()),
                    tool_calls: None,
                    tool_call_id: None,
                });
                session.add_message(Message {
                    role: "assistant".to_string(),
                    content: Some(turn.reply.clone()),
                    tool_calls: None,
                    tool_call_id: None,
                });

                println!("\u{001b}[96mFlightAI:\u{001b}[0m {}", turn.reply);

                if let (Some(city), Some(png)) = (&turn.booked_city, &turn.image) {
                    let filename = format!(
                        "vacation_{}_{}.png",
                        city.replace(' ', "_"),
                        Utc::now().format("%Y%m%d%H%M%S")
                    );
                    fs::write(&filename, png)?;
                    println!("\u{001b}[90mSaved destination image to {}\u{001b}[0m", filename);
                }
            }
            Err(e) => {
                eprintln!("\u{001b}[91mError:\u{001b}[0m {}", e);
            }
        }
    }

    Ok(())
}
