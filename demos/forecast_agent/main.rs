//! Forecast agent demo - tools, context, structured output, and memory
//!
//! The full wiring: the punny forecaster prompt, both tools, per-invocation
//! user context, a structured reply format, and an in-memory checkpointer so
//! the second question continues the same conversation thread.
//!
//! Prerequisites:
//! - Set ANTHROPIC_API_KEY environment variable
//!
//! Run with: cargo run --example forecast_agent

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use weathervane::{
    agent::{Agent, AgentConfig, InvokeOptions},
    checkpoint::InMemorySaver,
    cli::Console,
    forecast::{self, ForecastReply},
    llm::AnthropicProvider,
    logging,
    tools::UserContext,
};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let console = Console::new();
    console.print_banner();

    // Configure the model the way the forecaster wants it
    let provider = Arc::new(
        AnthropicProvider::from_env()?
            .with_temperature(0.5)
            .with_timeout(Duration::from_secs(10))
            .with_max_tokens(1000),
    );

    // Conversation memory, keyed by thread id
    let checkpointer = Arc::new(InMemorySaver::new());

    let config = AgentConfig::new(forecast::FORECASTER_PROMPT)
        .with_tools(Arc::new(forecast::forecast_tools()))
        .with_response_format(forecast::forecast_reply_format())
        .with_checkpointer(checkpointer);
    let agent = Agent::new(config, provider);

    // `thread_id` correlates sequential invocations into one conversation
    let thread_id = "1";

    let question = "What is the weather outside?";
    console.print_user(question);
    let response = agent
        .invoke(
            question,
            InvokeOptions::new()
                .with_thread_id(thread_id)
                .with_resource(UserContext::new("1")),
        )
        .await?;
    print_reply(&console, response.structured_as::<ForecastReply>()?);

    console.print_separator();

    // Same thread id, so the agent remembers the exchange above
    let followup = "thank you!";
    console.print_user(followup);
    let response = agent
        .invoke(
            followup,
            InvokeOptions::new()
                .with_thread_id(thread_id)
                .with_resource(UserContext::new("1")),
        )
        .await?;
    print_reply(&console, response.structured_as::<ForecastReply>()?);

    Ok(())
}

fn print_reply(console: &Console, reply: Option<ForecastReply>) {
    match reply {
        Some(reply) => {
            console.print_assistant(&reply.punny_response);
            if let Some(conditions) = reply.weather_conditions {
                console.print_system(&format!("Conditions: {}", conditions));
            }
        }
        None => console.print_system("No structured response was captured"),
    }
}
