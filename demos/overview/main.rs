//! Overview demo - the smallest possible wiring
//!
//! One model, one tool, one question, plain text answer.
//!
//! Prerequisites:
//! - Set ANTHROPIC_API_KEY environment variable
//!
//! Run with: cargo run --example overview

use std::sync::Arc;

use anyhow::Result;

use weathervane::{
    agent::{Agent, AgentConfig, InvokeOptions},
    cli::Console,
    llm::AnthropicProvider,
    tools::{ToolRegistry, WeatherTool},
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("overview=info,weathervane=warn")
        .init();

    let console = Console::new();
    console.print_banner();

    // Model client from the environment
    let provider = Arc::new(AnthropicProvider::from_env()?);

    // One tool
    let mut tools = ToolRegistry::new();
    tools.register(WeatherTool::new());

    let config = AgentConfig::new("You are a helpful assistant").with_tools(Arc::new(tools));
    let agent = Agent::new(config, provider);

    // Run the agent
    let question = "What is the weather in Tokyo";
    console.print_user(question);

    let response = agent.invoke(question, InvokeOptions::new()).await?;

    match response.final_text() {
        Some(text) => console.print_assistant(&text),
        None => console.print_system("The model returned no text"),
    }

    Ok(())
}
