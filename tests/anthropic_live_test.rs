// Live Anthropic API tests
//
// These exercise the real Messages API and are skipped unless the
// ANTHROPIC_API_KEY environment variable is set.
// Run with: cargo test --test anthropic_live_test -- --nocapture

use anyhow::Result;
use serde_json::json;

use weathervane::llm::{define_tool, AnthropicProvider, ContentBlock, Message, ToolChoice};

fn live_provider() -> Option<AnthropicProvider> {
    let api_key = std::env::var("ANTHROPIC_API_KEY").ok()?;
    AnthropicProvider::new(api_key)
        .ok()
        .map(|provider| provider.with_max_tokens(512))
}

#[tokio::test]
async fn simple_message_round_trip() -> Result<()> {
    let Some(provider) = live_provider() else {
        eprintln!("skipping: ANTHROPIC_API_KEY not set");
        return Ok(());
    };

    let reply = provider
        .send_message("Say exactly: 'test passed'", &[], None)
        .await?;

    assert!(reply.to_lowercase().contains("test passed"));
    Ok(())
}

#[tokio::test]
async fn conversation_history_is_remembered() -> Result<()> {
    let Some(provider) = live_provider() else {
        eprintln!("skipping: ANTHROPIC_API_KEY not set");
        return Ok(());
    };

    let history = vec![
        Message::user("My name is Alice."),
        Message::assistant("Nice to meet you, Alice!"),
    ];

    let reply = provider.send_message("What's my name?", &history, None).await?;

    assert!(reply.to_lowercase().contains("alice"));
    Ok(())
}

#[tokio::test]
async fn tool_call_is_requested() -> Result<()> {
    let Some(provider) = live_provider() else {
        eprintln!("skipping: ANTHROPIC_API_KEY not set");
        return Ok(());
    };

    let tools = vec![define_tool(
        "get_weather_for_location",
        "Get current weather for a location",
        json!({
            "city": {
                "type": "string",
                "description": "City name"
            }
        }),
        vec!["city".to_string()],
    )];

    let response = provider
        .send_with_tools(
            vec![Message::user("What's the weather in Paris?")],
            None,
            tools,
            Some(ToolChoice::auto()),
        )
        .await?;

    let has_tool_use = response
        .content
        .iter()
        .any(|block| matches!(block, ContentBlock::ToolUse { .. }));

    assert!(has_tool_use, "Expected tool use in response");
    Ok(())
}
