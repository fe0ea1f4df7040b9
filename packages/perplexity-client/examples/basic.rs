//! Basic Perplexity client usage example

use perplexity_client::{ChatRequest, Message, PerplexityClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = PerplexityClient::from_env()?;

    let system = "You are a NEAR ecosystem evaluator.";
    let question = "Name one funded NEAR governance proposal.";

    let response = client
        .chat_completion(
            ChatRequest::new("sonar-pro")
                .message(Message::system(system))
                .message(Message::user(question))
                .temperature(0.7)
                .max_tokens(200),
        )
        .await?;

    println!("Response: {}", response.content);

    // Follow up with the first reply as conversation context
    let follow_up = client
        .chat_completion(
            ChatRequest::new("sonar-pro")
                .message(Message::system(system))
                .message(Message::user(question))
                .message(Message::assistant(&response.content))
                .message(Message::user("How large was its budget?"))
                .max_tokens(200),
        )
        .await?;

    println!("Follow-up: {}", follow_up.content);

    if let Some(usage) = follow_up.usage {
        println!("Tokens used: {}", usage.total_tokens);
    }

    Ok(())
}
