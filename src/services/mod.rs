pub mod executor;
pub mod openrouter_client;

pub use executor::execute_document;
pub use openrouter_client::{ChatCompletionRequest, CompletionClient, OpenRouterClient};
