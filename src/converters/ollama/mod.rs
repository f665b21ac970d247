pub mod ollama_message;
pub mod ollama_request;
pub mod ollama_response;
pub mod ollama_response_message;

pub use ollama_message::OllamaMessage;
pub use ollama_request::OllamaChatRequest;
pub use ollama_response::OllamaChatResponse;
pub use ollama_response_message::OllamaResponseMessage;
