pub mod helpers;
pub mod ollama;
pub mod openai;
pub mod request_wrapper;
pub mod response_wrapper;
