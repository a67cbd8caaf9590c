pub mod brian;
pub mod openai;

pub use brian::BrianClient;
pub use openai::OpenAiClient;
