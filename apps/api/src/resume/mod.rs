// Resume pipeline: PDF text → Gemini → structured JSON.
// All LLM calls go through llm_client.

pub mod interpreter;
pub mod parser;
pub mod prompts;
