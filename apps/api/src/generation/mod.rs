// Ideal-prompt generation for scenario authoring.
// All LLM calls go through llm_client; no direct HTTP calls here.

pub mod handlers;
pub mod ideal_prompt;
pub mod prompts;
