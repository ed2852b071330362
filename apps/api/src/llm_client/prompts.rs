// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Closing instruction that asks for a bare JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Provide the output in valid JSON format only, without any additional text.";
