//! Language-model completion capability.
//!
//! The workflow engine talks to the model through the [`CompletionProvider`]
//! trait: a plain text completion for advice, and a strict JSON variant for
//! intent extraction. [`gemini::GeminiClient`] is the production
//! implementation; tests substitute scripted providers.

mod error;
mod gemini;

pub use error::AiError;
pub use gemini::{GeminiClient, GeminiConfig};

/// A language-model completion service.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Submit a system prompt and user payload, returning the completion text.
    async fn complete(&self, system_prompt: &str, user_payload: &str) -> Result<String, AiError>;

    /// Like [`complete`](Self::complete), but requires the completion to be
    /// valid JSON. Markdown code fences around the JSON are tolerated;
    /// anything else fails with [`AiError::Decode`].
    async fn complete_json(
        &self,
        system_prompt: &str,
        user_payload: &str,
    ) -> Result<serde_json::Value, AiError> {
        let text = self.complete(system_prompt, user_payload).await?;
        let cleaned = strip_code_fences(&text);

        serde_json::from_str(cleaned).map_err(|e| AiError::Decode {
            message: e.to_string(),
            body: Some(text.chars().take(500).collect()),
        })
    }
}

/// Strip a surrounding markdown code fence from a completion.
///
/// Models asked for "JSON only" still frequently wrap the payload in
/// ```` ```json ... ``` ````. Returns the inner text, or the trimmed input
/// when no fence is present.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag on the opening fence line, if any.
    let rest = match rest.split_once('\n') {
        Some((_lang, body)) => body,
        None => rest,
    };

    rest.strip_suffix("```").map_or(rest, str::trim).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider {
        response: String,
    }

    #[async_trait::async_trait]
    impl CompletionProvider for EchoProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, AiError> {
            Ok(self.response.clone())
        }
    }

    #[test]
    fn strips_plain_fence() {
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn strips_json_tagged_fence() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn passes_through_unfenced_text() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
        assert_eq!(strip_code_fences("plain advice text"), "plain advice text");
    }

    #[tokio::test]
    async fn complete_json_parses_fenced_output() {
        let provider = EchoProvider {
            response: "```json\n{\"from_location\": \"Delhi\"}\n```".to_string(),
        };
        let value = provider.complete_json("sys", "user").await.unwrap();
        assert_eq!(value["from_location"], "Delhi");
    }

    #[tokio::test]
    async fn complete_json_rejects_prose() {
        let provider = EchoProvider {
            response: "Sure! Here is the JSON you asked for.".to_string(),
        };
        let err = provider.complete_json("sys", "user").await.unwrap_err();
        assert!(matches!(err, AiError::Decode { .. }));
    }
}
