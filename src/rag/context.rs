//! Prompt composer
//!
//! Merges retrieved passages and the question into one model
//! instruction. The template is a design contract with four required
//! clauses: a labelled context block, a labelled question, a
//! conciseness directive, and an explicit not-found admission
//! directive. An empty passage set is substituted with a sentinel so
//! the model never reads empty context as "no constraints".

use crate::rag::retrieval::Passage;

/// Substituted for the context block when retrieval found nothing
pub const NO_DATA_SENTINEL: &str = "No FAQ data available.";

/// Composes prompts from retrieved passages and the user question
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptComposer;

impl PromptComposer {
    pub fn new() -> Self {
        Self
    }

    /// Join passages with exactly one blank line, in input order;
    /// empty input maps to the sentinel, never to an empty string
    pub fn build_context(&self, passages: &[Passage]) -> String {
        if passages.is_empty() {
            return NO_DATA_SENTINEL.to_string();
        }

        passages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Full single-prompt instruction for the completion backend
    pub fn compose(&self, question: &str, passages: &[Passage]) -> String {
        let context = self.build_context(passages);

        format!(
            "You are an assistant answering user questions based on the following FAQ knowledge.\n\
             \n\
             FAQ Knowledge:\n\
             {}\n\
             \n\
             User question:\n\
             {}\n\
             \n\
             Provide a helpful, concise answer. If the answer is not present in the FAQs, say so.",
            context, question
        )
    }

    /// System-role instruction for the chat backend: context and
    /// directives only, the bare question travels as the human message
    pub fn system_prompt(&self, passages: &[Passage]) -> String {
        let context = self.build_context(passages);

        format!(
            "You are an assistant answering user questions based on the following FAQ knowledge.\n\
             \n\
             FAQ Knowledge:\n\
             {}\n\
             \n\
             Provide a helpful, concise answer. If the answer is not present in the FAQs, say so.",
            context
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_passages_yield_sentinel_context() {
        let composer = PromptComposer::new();
        assert_eq!(composer.build_context(&[]), NO_DATA_SENTINEL);
    }

    #[test]
    fn test_context_joins_with_one_blank_line_in_order() {
        let composer = PromptComposer::new();
        let passages = vec![Passage::new("first"), Passage::new("second"), Passage::new("third")];
        assert_eq!(composer.build_context(&passages), "first\n\nsecond\n\nthird");
    }

    #[test]
    fn test_non_empty_passages_skip_sentinel() {
        let composer = PromptComposer::new();
        let context = composer.build_context(&[Passage::new("Q: a\nA: b")]);
        assert!(!context.contains(NO_DATA_SENTINEL));
    }

    #[test]
    fn test_prompt_contains_sentinel_and_question_unmodified() {
        let composer = PromptComposer::new();
        let question = "How do I reset my password? (urgent!)";
        let prompt = composer.compose(question, &[]);

        assert!(prompt.contains(NO_DATA_SENTINEL));
        assert!(prompt.contains(question));
    }

    #[test]
    fn test_prompt_carries_the_four_required_clauses() {
        let composer = PromptComposer::new();
        let prompt = composer.compose("q", &[Passage::new("p")]);

        assert!(prompt.contains("FAQ Knowledge:"));
        assert!(prompt.contains("User question:"));
        assert!(prompt.contains("concise"));
        assert!(prompt.contains("If the answer is not present in the FAQs, say so."));
    }

    #[test]
    fn test_system_prompt_has_context_but_not_the_question() {
        let composer = PromptComposer::new();
        let system = composer.system_prompt(&[Passage::new("the context")]);

        assert!(system.contains("FAQ Knowledge:"));
        assert!(system.contains("the context"));
        assert!(system.contains("concise"));
        assert!(!system.contains("User question:"));
    }
}
