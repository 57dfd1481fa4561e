// Prompt constants for the chat assistant.
// Reuses the persona and answer-format fragments from llm_client::prompts.

use crate::chat::classifier::GuidanceTopic;
use crate::llm_client::prompts::{ASSISTANT_PERSONA, STRUCTURED_ANSWER_FORMAT};

/// Chat prompt template. Replace `{persona}`, `{context}`, `{format}` and
/// `{message}` before sending.
pub const CHAT_PROMPT_TEMPLATE: &str = r#"{persona}

CONTEXT: {context}

FORMAT RULES: {format}

Only answer questions about education, exams, colleges, scholarships and careers.
Prefer government institutions and schemes available to students of Jammu & Kashmir
when they are relevant. If exact dates or figures may have changed, say so and point
the student to the official website.

STUDENT QUESTION:
{message}"#;

pub fn topic_context(topic: GuidanceTopic) -> &'static str {
    match topic {
        GuidanceTopic::Exam => {
            "The student is asking about an entrance or competitive exam. Cover eligibility, \
             pattern, important dates, preparation strategy and the conducting body."
        }
        GuidanceTopic::College => {
            "The student is asking about colleges or admissions. Cover suitable institutions, \
             admission process, cutoffs, fees and courses offered."
        }
        GuidanceTopic::Scholarship => {
            "The student is asking about scholarships or financial aid. Cover relevant schemes, \
             eligibility by category and income, amounts, and how to apply."
        }
        GuidanceTopic::Career => {
            "The student is asking about careers or jobs. Cover suitable career paths, required \
             qualifications, skills, salary range and future scope."
        }
        GuidanceTopic::GeneralEducation => {
            "The student has a general education question. Give practical guidance on streams, \
             subjects, courses or study planning."
        }
    }
}

/// Builds the full prompt. The student's message is embedded verbatim.
pub fn build_chat_prompt(topic: GuidanceTopic, message: &str) -> String {
    CHAT_PROMPT_TEMPLATE
        .replace("{persona}", ASSISTANT_PERSONA)
        .replace("{context}", topic_context(topic))
        .replace("{format}", STRUCTURED_ANSWER_FORMAT)
        .replace("{message}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_message_verbatim() {
        let prompt = build_chat_prompt(GuidanceTopic::Exam, "what is the NEET exam date");
        assert!(prompt.contains("what is the NEET exam date"));
        assert!(prompt.contains(topic_context(GuidanceTopic::Exam)));
    }

    #[test]
    fn test_prompt_requests_summary_and_bullets() {
        let prompt = build_chat_prompt(GuidanceTopic::Career, "career after 12th");
        assert!(prompt.contains("150-250 words"));
        assert!(prompt.contains("4-5 bullet points"));
        assert!(!prompt.contains("{message}"));
        assert!(!prompt.contains("{context}"));
    }

    #[test]
    fn test_each_topic_has_distinct_context() {
        let topics = [
            GuidanceTopic::Exam,
            GuidanceTopic::College,
            GuidanceTopic::Scholarship,
            GuidanceTopic::Career,
            GuidanceTopic::GeneralEducation,
        ];
        let contexts: std::collections::HashSet<_> =
            topics.iter().map(|t| topic_context(*t)).collect();
        assert_eq!(contexts.len(), topics.len());
    }
}
