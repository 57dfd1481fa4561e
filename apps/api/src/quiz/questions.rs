//! The fixed 20-question career interest quiz.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub text: &'static str,
}

/// Answer shape of a question.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Mcq {
        options: &'static [QuizOption],
    },
    /// Rating scale 1..=scale.
    Likert {
        scale: u8,
        labels: &'static [&'static str],
    },
    YesNo,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizQuestion {
    pub id: u8,
    pub question: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

const fn opt(value: &'static str, text: &'static str) -> QuizOption {
    QuizOption { value, text }
}

const IMPORTANCE_LABELS: &[&str] = &[
    "Not important",
    "Slightly important",
    "Moderately important",
    "Very important",
    "Extremely important",
];

pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: 1,
        question: "What type of activities do you enjoy most?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("problem_solving", "Solving complex problems and puzzles"),
                opt("helping_others", "Helping and caring for others"),
                opt("creative_work", "Creating art, writing, or designing"),
                opt("leadership", "Leading teams and organizing projects"),
            ],
        },
    },
    QuizQuestion {
        id: 2,
        question: "Which subjects did you enjoy most in school?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("stem", "Mathematics, Physics, Chemistry"),
                opt("bio_medical", "Biology, Chemistry, Health Sciences"),
                opt("humanities", "History, Literature, Languages"),
                opt("commerce", "Economics, Accounts, Business Studies"),
            ],
        },
    },
    QuizQuestion {
        id: 3,
        question: "How do you prefer to work?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("individual", "Independently on focused tasks"),
                opt("team", "Collaboratively in teams"),
                opt("public", "Interacting with the public"),
                opt("research", "In research and analysis"),
            ],
        },
    },
    QuizQuestion {
        id: 4,
        question: "What motivates you most in your future career?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("innovation", "Creating innovative solutions"),
                opt("service", "Serving society and making a difference"),
                opt("financial", "Financial stability and growth"),
                opt("recognition", "Recognition and prestige"),
            ],
        },
    },
    QuizQuestion {
        id: 5,
        question: "Which work environment appeals to you?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("tech_office", "Modern tech office with latest tools"),
                opt("hospital", "Hospital or healthcare facility"),
                opt("government", "Government office serving citizens"),
                opt("school", "Educational institution"),
            ],
        },
    },
    QuizQuestion {
        id: 6,
        question: "How comfortable are you with technology?",
        kind: QuestionKind::Likert {
            scale: 5,
            labels: &[
                "Not comfortable",
                "Slightly comfortable",
                "Moderately comfortable",
                "Very comfortable",
                "Extremely comfortable",
            ],
        },
    },
    QuizQuestion {
        id: 7,
        question: "Do you enjoy learning new things regularly?",
        kind: QuestionKind::YesNo,
    },
    QuizQuestion {
        id: 8,
        question: "Are you interested in entrepreneurship or starting your own business?",
        kind: QuestionKind::YesNo,
    },
    QuizQuestion {
        id: 9,
        question: "How important is work-life balance to you?",
        kind: QuestionKind::Likert {
            scale: 5,
            labels: IMPORTANCE_LABELS,
        },
    },
    QuizQuestion {
        id: 10,
        question: "Which type of challenges excite you most?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("technical", "Technical and analytical challenges"),
                opt("human", "Understanding and helping people"),
                opt("creative", "Creative and artistic challenges"),
                opt("strategic", "Strategic and business challenges"),
            ],
        },
    },
    QuizQuestion {
        id: 11,
        question: "What size organization would you prefer to work in?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("startup", "Small startup (10-50 people)"),
                opt("medium", "Medium company (100-1000 people)"),
                opt("large", "Large corporation (1000+ people)"),
                opt("government", "Government organization"),
            ],
        },
    },
    QuizQuestion {
        id: 12,
        question: "How do you handle stress and pressure?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("analytical", "Break down problems systematically"),
                opt("collaborative", "Seek help and collaborate with others"),
                opt("calm", "Stay calm and focused under pressure"),
                opt("creative", "Find creative solutions to problems"),
            ],
        },
    },
    QuizQuestion {
        id: 13,
        question: "Are you willing to relocate for better career opportunities?",
        kind: QuestionKind::YesNo,
    },
    QuizQuestion {
        id: 14,
        question: "What type of impact do you want to make?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("technological", "Technological advancement"),
                opt("health", "Improving health and saving lives"),
                opt("social", "Social change and justice"),
                opt("economic", "Economic growth and development"),
            ],
        },
    },
    QuizQuestion {
        id: 15,
        question: "How important is job security to you?",
        kind: QuestionKind::Likert {
            scale: 5,
            labels: IMPORTANCE_LABELS,
        },
    },
    QuizQuestion {
        id: 16,
        question: "Do you prefer structured or flexible work schedules?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("structured", "Structured 9-5 schedule"),
                opt("flexible", "Flexible timing"),
                opt("project_based", "Project-based deadlines"),
                opt("shift_based", "Shift-based work"),
            ],
        },
    },
    QuizQuestion {
        id: 17,
        question: "What level of education are you willing to pursue?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("undergraduate", "Bachelor's degree"),
                opt("postgraduate", "Master's degree"),
                opt("doctoral", "PhD or equivalent"),
                opt("professional", "Professional certification courses"),
            ],
        },
    },
    QuizQuestion {
        id: 18,
        question: "Are you interested in research and development work?",
        kind: QuestionKind::YesNo,
    },
    QuizQuestion {
        id: 19,
        question: "How important is having a prestigious job title?",
        kind: QuestionKind::Likert {
            scale: 5,
            labels: IMPORTANCE_LABELS,
        },
    },
    QuizQuestion {
        id: 20,
        question: "What type of learning style suits you best?",
        kind: QuestionKind::Mcq {
            options: &[
                opt("theoretical", "Theoretical and conceptual learning"),
                opt("practical", "Hands-on practical experience"),
                opt("visual", "Visual and graphical learning"),
                opt("discussion", "Discussion and debate-based learning"),
            ],
        },
    },
];

pub fn find_question(id: u8) -> Option<&'static QuizQuestion> {
    QUIZ_QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_one_through_twenty_in_order() {
        let ids: Vec<u8> = QUIZ_QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<u8>>());
    }

    #[test]
    fn test_likert_questions_have_a_label_per_step() {
        for q in QUIZ_QUESTIONS {
            if let QuestionKind::Likert { scale, labels } = q.kind {
                assert_eq!(labels.len(), scale as usize, "question {}", q.id);
            }
        }
    }

    #[test]
    fn test_mcq_question_serializes_with_type_tag() {
        let json = serde_json::to_value(find_question(2).unwrap()).unwrap();
        assert_eq!(json["type"], "mcq");
        assert_eq!(json["options"][0]["value"], "stem");
        assert_eq!(json["id"], 2);
    }

    #[test]
    fn test_yes_no_question_serializes_without_options() {
        let json = serde_json::to_value(find_question(7).unwrap()).unwrap();
        assert_eq!(json["type"], "yes_no");
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_unknown_question_is_none() {
        assert!(find_question(0).is_none());
        assert!(find_question(21).is_none());
    }
}
