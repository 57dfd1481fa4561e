//! Keyword gate in front of the model.
//!
//! Order of checks per message:
//! 1. greeting phrase → canned greeting
//! 2. no education/career keyword → unsupported
//! 3. first topic whose keywords match: exam > college > scholarship > career,
//!    falling back to general education
//!
//! Greetings are substring matches on the lowercased message, except the
//! short ones ("hi", "hey", ...) which must be a whole word, optionally
//! stretched ("hiii", "heyyy"), so "hi" does not fire inside "which".
//! Topic keywords match lowercased word tokens so "exam" still matches "exams".

use serde::Serialize;

/// What the response is about, as reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Greeting,
    Unsupported,
    ExamGuidance,
    CollegeGuidance,
    ScholarshipGuidance,
    CareerGuidance,
    GeneralEducation,
}

/// Career-related topic used to pick the prompt context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidanceTopic {
    Exam,
    College,
    Scholarship,
    Career,
    GeneralEducation,
}

impl GuidanceTopic {
    pub fn query_type(self) -> QueryType {
        match self {
            GuidanceTopic::Exam => QueryType::ExamGuidance,
            GuidanceTopic::College => QueryType::CollegeGuidance,
            GuidanceTopic::Scholarship => QueryType::ScholarshipGuidance,
            GuidanceTopic::Career => QueryType::CareerGuidance,
            GuidanceTopic::GeneralEducation => QueryType::GeneralEducation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Greeting,
    OutOfScope,
    CareerRelated(GuidanceTopic),
}

const GREETING_PHRASES: &[&str] = &[
    "hello",
    "hi",
    "hii",
    "hey",
    "hlo",
    "namaste",
    "salaam",
    "assalamualaikum",
    "good morning",
    "good afternoon",
    "good evening",
    "who are you",
    "what are you",
    "what can you do",
    "what can you help me with",
    "how can you help",
    "introduce yourself",
];

const EXAM_KEYWORDS: &[&str] = &[
    "exam",
    "entrance",
    "neet",
    "jee",
    "cuet",
    "gate",
    "upsc",
    "ssc",
    "jkssb",
    "jkpsc",
    "jkbose",
    "jkbopee",
    "cet",
    "clat",
    "nda",
    "cat",
    "ctet",
    "syllabus",
    "admit card",
    "mock test",
    "test series",
    "question paper",
];

const COLLEGE_KEYWORDS: &[&str] = &[
    "college",
    "university",
    "admission",
    "campus",
    "institute",
    "iit",
    "nit",
    "aiims",
    "iim",
    "gmc",
    "skims",
    "cutoff",
    "cut off",
    "hostel",
    "seat",
    "counselling",
    "counseling",
];

const SCHOLARSHIP_KEYWORDS: &[&str] = &[
    "scholarship",
    "financial aid",
    "fee waiver",
    "stipend",
    "fellowship",
    "pmsss",
    "post matric",
    "pre matric",
    "education loan",
];

const CAREER_KEYWORDS: &[&str] = &[
    "career",
    "job",
    "profession",
    "occupation",
    "salary",
    "employment",
    "placement",
    "internship",
    "government job",
];

/// Education, region and guidance words that make a message in scope without
/// pointing at a specific topic.
const GENERAL_KEYWORDS: &[&str] = &[
    "education",
    "study",
    "studies",
    "studying",
    "course",
    "degree",
    "diploma",
    "school",
    "class",
    "10th",
    "12th",
    "board",
    "stream",
    "subject",
    "science",
    "commerce",
    "arts",
    "humanities",
    "maths",
    "math",
    "mathematics",
    "physics",
    "chemistry",
    "biology",
    "engineering",
    "medical",
    "medicine",
    "mbbs",
    "btech",
    "b.tech",
    "bsc",
    "bcom",
    "bca",
    "mba",
    "nursing",
    "pharmacy",
    "law",
    "teacher",
    "teaching",
    "doctor",
    "engineer",
    "skill",
    "graduation",
    "postgraduate",
    "phd",
    "jammu",
    "kashmir",
    "j&k",
    "srinagar",
    "ladakh",
    "anantnag",
    "baramulla",
    "guidance",
    "prepare",
    "preparation",
];

/// Lowercased word tokens. `&` and `.` stay inside tokens ("j&k", "b.tech").
fn tokenize(message: &str) -> Vec<String> {
    message
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '&' || c == '.'))
        .map(|t| t.trim_matches('.'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// A single-word keyword matches a token exactly, its plural, or (for longer
/// keywords) a token it prefixes. Multi-word keywords match as a phrase.
fn token_matches(token: &str, keyword: &str) -> bool {
    token == keyword
        || token.strip_suffix('s') == Some(keyword)
        || (keyword.chars().count() >= 5 && token.starts_with(keyword))
}

fn contains_keyword(tokens: &[String], keyword: &str) -> bool {
    let words: Vec<String> = tokenize(keyword);
    match words.as_slice() {
        [] => false,
        [single] => tokens.iter().any(|t| token_matches(t, single)),
        phrase => tokens
            .windows(phrase.len())
            .any(|w| w.iter().zip(phrase).all(|(t, p)| token_matches(t, p))),
    }
}

fn contains_any(tokens: &[String], keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| contains_keyword(tokens, kw))
}

/// Greetings shorter than this are matched per word instead of as substrings.
const SHORT_GREETING_CHARS: usize = 5;

/// `token` is `word` with its last letter optionally repeated.
fn is_stretched(token: &str, word: &str) -> bool {
    match (token.strip_prefix(word), word.chars().last()) {
        (Some(rest), Some(last)) => rest.chars().all(|c| c == last),
        _ => false,
    }
}

pub fn is_greeting(message: &str) -> bool {
    let text = message.trim().to_lowercase();
    let tokens = tokenize(&text);
    GREETING_PHRASES.iter().any(|phrase| {
        if phrase.chars().count() < SHORT_GREETING_CHARS {
            tokens.iter().any(|t| is_stretched(t, phrase))
        } else {
            text.contains(phrase)
        }
    })
}

pub fn is_career_related(message: &str) -> bool {
    let tokens = tokenize(message);
    [
        EXAM_KEYWORDS,
        COLLEGE_KEYWORDS,
        SCHOLARSHIP_KEYWORDS,
        CAREER_KEYWORDS,
        GENERAL_KEYWORDS,
    ]
    .iter()
    .any(|set| contains_any(&tokens, set))
}

/// First match wins in priority order.
pub fn guidance_topic(message: &str) -> GuidanceTopic {
    let tokens = tokenize(message);
    if contains_any(&tokens, EXAM_KEYWORDS) {
        GuidanceTopic::Exam
    } else if contains_any(&tokens, COLLEGE_KEYWORDS) {
        GuidanceTopic::College
    } else if contains_any(&tokens, SCHOLARSHIP_KEYWORDS) {
        GuidanceTopic::Scholarship
    } else if contains_any(&tokens, CAREER_KEYWORDS) {
        GuidanceTopic::Career
    } else {
        GuidanceTopic::GeneralEducation
    }
}

pub fn classify(message: &str) -> Classification {
    if is_greeting(message) {
        Classification::Greeting
    } else if !is_career_related(message) {
        Classification::OutOfScope
    } else {
        Classification::CareerRelated(guidance_topic(message))
    }
}
