// Chat assistant: keyword gate, canned greetings, Gemini-backed answers
// reshaped into summary + points.

pub mod classifier;
pub mod greetings;
pub mod handlers;
pub mod prompts;
pub mod service;
pub mod shaping;
pub mod store;
