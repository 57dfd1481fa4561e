// Career interest quiz: fixed question bank, scoring, and result history.

pub mod handlers;
pub mod questions;
pub mod scoring;
pub mod store;
