pub mod career;
pub mod directory;
pub mod mentorship;
pub mod quiz;
