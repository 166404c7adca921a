pub mod input;
pub mod plot;
pub mod prompt;
pub mod report;
