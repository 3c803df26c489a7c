pub mod catalog;
pub mod health;
pub mod notes;
pub mod prompt;
