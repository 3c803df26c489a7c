pub mod labels;
pub mod note;
pub mod session;
pub mod token_count;
