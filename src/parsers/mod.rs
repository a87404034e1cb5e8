pub mod comment;
pub mod tsx;
