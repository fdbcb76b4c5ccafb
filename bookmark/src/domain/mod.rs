pub mod bookmark;
pub mod error;
pub mod parser;
