pub mod ast;
pub mod builder;
pub mod errors;
pub mod requests;
