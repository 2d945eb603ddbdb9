pub mod processor;
pub mod scanner;
