pub mod exorcise;
pub mod parser;

pub use parser::Cli;
