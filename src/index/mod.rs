pub mod reader;

pub use reader::{LexiconReader, TermReader, TermsAndMaxCount};
