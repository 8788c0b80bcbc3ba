pub mod error;
pub mod intent;
pub mod parser;

pub use error::ParseError;
pub use intent::{SearchIntent, SearchKind};
pub use parser::{parse, HEADING_FIELD};
