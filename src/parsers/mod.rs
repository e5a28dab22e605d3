pub mod html;
pub mod patterns;

#[cfg(test)]
mod tests;

pub use html::{ResultExtractor, stripped_strings};
pub use patterns::{IdentifierKind, PatternFinder, Strategy, first_match};
