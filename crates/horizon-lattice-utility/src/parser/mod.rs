//! Base token parsing.

pub mod families;
pub(crate) mod lexer;
mod registry;

pub use families::FamilyParser;
pub use registry::{FamilyRegistry, REGISTRY_VERSION, parse_token};
