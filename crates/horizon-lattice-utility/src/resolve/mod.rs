//! Resolution pipeline and its output.

mod cascade;
mod declaration;
mod resolver;
mod style_set;

pub use cascade::{Precedence, conflicts, resolve_conflict};
pub use declaration::{Rejection, ResolvedDeclaration};
pub use resolver::{Resolver, resolve};
pub use style_set::ResolvedStyleSet;
