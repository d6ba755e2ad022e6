//! javadoc-gen: insert Javadoc comment blocks above undocumented Java
//! declarations.
//!
//! The engine is lexical: each line is classified on its own
//! ([`classify`]), method signatures are picked apart with regexes
//! ([`signature`]), and prose comes from naming conventions ([`naming`])
//! assembled into a block by [`synth`]. [`transform`] drives all of this
//! over one file's text. [`discover`] and [`process`] are the thin file
//! system layer used by the binary.

pub mod classify;
pub mod discover;
pub mod model;
pub mod naming;
pub mod process;
pub mod signature;
pub mod synth;
pub mod transform;

pub use model::{DeclarationKind, GeneratedBlock, MethodDescriptor, Parameter, TransformResult};
pub use transform::transform;
