//! Intermediate representation of the semantic type graph.
//!
//! ## Structure
//!
//! - **Core types**: [`TypeKind`], [`QualType`] - the logical structure of types
//! - **Template arguments**: [`TemplateArg`], [`Value`] - argument lists and
//!   structured non-type values
//! - **Policy**: [`PrintingPolicy`] - per-call formatting configuration
//! - **Printer**: [`TypePrinter`] - recursive-descent rendering into a sink
//!
//! All nodes are borrowed `&'a` references owned by the surrounding arena;
//! printing never mutates or retains them past a call.

pub mod arg;
pub mod args;
pub mod policy;
pub mod printer;
pub mod qual;
pub mod ty;
pub mod uglify;

pub use arg::{TemplateArg, Value};
pub use args::LARGE_ARRAY_ELEMENTS;
pub use policy::PrintingPolicy;
pub use printer::{TypePrinter, print_to_string};
pub use qual::{QualType, Qualifiers};
pub use ty::{BuiltinKind, TemplateHead, TypeKind};
