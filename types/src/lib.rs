//! C++-style semantic type graph and type printer.
//!
//! This crate renders a resolved type description back into source-like
//! text under a configurable [`PrintingPolicy`]: scope qualification,
//! alias canonicalization, non-type template argument verbosity,
//! large-literal truncation and reserved-identifier cleaning.
//!
//! Type graphs are arena-allocated and immutable; the printer borrows
//! them read-only for the duration of a single call.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use ctir_types::{PrintingPolicy, TypeFactory, print_to_string};
//!
//! let arena = Bump::new();
//! let f = TypeFactory::new(&arena);
//!
//! let ty = f.pointer(f.array(f.int(), 4));
//! assert_eq!(print_to_string(ty, &PrintingPolicy::default()), "int (*)[4]");
//! ```

#![no_std]
extern crate alloc;

// Intermediate representation of types, arguments and the printer.
pub mod ir;

// Arena-backed construction of type graphs.
pub mod factory;

// Re-export IR types for convenience
pub use ir::{
    BuiltinKind, LARGE_ARRAY_ELEMENTS, PrintingPolicy, QualType, Qualifiers, TemplateArg,
    TemplateHead, TypeKind, TypePrinter, Value, print_to_string, uglify,
};

pub use factory::TypeFactory;
