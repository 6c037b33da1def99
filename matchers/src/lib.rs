//! Structural queries over a resolved translation unit.
//!
//! The printer itself has no notion of declarations; a harness that wants
//! to print "the type of parameter `Param`" needs a way to locate that
//! declaration first. [`DeclIndex`] is that collaborator: a read-only
//! index of the declarations a semantic analyzer produced, queried by name
//! or by predicate. The index borrows the same arena the type graph lives
//! in and never outlives it.

#![no_std]
extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use thiserror::Error;

use ctir_types::QualType;

/// What kind of declaration introduced a name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DeclKind {
    /// A variable declaration.
    Var,
    /// A function parameter.
    Parm,
    /// A typedef/using declaration.
    TypeAlias,
}

/// A named declaration with its resolved type.
#[derive(Clone, Copy, Debug)]
pub struct Decl<'a> {
    pub kind: DeclKind,
    pub name: &'a str,
    pub ty: QualType<'a>,
}

/// Failure to locate a declaration.
///
/// A missing declaration is a harness bug, not a printer condition; tests
/// treat it as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("no declaration named `{0}` in the translation unit")]
    NotFound(String),
    #[error("no declaration matched the query")]
    NoMatch,
}

/// Index of the declarations in one translation unit.
///
/// Insertion order is preserved for predicate queries; name lookup goes
/// through a map. Later declarations shadow earlier ones of the same name,
/// the way redeclaration works in a scope.
#[derive(Default)]
pub struct DeclIndex<'a> {
    decls: Vec<Decl<'a>>,
    by_name: HashMap<&'a str, usize>,
}

impl<'a> DeclIndex<'a> {
    pub fn new() -> Self {
        Self {
            decls: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn add(&mut self, decl: Decl<'a>) {
        self.by_name.insert(decl.name, self.decls.len());
        self.decls.push(decl);
    }

    pub fn add_var(&mut self, name: &'a str, ty: QualType<'a>) {
        self.add(Decl {
            kind: DeclKind::Var,
            name,
            ty,
        });
    }

    pub fn add_parm(&mut self, name: &'a str, ty: QualType<'a>) {
        self.add(Decl {
            kind: DeclKind::Parm,
            name,
            ty,
        });
    }

    /// The resolved type of the declaration named `name`.
    pub fn type_of(&self, name: &str) -> Result<QualType<'a>, QueryError> {
        self.by_name
            .get(name)
            .map(|&i| self.decls[i].ty)
            .ok_or_else(|| QueryError::NotFound(name.to_string()))
    }

    /// First declaration matching `pred`, in insertion order.
    pub fn find_decl(
        &self,
        mut pred: impl FnMut(&Decl<'a>) -> bool,
    ) -> Result<&Decl<'a>, QueryError> {
        self.decls
            .iter()
            .find(|d| pred(d))
            .ok_or(QueryError::NoMatch)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decl<'a>> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use ctir_types::TypeFactory;

    #[test]
    fn lookup_by_name() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let mut index = DeclIndex::new();
        index.add_var("x", f.int());
        index.add_parm("p", f.pointer(f.float()));

        assert_eq!(index.type_of("x"), Ok(f.int()));
        assert_eq!(index.type_of("p"), Ok(f.pointer(f.float())));
        assert_eq!(
            index.type_of("missing"),
            Err(QueryError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn later_declarations_shadow_earlier_ones() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let mut index = DeclIndex::new();
        index.add_var("x", f.int());
        index.add_var("x", f.float());
        assert_eq!(index.type_of("x"), Ok(f.float()));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn predicate_query_walks_in_insertion_order() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let mut index = DeclIndex::new();
        index.add_var("a", f.int());
        index.add_parm("b", f.int());
        index.add_parm("c", f.float());

        let found = index
            .find_decl(|d| d.kind == DeclKind::Parm)
            .expect("a parameter exists");
        assert_eq!(found.name, "b");

        assert!(matches!(
            index.find_decl(|d| d.kind == DeclKind::TypeAlias),
            Err(QueryError::NoMatch)
        ));
    }
}
