use alloc::string::String;
use core::fmt::{self, Write};

use tracing::trace;

use crate::ir::policy::PrintingPolicy;
use crate::ir::qual::{QualType, Qualifiers};
use crate::ir::ty::{TemplateHead, TypeKind};
use crate::ir::uglify;

/// Recursive-descent type printer.
///
/// Renders a [`QualType`] into the caller-supplied sink under a borrowed
/// [`PrintingPolicy`]. Printing is a pure function of `(type, policy)`:
/// no state survives between calls, and the only failure mode is the
/// sink's own `fmt::Error`, propagated with `?`.
///
/// Declarator emission is two-phase: [`print_before`] writes qualifiers,
/// the base type and left sigils (`*`, `&`), [`print_after`] writes array
/// bounds and closes the parentheses a pointer-to-array needs to stay
/// reparseable (`int (*)[4]`).
///
/// [`print_before`]: TypePrinter::print_before
/// [`print_after`]: TypePrinter::print_after
pub struct TypePrinter<'p, W: Write> {
    pub(crate) out: &'p mut W,
    pub(crate) policy: &'p PrintingPolicy,
}

impl<'p, W: Write> TypePrinter<'p, W> {
    pub fn new(out: &'p mut W, policy: &'p PrintingPolicy) -> Self {
        Self { out, policy }
    }

    /// Print a complete type.
    pub fn print<'a>(&mut self, qt: QualType<'a>) -> fmt::Result {
        trace!(kind = ?qt.ty, quals = ?qt.quals, "printing type");
        self.print_before(qt)?;
        self.print_after(qt)
    }

    /// Resolve alias sugar when canonical printing is requested.
    ///
    /// Qualifiers written on the sugar accumulate onto the target, so
    /// `const string_view` desugars to a const-qualified target.
    fn desugar<'a>(&self, mut qt: QualType<'a>) -> QualType<'a> {
        if self.policy.print_canonical_types {
            while let TypeKind::Alias { aliased, .. } = *qt.ty {
                qt = QualType {
                    ty: aliased.ty,
                    quals: qt.quals | aliased.quals,
                };
            }
        }
        qt
    }

    pub(crate) fn print_before<'a>(&mut self, qt: QualType<'a>) -> fmt::Result {
        let qt = self.desugar(qt);
        match *qt.ty {
            TypeKind::Builtin(kind) => {
                qt.quals.write_prefix(self.out)?;
                self.out.write_str(kind.spelling())
            }
            TypeKind::Pointer(pointee) => self.print_sigil_before(pointee, "*", qt.quals),
            TypeKind::LValueRef(pointee) => self.print_sigil_before(pointee, "&", qt.quals),
            TypeKind::RValueRef(pointee) => self.print_sigil_before(pointee, "&&", qt.quals),
            TypeKind::Array { elem, .. } => {
                qt.quals.write_prefix(self.out)?;
                self.print_before(elem)
            }
            TypeKind::Record { scope, name } => {
                qt.quals.write_prefix(self.out)?;
                self.write_scope(scope)?;
                self.out.write_str(name)
            }
            TypeKind::Specialization { head, args } => {
                qt.quals.write_prefix(self.out)?;
                self.print_template_head(head)?;
                self.print_template_args(args)
            }
            TypeKind::Alias { scope, name, .. } => {
                // Canonical printing never reaches here; desugar resolved it.
                qt.quals.write_prefix(self.out)?;
                self.write_scope(scope)?;
                self.out.write_str(name)
            }
            TypeKind::TemplateParam { name } => {
                qt.quals.write_prefix(self.out)?;
                let name = self.clean_param_name(name);
                self.out.write_str(name)
            }
        }
    }

    pub(crate) fn print_after<'a>(&mut self, qt: QualType<'a>) -> fmt::Result {
        let qt = self.desugar(qt);
        match *qt.ty {
            TypeKind::Pointer(pointee)
            | TypeKind::LValueRef(pointee)
            | TypeKind::RValueRef(pointee) => {
                if self.desugar(pointee).ty.is_array() {
                    self.out.write_char(')')?;
                }
                self.print_after(pointee)
            }
            TypeKind::Array { elem, bound } => {
                self.out.write_char('[')?;
                if let Some(n) = bound {
                    write!(self.out, "{}", n)?;
                }
                self.out.write_char(']')?;
                self.print_after(elem)
            }
            _ => Ok(()),
        }
    }

    /// Left half of a pointer/reference declarator.
    ///
    /// The sigil is separated from an identifier-like base by one space but
    /// chains directly onto another sigil (`int **`, not `int * *`). An
    /// array pointee opens the wrapping parenthesis closed in
    /// [`print_after`](TypePrinter::print_after).
    fn print_sigil_before<'a>(
        &mut self,
        pointee: QualType<'a>,
        sigil: &str,
        quals: Qualifiers,
    ) -> fmt::Result {
        self.print_before(pointee)?;
        let inner = self.desugar(pointee);
        if !self.left_text_ends_in_sigil(inner) {
            self.out.write_char(' ')?;
        }
        if inner.ty.is_array() {
            self.out.write_char('(')?;
        }
        self.out.write_str(sigil)?;
        if !quals.is_empty() {
            quals.write_suffix(self.out)?;
        }
        Ok(())
    }

    /// Whether `print_before(qt)` ends in a `*`/`&` sigil, in which case the
    /// next sigil chains on without a separating space (`int **`,
    /// `const char *(*)[3]`).
    fn left_text_ends_in_sigil<'a>(&self, qt: QualType<'a>) -> bool {
        let qt = self.desugar(qt);
        match *qt.ty {
            TypeKind::Pointer(_) | TypeKind::LValueRef(_) | TypeKind::RValueRef(_) => true,
            // An array's left half is its element's left half.
            TypeKind::Array { elem, .. } => self.left_text_ends_in_sigil(elem),
            _ => false,
        }
    }

    fn print_template_head<'a>(&mut self, head: TemplateHead<'a>) -> fmt::Result {
        match head {
            TemplateHead::Record { scope, name } => {
                self.write_scope(scope)?;
                self.out.write_str(name)
            }
            // The canonical form of a template-template parameter has no
            // associated declaration; only the argument list is printed.
            TemplateHead::Param { name } => {
                if !self.policy.print_canonical_types {
                    if let Some(name) = name {
                        let name = self.clean_param_name(name);
                        self.out.write_str(name)?;
                    }
                }
                Ok(())
            }
        }
    }

    pub(crate) fn write_scope(&mut self, scope: &[&str]) -> fmt::Result {
        if self.policy.fully_qualified_name {
            for segment in scope {
                self.out.write_str(segment)?;
                self.out.write_str("::")?;
            }
        }
        Ok(())
    }

    /// Template-parameter-derived names only; user scopes and record names
    /// keep their spelling.
    fn clean_param_name<'s>(&self, name: &'s str) -> &'s str {
        if self.policy.clean_uglified_parameters {
            uglify::clean(name)
        } else {
            name
        }
    }
}

/// Convenience wrapper producing an owned string.
pub fn print_to_string(qt: QualType<'_>, policy: &PrintingPolicy) -> String {
    let mut out = String::new();
    let mut printer = TypePrinter::new(&mut out, policy);
    // Writing into a String cannot fail.
    let _ = printer.print(qt);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::TypeFactory;
    use bumpalo::Bump;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtins() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let policy = PrintingPolicy::default();
        assert_eq!(print_to_string(f.int(), &policy), "int");
        assert_eq!(print_to_string(f.double(), &policy), "double");
        assert_eq!(
            print_to_string(f.builtin(crate::BuiltinKind::UnsignedLongLong), &policy),
            "unsigned long long"
        );
    }

    #[test]
    fn qualifier_prefix() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let policy = PrintingPolicy::default();
        assert_eq!(print_to_string(f.int().with_const(), &policy), "const int");
    }

    #[test]
    fn pointer_chains_without_respacing() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let policy = PrintingPolicy::default();
        let pp = f.pointer(f.pointer(f.int()));
        assert_eq!(print_to_string(pp, &policy), "int **");
    }

    #[test]
    fn pointer_to_array_is_parenthesized() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let policy = PrintingPolicy::default();
        let ptr = f.pointer(f.array(f.int(), 54));
        assert_eq!(print_to_string(ptr, &policy), "int (*)[54]");
    }

    #[test]
    fn reference_to_incomplete_array() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let policy = PrintingPolicy::default();
        let r = f.lvalue_ref(f.incomplete_array(f.char()));
        assert_eq!(print_to_string(r, &policy), "char (&)[]");
    }

    #[test]
    fn scope_chain_only_when_fully_qualified() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let ty = f.record(&["std", "chrono"], "seconds");
        let mut policy = PrintingPolicy::default();
        assert_eq!(print_to_string(ty, &policy), "seconds");
        policy.fully_qualified_name = true;
        assert_eq!(print_to_string(ty, &policy), "std::chrono::seconds");
    }

    #[test]
    fn alias_sugar_survives_without_canonicalization() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let target = f.pointer(f.char().with_const());
        let alias = f.alias(&["std"], "c_str_t", target);
        let mut policy = PrintingPolicy::default();
        assert_eq!(print_to_string(alias, &policy), "c_str_t");
        policy.print_canonical_types = true;
        assert_eq!(print_to_string(alias, &policy), "const char *");
    }

    #[test]
    fn alias_qualifiers_accumulate_onto_canonical_target() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let alias = f.alias(&[], "word", f.int());
        let mut policy = PrintingPolicy::default();
        policy.print_canonical_types = true;
        assert_eq!(print_to_string(alias.with_const(), &policy), "const int");
    }
}
