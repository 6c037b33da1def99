use alloc::vec::Vec;

use bumpalo::Bump;

use crate::ir::arg::{TemplateArg, Value};
use crate::ir::qual::QualType;
use crate::ir::ty::{BuiltinKind, TemplateHead, TypeKind};

/// Arena-backed constructor for type graphs.
///
/// Nodes, name strings and argument slices are allocated in a `Bump` arena
/// and handed out as shared `&'a` references; the factory never mutates
/// what it has allocated. No deduplication is performed - structurally
/// equal nodes built twice are distinct allocations that still compare
/// equal.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use ctir_types::TypeFactory;
///
/// let arena = Bump::new();
/// let f = TypeFactory::new(&arena);
///
/// let int_ty = f.int();
/// let arr_ty = f.array(int_ty, 4);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct TypeFactory<'a> {
    arena: &'a Bump,
}

impl<'a> TypeFactory<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self { arena }
    }

    fn alloc_ty(&self, kind: TypeKind<'a>) -> QualType<'a> {
        QualType::unqualified(self.arena.alloc(kind))
    }

    // ========================================================================
    // Interning helpers
    // ========================================================================

    pub fn str(&self, s: &str) -> &'a str {
        self.arena.alloc_str(s)
    }

    pub fn scope(&self, segments: &[&str]) -> &'a [&'a str] {
        let interned: Vec<&'a str> = segments.iter().map(|s| self.str(s)).collect();
        self.arena.alloc_slice_copy(&interned)
    }

    pub fn args(&self, args: &[TemplateArg<'a>]) -> &'a [TemplateArg<'a>] {
        self.arena.alloc_slice_copy(args)
    }

    pub fn values(&self, values: &[Value<'a>]) -> &'a [Value<'a>] {
        self.arena.alloc_slice_copy(values)
    }

    // ========================================================================
    // Builtin types
    // ========================================================================

    pub fn builtin(&self, kind: BuiltinKind) -> QualType<'a> {
        self.alloc_ty(TypeKind::Builtin(kind))
    }

    pub fn void(&self) -> QualType<'a> {
        self.builtin(BuiltinKind::Void)
    }

    pub fn bool(&self) -> QualType<'a> {
        self.builtin(BuiltinKind::Bool)
    }

    pub fn char(&self) -> QualType<'a> {
        self.builtin(BuiltinKind::Char)
    }

    pub fn int(&self) -> QualType<'a> {
        self.builtin(BuiltinKind::Int)
    }

    pub fn float(&self) -> QualType<'a> {
        self.builtin(BuiltinKind::Float)
    }

    pub fn double(&self) -> QualType<'a> {
        self.builtin(BuiltinKind::Double)
    }

    // ========================================================================
    // Structural types
    // ========================================================================

    pub fn pointer(&self, pointee: QualType<'a>) -> QualType<'a> {
        self.alloc_ty(TypeKind::Pointer(pointee))
    }

    pub fn lvalue_ref(&self, pointee: QualType<'a>) -> QualType<'a> {
        self.alloc_ty(TypeKind::LValueRef(pointee))
    }

    pub fn rvalue_ref(&self, pointee: QualType<'a>) -> QualType<'a> {
        self.alloc_ty(TypeKind::RValueRef(pointee))
    }

    pub fn array(&self, elem: QualType<'a>, bound: u64) -> QualType<'a> {
        self.alloc_ty(TypeKind::Array {
            elem,
            bound: Some(bound),
        })
    }

    pub fn incomplete_array(&self, elem: QualType<'a>) -> QualType<'a> {
        self.alloc_ty(TypeKind::Array { elem, bound: None })
    }

    // ========================================================================
    // Named types
    // ========================================================================

    pub fn record(&self, scope: &[&str], name: &str) -> QualType<'a> {
        self.alloc_ty(TypeKind::Record {
            scope: self.scope(scope),
            name: self.str(name),
        })
    }

    pub fn alias(&self, scope: &[&str], name: &str, aliased: QualType<'a>) -> QualType<'a> {
        self.alloc_ty(TypeKind::Alias {
            scope: self.scope(scope),
            name: self.str(name),
            aliased,
        })
    }

    pub fn template_param(&self, name: &str) -> QualType<'a> {
        self.alloc_ty(TypeKind::TemplateParam {
            name: self.str(name),
        })
    }

    /// Specialization of a named class template.
    pub fn specialization(
        &self,
        scope: &[&str],
        name: &str,
        args: &[TemplateArg<'a>],
    ) -> QualType<'a> {
        self.alloc_ty(TypeKind::Specialization {
            head: TemplateHead::Record {
                scope: self.scope(scope),
                name: self.str(name),
            },
            args: self.args(args),
        })
    }

    /// Specialization headed by a template-template parameter.
    pub fn param_specialization(
        &self,
        name: Option<&str>,
        args: &[TemplateArg<'a>],
    ) -> QualType<'a> {
        self.alloc_ty(TypeKind::Specialization {
            head: TemplateHead::Param {
                name: name.map(|n| self.str(n)),
            },
            args: self.args(args),
        })
    }

    // ========================================================================
    // Template arguments and non-type values
    // ========================================================================

    pub fn type_arg(&self, ty: QualType<'a>) -> TemplateArg<'a> {
        TemplateArg::Type(ty)
    }

    pub fn value_arg(&self, ty: Option<QualType<'a>>, value: Value<'a>) -> TemplateArg<'a> {
        TemplateArg::Value { ty, value }
    }

    pub fn char_array_arg(&self, ty: Option<QualType<'a>>, contents: &str) -> TemplateArg<'a> {
        TemplateArg::Value {
            ty,
            value: Value::CharArray(self.str(contents)),
        }
    }

    pub fn pack(&self, elements: &[TemplateArg<'a>]) -> TemplateArg<'a> {
        TemplateArg::Pack(self.args(elements))
    }

    pub fn int_value(&self, v: i128) -> Value<'a> {
        Value::Int(v)
    }

    pub fn enum_value(&self, scope: &[&str], name: &str, variant: &str) -> Value<'a> {
        Value::Enum {
            scope: self.scope(scope),
            name: self.str(name),
            variant: self.str(variant),
        }
    }

    pub fn struct_value(
        &self,
        ty: QualType<'a>,
        bases: &[Value<'a>],
        fields: &[Value<'a>],
    ) -> Value<'a> {
        Value::Struct {
            ty,
            bases: self.values(bases),
            fields: self.values(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    #[test]
    fn structurally_equal_nodes_compare_equal() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        assert_eq!(f.int(), f.int());
        assert_eq!(f.pointer(f.int()), f.pointer(f.int()));
        assert_ne!(f.int(), f.float());
    }

    #[test]
    fn record_interns_scope_and_name() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        let a = f.record(&["N", "M"], "Widget");
        let b = f.record(&["N", "M"], "Widget");
        assert_eq!(a, b);
        assert!(matches!(
            *a.ty,
            TypeKind::Record { scope, name } if scope == ["N", "M"].as_slice() && name == "Widget"
        ));
    }

    #[test]
    fn kind_predicates() {
        let arena = Bump::new();
        let f = TypeFactory::new(&arena);
        assert!(f.int().ty.is_builtin());
        assert!(f.pointer(f.int()).ty.is_pointer());
        assert!(f.lvalue_ref(f.int()).ty.is_reference());
        assert!(f.array(f.int(), 3).ty.is_array());
        assert!(f.specialization(&[], "S", &[]).ty.is_specialization());
        assert!(f.alias(&[], "t", f.int()).ty.is_alias());
    }
}
