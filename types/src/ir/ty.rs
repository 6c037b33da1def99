use crate::ir::arg::TemplateArg;
use crate::ir::qual::QualType;

/// Builtin (fundamental) types.
///
/// Only the builtins the printer is exercised with; adding a variant is a
/// matter of extending [`BuiltinKind::spelling`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BuiltinKind {
    Void,
    Bool,
    Char,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
}

impl BuiltinKind {
    pub fn spelling(self) -> &'static str {
        match self {
            BuiltinKind::Void => "void",
            BuiltinKind::Bool => "bool",
            BuiltinKind::Char => "char",
            BuiltinKind::Short => "short",
            BuiltinKind::UnsignedShort => "unsigned short",
            BuiltinKind::Int => "int",
            BuiltinKind::UnsignedInt => "unsigned int",
            BuiltinKind::Long => "long",
            BuiltinKind::UnsignedLong => "unsigned long",
            BuiltinKind::LongLong => "long long",
            BuiltinKind::UnsignedLongLong => "unsigned long long",
            BuiltinKind::Float => "float",
            BuiltinKind::Double => "double",
        }
    }
}

/// The template named by a specialization.
///
/// A `Param` head is a template-template parameter used directly as the
/// head of a specialization. Its canonical form has no associated
/// declaration, so the printer may have nothing but the argument list to
/// show for it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TemplateHead<'a> {
    /// A real class template, with its enclosing scope chain.
    Record {
        scope: &'a [&'a str],
        name: &'a str,
    },
    /// A template-template parameter; `name` is `None` once canonicalized.
    Param { name: Option<&'a str> },
}

/// Logical structure of a type.
///
/// A single sum type over the structural kinds the printer dispatches on.
/// Children are `QualType` edges into the same arena; the graph is acyclic
/// for printing purposes (self-reference only through `Pointer`/`*Ref`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind<'a> {
    Builtin(BuiltinKind),

    Pointer(QualType<'a>),

    LValueRef(QualType<'a>),

    RValueRef(QualType<'a>),

    /// Array of known (`Some(n)`) or unknown (`None`) bound.
    Array {
        elem: QualType<'a>,
        bound: Option<u64>,
    },

    /// Named record or enum. `scope` is outermost-first.
    Record {
        scope: &'a [&'a str],
        name: &'a str,
    },

    /// Template specialization: head plus its argument list.
    Specialization {
        head: TemplateHead<'a>,
        args: &'a [TemplateArg<'a>],
    },

    /// Typedef/using sugar over `aliased` (the resolved target).
    Alias {
        scope: &'a [&'a str],
        name: &'a str,
        aliased: QualType<'a>,
    },

    /// A template type parameter used as a type (e.g. `_Tp`).
    TemplateParam { name: &'a str },
}

impl<'a> TypeKind<'a> {
    pub fn is_array(&self) -> bool {
        matches!(self, TypeKind::Array { .. })
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, TypeKind::Pointer(_))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, TypeKind::LValueRef(_) | TypeKind::RValueRef(_))
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, TypeKind::Builtin(_))
    }

    pub fn is_specialization(&self) -> bool {
        matches!(self, TypeKind::Specialization { .. })
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, TypeKind::Alias { .. })
    }
}
