use crate::ir::qual::QualType;

/// One entry in a template specialization's argument list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TemplateArg<'a> {
    /// A type argument; recurses into the type printer.
    Type(QualType<'a>),

    /// A non-type (value) argument.
    ///
    /// `ty` is the argument's static type when it is not trivially
    /// inferable from the template parameter's declared form (class-typed
    /// arguments of deduced parameters). Plain integral and enum arguments
    /// carry `None` and always print bare.
    Value {
        ty: Option<QualType<'a>>,
        value: Value<'a>,
    },

    /// A pack of arguments; flattens positionally into the enclosing list.
    Pack(&'a [TemplateArg<'a>]),
}

/// Concrete value of a non-type template argument.
///
/// Recursive: scalar, array-of-scalars (character literal) or aggregate
/// mirroring class layout including base subobjects.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Value<'a> {
    Int(i128),

    /// An enumerator, printed `Enum::Variant` (scope-prefixed under full
    /// qualification).
    Enum {
        scope: &'a [&'a str],
        name: &'a str,
        variant: &'a str,
    },

    /// Literal character-array content, without quotes or terminating NUL.
    CharArray(&'a str),

    /// Aggregate value: base-class subobjects first, then direct fields.
    Struct {
        ty: QualType<'a>,
        bases: &'a [Value<'a>],
        fields: &'a [Value<'a>],
    },
}

impl<'a> Value<'a> {
    /// Class-typed values get brace-wrapped when printed as arguments.
    pub fn is_class_value(&self) -> bool {
        matches!(self, Value::CharArray(_) | Value::Struct { .. })
    }
}
