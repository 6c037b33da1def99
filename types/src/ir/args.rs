//! Template-argument list rendering, including structured non-type values
//! and large character-array truncation.

use core::fmt::{self, Write};

use crate::ir::arg::{TemplateArg, Value};
use crate::ir::printer::TypePrinter;
use crate::ir::qual::QualType;

/// Character-array arguments longer than this are truncated to their first
/// `LARGE_ARRAY_ELEMENTS` characters plus a ` [...]` sentinel unless
/// `entire_contents_of_large_array` is set.
pub const LARGE_ARRAY_ELEMENTS: usize = 33;

impl<'p, W: Write> TypePrinter<'p, W> {
    /// Render `<arg, arg, ...>`. Packs splice into the enclosing list.
    pub(crate) fn print_template_args<'a>(&mut self, args: &[TemplateArg<'a>]) -> fmt::Result {
        self.out.write_char('<')?;
        let mut first = true;
        self.print_arg_list(args, &mut first)?;
        self.out.write_char('>')
    }

    fn print_arg_list<'a>(
        &mut self,
        args: &[TemplateArg<'a>],
        first: &mut bool,
    ) -> fmt::Result {
        for arg in args {
            match *arg {
                TemplateArg::Pack(elements) => self.print_arg_list(elements, first)?,
                TemplateArg::Type(qt) => {
                    self.arg_separator(first)?;
                    self.print(qt)?;
                }
                TemplateArg::Value { ty, ref value } => {
                    self.arg_separator(first)?;
                    self.print_nontype_arg(ty, value)?;
                }
            }
        }
        Ok(())
    }

    fn arg_separator(&mut self, first: &mut bool) -> fmt::Result {
        if !*first {
            self.out.write_str(", ")?;
        }
        *first = false;
        Ok(())
    }

    /// A non-type argument.
    ///
    /// Scalar values print bare, with an explicit `Type{value}` form only
    /// when the policy asks for it and the argument's type is not inferable
    /// from context. Class-typed values always brace-wrap.
    fn print_nontype_arg<'a>(
        &mut self,
        ty: Option<QualType<'a>>,
        value: &Value<'a>,
    ) -> fmt::Result {
        let include_type = self
            .policy
            .always_include_type_for_non_type_template_argument;
        match *value {
            Value::Struct { .. } => self.print_struct_value(value),
            Value::CharArray(contents) => {
                if include_type {
                    if let Some(ty) = ty {
                        self.print(ty)?;
                    }
                }
                self.out.write_char('{')?;
                self.print_char_array(contents)?;
                self.out.write_char('}')
            }
            Value::Int(_) | Value::Enum { .. } => {
                if include_type {
                    if let Some(ty) = ty {
                        self.print(ty)?;
                        self.out.write_char('{')?;
                        self.print_scalar_value(value)?;
                        return self.out.write_char('}');
                    }
                }
                self.print_scalar_value(value)
            }
        }
    }

    fn print_scalar_value<'a>(&mut self, value: &Value<'a>) -> fmt::Result {
        match *value {
            Value::Int(v) => write!(self.out, "{}", v),
            Value::Enum {
                scope,
                name,
                variant,
            } => {
                self.write_scope(scope)?;
                self.out.write_str(name)?;
                self.out.write_str("::")?;
                self.out.write_str(variant)
            }
            // Aggregates are handled by print_struct_value / print_char_array.
            Value::CharArray(contents) => self.print_char_array(contents),
            Value::Struct { .. } => self.print_struct_value(value),
        }
    }

    /// Aggregate value in brace-initialization syntax.
    ///
    /// Canonical printing shows every base subobject as its own nested
    /// braced (and, with types included, named) aggregate:
    /// `Height{DimensionImpl<Height>{Dimension{0}}}`. Without it, base
    /// contents flatten into a single brace level.
    fn print_struct_value<'a>(&mut self, value: &Value<'a>) -> fmt::Result {
        let Value::Struct { ty, bases, fields } = *value else {
            return self.print_scalar_value(value);
        };
        if self
            .policy
            .always_include_type_for_non_type_template_argument
        {
            self.print(ty)?;
        }
        self.out.write_char('{')?;
        let mut first = true;
        if self.policy.print_canonical_types {
            for base in bases {
                self.member_separator(&mut first)?;
                self.print_struct_value(base)?;
            }
            for field in fields {
                self.member_separator(&mut first)?;
                self.print_scalar_value(field)?;
            }
        } else {
            self.print_flattened_members(bases, fields, &mut first)?;
        }
        self.out.write_char('}')
    }

    /// Non-canonical form: inline every base's members, then own fields.
    fn print_flattened_members<'a>(
        &mut self,
        bases: &[Value<'a>],
        fields: &[Value<'a>],
        first: &mut bool,
    ) -> fmt::Result {
        for base in bases {
            match *base {
                Value::Struct {
                    bases: inner_bases,
                    fields: inner_fields,
                    ..
                } => self.print_flattened_members(inner_bases, inner_fields, first)?,
                ref other => {
                    self.member_separator(first)?;
                    self.print_scalar_value(other)?;
                }
            }
        }
        for field in fields {
            self.member_separator(first)?;
            self.print_scalar_value(field)?;
        }
        Ok(())
    }

    fn member_separator(&mut self, first: &mut bool) -> fmt::Result {
        if !*first {
            self.out.write_str(", ")?;
        }
        *first = false;
        Ok(())
    }

    /// Quoted character-array literal, truncated per policy.
    fn print_char_array(&mut self, contents: &str) -> fmt::Result {
        self.out.write_char('"')?;
        let truncate = !self.policy.entire_contents_of_large_array
            && contents.chars().count() > LARGE_ARRAY_ELEMENTS;
        if truncate {
            for c in contents.chars().take(LARGE_ARRAY_ELEMENTS) {
                self.write_literal_char(c)?;
            }
            self.out.write_str(" [...]")?;
        } else {
            for c in contents.chars() {
                self.write_literal_char(c)?;
            }
        }
        self.out.write_char('"')
    }

    fn write_literal_char(&mut self, c: char) -> fmt::Result {
        match c {
            '"' => self.out.write_str("\\\""),
            '\\' => self.out.write_str("\\\\"),
            '\n' => self.out.write_str("\\n"),
            '\t' => self.out.write_str("\\t"),
            _ => self.out.write_char(c),
        }
    }
}
