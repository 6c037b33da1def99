/// Per-call formatting configuration.
///
/// A flat record of independent toggles, read-only during a print and never
/// retained by the printer past the call. Callers typically start from
/// `PrintingPolicy::default()` and flip the fields a given rendering needs;
/// new toggles are added as fields without breaking existing call sites.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PrintingPolicy {
    /// Prefix named types with their full enclosing-scope chain (`N::Type`
    /// instead of `Type`).
    pub fully_qualified_name: bool,

    /// Render the resolved form of a type: strip alias sugar, drop the
    /// non-canonical name of a template-template-parameter head, and expand
    /// base subobjects of structured non-type argument values.
    pub print_canonical_types: bool,

    /// Strip reserved-identifier markers from template-parameter-derived
    /// names before emission (`_Tp` -> `Tp`, `__f` -> `f`).
    pub clean_uglified_parameters: bool,

    /// Print the full contents of large character-array arguments. When
    /// false, contents beyond [`LARGE_ARRAY_ELEMENTS`] characters are
    /// truncated to a prefix plus a ` [...]` sentinel.
    ///
    /// [`LARGE_ARRAY_ELEMENTS`]: crate::ir::args::LARGE_ARRAY_ELEMENTS
    pub entire_contents_of_large_array: bool,

    /// Prefix class-typed non-type arguments with their static type
    /// (`Str<12, Encoding::ASCII>{"some string"}` instead of
    /// `{"some string"}`) when that type is not inferable from context.
    pub always_include_type_for_non_type_template_argument: bool,
}

impl Default for PrintingPolicy {
    fn default() -> Self {
        Self {
            fully_qualified_name: false,
            print_canonical_types: false,
            clean_uglified_parameters: false,
            entire_contents_of_large_array: true,
            always_include_type_for_non_type_template_argument: false,
        }
    }
}
