//! Reserved-identifier cleaning.
//!
//! Standard-library headers spell template parameters with
//! compiler-reserved names (`_Tp`, `__f`). User-facing output
//! conventionally strips the reserved marker.

/// Strip the reserved-identifier marker from `name`, if it carries one.
///
/// A name is reserved when it starts with two underscores, or with one
/// underscore followed by an ASCII uppercase letter. Exactly the marker is
/// removed (`__f` -> `f`, `_Tp` -> `Tp`); everything else is left
/// untouched. Idempotent: a clean name passes through unchanged.
pub fn clean(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'_' {
        if bytes[1] == b'_' {
            return &name[2..];
        }
        if bytes[1].is_ascii_uppercase() {
            return &name[1..];
        }
    }
    name
}
