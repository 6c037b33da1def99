use core::fmt;

use bitflags::bitflags;

use crate::ir::ty::TypeKind;

bitflags! {
    /// cv-r qualifier set attached to a type reference.
    ///
    /// Qualifiers live on the edge ([`QualType`]) rather than on the node,
    /// so a single interned node can be shared between qualified and
    /// unqualified uses.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Qualifiers: u8 {
        const CONST = 1;
        const VOLATILE = 1 << 1;
        const RESTRICT = 1 << 2;
    }
}

impl Qualifiers {
    /// Keyword spelling in declaration order, each followed by a space.
    pub(crate) fn write_prefix(self, out: &mut dyn fmt::Write) -> fmt::Result {
        if self.contains(Qualifiers::CONST) {
            out.write_str("const ")?;
        }
        if self.contains(Qualifiers::VOLATILE) {
            out.write_str("volatile ")?;
        }
        if self.contains(Qualifiers::RESTRICT) {
            out.write_str("restrict ")?;
        }
        Ok(())
    }

    /// Keyword spelling for the suffix position (after `*`), space-separated.
    pub(crate) fn write_suffix(self, out: &mut dyn fmt::Write) -> fmt::Result {
        let mut first = true;
        for (flag, kw) in [
            (Qualifiers::CONST, "const"),
            (Qualifiers::VOLATILE, "volatile"),
            (Qualifiers::RESTRICT, "restrict"),
        ] {
            if self.contains(flag) {
                if !first {
                    out.write_char(' ')?;
                }
                out.write_str(kw)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A type reference together with its qualifiers.
///
/// Every edge in the graph (pointee, element, alias target, argument type)
/// is a `QualType`. It is `Copy`: two words, no ownership.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct QualType<'a> {
    pub ty: &'a TypeKind<'a>,
    pub quals: Qualifiers,
}

impl<'a> QualType<'a> {
    pub fn unqualified(ty: &'a TypeKind<'a>) -> Self {
        Self {
            ty,
            quals: Qualifiers::empty(),
        }
    }

    /// The same type with extra qualifiers added.
    pub fn qualified(self, quals: Qualifiers) -> Self {
        Self {
            ty: self.ty,
            quals: self.quals | quals,
        }
    }

    pub fn with_const(self) -> Self {
        self.qualified(Qualifiers::CONST)
    }

    pub fn is_const(&self) -> bool {
        self.quals.contains(Qualifiers::CONST)
    }
}
