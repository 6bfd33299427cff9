//! Wire-name metadata for enums.
//!
//! Every enum that travels in a checkout document declares, per variant, the
//! string used on the wire. An empty declaration means "declare nothing": the
//! variant then travels under its symbolic Rust name. The [`wire_enum!`]
//! macro keeps the mapping next to the enum definition.

/// An enum with a per-variant wire name.
pub trait WireEnum: Copy + Sized + 'static {
    /// All variants, in declaration order.
    const VARIANTS: &'static [Self];

    /// The Rust variant name, e.g. `PaymentDeclined`.
    fn symbolic_name(self) -> &'static str;

    /// The wire name declared for this variant, or `""` when none was declared.
    fn declared_wire_name(self) -> &'static str;

    /// The string written to XML: the declared name, or the symbolic name when
    /// nothing was declared.
    fn wire_name(self) -> &'static str {
        let declared = self.declared_wire_name();
        if declared.is_empty() {
            self.symbolic_name()
        } else {
            declared
        }
    }

    /// Look up a variant by its wire name. First match in declaration order wins.
    fn from_wire(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.wire_name() == value)
    }
}

/// Declare an enum together with its wire names.
///
/// ```ignore
/// wire_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Carrier {
///         Ups => "UPS",
///         Other => "",
///     }
/// }
/// ```
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::wire::WireEnum for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn symbolic_name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            fn declared_wire_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::wire::WireEnum::wire_name(*self))
            }
        }
    };
}

pub(crate) use wire_enum;

#[cfg(test)]
mod tests {
    use super::*;

    wire_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Sample {
            Declared => "DECLARED",
            Undeclared => "",
        }
    }

    #[test]
    fn test_should_prefer_declared_wire_name() {
        assert_eq!(Sample::Declared.wire_name(), "DECLARED");
        assert_eq!(Sample::Declared.symbolic_name(), "Declared");
    }

    #[test]
    fn test_should_fall_back_to_symbolic_name() {
        assert_eq!(Sample::Undeclared.declared_wire_name(), "");
        assert_eq!(Sample::Undeclared.wire_name(), "Undeclared");
        assert_eq!(Sample::Undeclared.to_string(), "Undeclared");
    }

    #[test]
    fn test_should_look_up_by_wire_name() {
        assert_eq!(Sample::from_wire("DECLARED"), Some(Sample::Declared));
        assert_eq!(Sample::from_wire("Undeclared"), Some(Sample::Undeclared));
        assert_eq!(Sample::from_wire("Declared"), None);
        assert_eq!(Sample::from_wire(""), None);
    }
}
