//! Conversion of enumerations to and from their names.
//!
//! Enumerations which are stored by name implement [`NamedEnum`], normally
//! through the [`named_enum!`] macro which generates the table of names at
//! compile time.
//!
//! # Examples
//!
//! ```
//! use yamlfields::{enums, named_enum};
//!
//! named_enum! {
//!     /// How a file is transferred.
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Transfer {
//!         Copy,
//!         Move,
//!         Link = "symlink",
//!     }
//! }
//!
//! assert_eq!(enums::name(Transfer::Move), "Move");
//! assert_eq!(enums::name(Transfer::Link), "symlink");
//!
//! assert_eq!(enums::parse::<Transfer>("Copy"), Some(Transfer::Copy));
//! assert_eq!(enums::parse::<Transfer>("symlink"), Some(Transfer::Link));
//! assert_eq!(enums::parse::<Transfer>("Link"), None);
//! ```

/// An enumeration with a canonical name for each variant.
///
/// Prefer implementing this through [`named_enum!`].
pub trait NamedEnum: Copy + 'static {
    /// Every variant of the enumeration, in declaration order.
    const VARIANTS: &'static [Self];

    /// The canonical name of the variant.
    fn name(self) -> &'static str;

    /// Look up a variant by its canonical name.
    ///
    /// Names are matched exactly, including case.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name() == name)
    }
}

/// Get the canonical name of an enum value.
#[must_use]
#[inline]
pub fn name<E>(value: E) -> &'static str
where
    E: NamedEnum,
{
    value.name()
}

/// Parse an enum value from its canonical name.
///
/// A non-empty name which doesn't match any variant is logged at the debug
/// level before `None` is returned.
#[must_use]
pub fn parse<E>(text: &str) -> Option<E>
where
    E: NamedEnum,
{
    let value = E::from_name(text);

    if value.is_none() && !text.is_empty() {
        log::debug!(
            "Failed to convert enum {}: {text:?}",
            core::any::type_name::<E>()
        );
    }

    value
}

/// Declare an enumeration and implement [`NamedEnum`] for it.
///
/// Each variant is named after its identifier unless a name is given with
/// `Variant = "name"`. The enumeration must derive [`Copy`].
///
/// # Examples
///
/// ```
/// use yamlfields::enums::NamedEnum;
/// use yamlfields::named_enum;
///
/// named_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     enum Level {
///         Low = "low",
///         High = "high",
///     }
/// }
///
/// assert_eq!(Level::VARIANTS, &[Level::Low, Level::High]);
/// assert_eq!(Level::High.name(), "high");
/// assert_eq!(Level::from_name("low"), Some(Level::Low));
/// ```
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $string:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($(#[$variant_meta])* $variant,)*
        }

        impl $crate::enums::NamedEnum for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant,)*];

            #[inline]
            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $crate::__variant_name!($variant $($string)?),)*
                }
            }
        }
    };
}

/// Pick the name of a variant in [`named_enum!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __variant_name {
    ($variant:ident) => {
        stringify!($variant)
    };

    ($variant:ident $string:literal) => {
        $string
    };
}
