// Closed sets of sub-tab identifiers.
// Each plugin declares its own enum, so identifiers outside the set do not compile.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, SubTabError};

/// A closed set of sub-tab identifiers belonging to one settings page.
///
/// Implementations are normally generated with [`subtab_ids!`](crate::subtab_ids),
/// which also rejects duplicate string keys at compile time.
pub trait SubTabId: Copy + Eq + Hash + Debug + 'static {
    /// Every identifier in the set, in declaration order.
    const ALL: &'static [Self];

    /// The string key for this identifier.
    fn as_str(&self) -> &'static str;

    /// Look up an identifier by its string key.
    fn parse(key: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == key)
            .ok_or_else(|| SubTabError::UnknownSubTab(key.to_string()))
    }
}

/// Returns false if any key appears twice. Used by [`subtab_ids!`](crate::subtab_ids).
#[doc(hidden)]
pub const fn keys_are_unique(keys: &[&str]) -> bool {
    let mut i = 0;
    while i < keys.len() {
        let mut j = i + 1;
        while j < keys.len() {
            if str_eq(keys[i], keys[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Declare the sub-tab identifiers of a settings page.
///
/// Generates a `Copy` enum implementing [`SubTabId`], `Display` and `FromStr`.
///
/// ```
/// use subtabs::{SubTabId, subtab_ids};
///
/// subtab_ids! {
///     pub enum PageTab {
///         General => "general",
///         Structure => "structure",
///     }
/// }
///
/// assert_eq!(PageTab::ALL, &[PageTab::General, PageTab::Structure]);
/// assert_eq!(PageTab::Structure.as_str(), "structure");
/// assert_eq!("general".parse::<PageTab>().unwrap(), PageTab::General);
/// ```
///
/// Reusing a key fails to compile:
///
/// ```compile_fail
/// use subtabs::subtab_ids;
///
/// subtab_ids! {
///     enum PageTab {
///         General => "general",
///         Other => "general",
///     }
/// }
/// ```
#[macro_export]
macro_rules! subtab_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        const _: () = assert!(
            $crate::registry::keys_are_unique(&[$($key),+]),
            "duplicate sub-tab identifier"
        );

        impl $crate::registry::SubTabId for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::registry::SubTabId::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::SubTabError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::registry::SubTabId>::parse(s)
            }
        }
    };
}
