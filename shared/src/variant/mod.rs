//! Closed sum-type access.
//!
//! A [`Variant`] holds exactly one value out of a fixed set of kinds, or the
//! explicit "no value" state. Member types of the set implement
//! [`Alternative`], which is what makes [`get`] and [`holds_alternative`]
//! type-directed:
//!
//! ```
//! use shared::attribute::{AttributeType, AttributeValue};
//! use shared::variant::{self, Variant};
//!
//! let value = AttributeValue::from(42_i64);
//!
//! assert_eq!(value.index(), AttributeType::Int64);
//! assert!(variant::holds_alternative::<i64, _>(&value));
//! assert_eq!(variant::get::<i64, _>(&value).unwrap(), 42);
//! ```
//!
//! Asking for a kind that is not active is the only failure. By default it is
//! reported as [`BadVariantAccess`]; building with the `abort-on-bad-access`
//! feature turns it into a process abort instead.

use std::fmt;
use thiserror::Error;

/// Marker for the "no value" state of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Monostate;

/// Error returned when a variant is read as a kind that is not active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bad variant access: requested {requested}, active {active}")]
pub struct BadVariantAccess {
    requested: &'static str,
    active: &'static str,
}

impl BadVariantAccess {
    /// Name of the kind the caller asked for.
    #[must_use]
    pub fn requested(&self) -> &'static str {
        self.requested
    }

    /// Name of the kind the variant actually held.
    #[must_use]
    pub fn active(&self) -> &'static str {
        self.active
    }
}

/// A value holding exactly one kind out of a closed set.
pub trait Variant {
    /// Discriminant type, usable for branching on the active kind.
    type Kind: Copy + Eq + fmt::Debug;

    /// Returns the discriminant of the active kind.
    fn index(&self) -> Self::Kind;

    /// Returns a human readable name for the active kind.
    fn kind_name(&self) -> &'static str;
}

/// A member type of the closed set of `V`.
pub trait Alternative<V: Variant>: Sized {
    /// Discriminant reported by `V` while this type is active.
    const KIND: V::Kind;

    /// Name used in [`BadVariantAccess`] messages.
    const NAME: &'static str;

    /// Reads the payload if this type is the active kind.
    fn extract(variant: &V) -> Option<Self>;
}

/// Exhaustive dispatch of a visitor over the active kind.
pub trait Visit<F> {
    /// Result produced by the visitor.
    type Output;

    /// Calls the visitor method matching the active kind.
    fn visit_with(&self, visitor: F) -> Self::Output;
}

/// Returns the discriminant of the active kind.
pub fn index<V: Variant>(variant: &V) -> V::Kind {
    variant.index()
}

/// Returns `true` if `T` is the active kind of `variant`.
pub fn holds_alternative<T, V>(variant: &V) -> bool
where
    T: Alternative<V>,
    V: Variant,
{
    variant.index() == T::KIND
}

/// Reads the payload of `variant` as `T`.
///
/// The variant is only borrowed, so a failed access leaves it untouched.
///
/// # Errors
///
/// Returns [`BadVariantAccess`] if `T` is not the active kind.
pub fn get<T, V>(variant: &V) -> Result<T, BadVariantAccess>
where
    T: Alternative<V>,
    V: Variant,
{
    match T::extract(variant) {
        Some(value) => Ok(value),
        None => Err(bad_variant_access(T::NAME, variant.kind_name())),
    }
}

/// Invokes `visitor` with the payload typed as the active kind.
pub fn visit<F, V>(visitor: F, variant: &V) -> V::Output
where
    V: Visit<F>,
{
    variant.visit_with(visitor)
}

#[cfg(not(feature = "abort-on-bad-access"))]
fn bad_variant_access(requested: &'static str, active: &'static str) -> BadVariantAccess {
    BadVariantAccess { requested, active }
}

#[cfg(feature = "abort-on-bad-access")]
fn bad_variant_access(requested: &'static str, active: &'static str) -> BadVariantAccess {
    tracing::error!(requested, active, "bad variant access, aborting");
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A two-kind variant used to exercise the generic functions on
    /// something other than attribute values.
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Reading {
        Empty(Monostate),
        Count(u32),
        Label(&'static str),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ReadingKind {
        Empty,
        Count,
        Label,
    }

    impl Variant for Reading {
        type Kind = ReadingKind;

        fn index(&self) -> ReadingKind {
            match self {
                Self::Empty(_) => ReadingKind::Empty,
                Self::Count(_) => ReadingKind::Count,
                Self::Label(_) => ReadingKind::Label,
            }
        }

        fn kind_name(&self) -> &'static str {
            match self {
                Self::Empty(_) => "empty",
                Self::Count(_) => "count",
                Self::Label(_) => "label",
            }
        }
    }

    impl Alternative<Reading> for u32 {
        const KIND: ReadingKind = ReadingKind::Count;
        const NAME: &'static str = "count";

        fn extract(variant: &Reading) -> Option<Self> {
            match variant {
                Reading::Count(v) => Some(*v),
                _ => None,
            }
        }
    }

    impl Alternative<Reading> for &'static str {
        const KIND: ReadingKind = ReadingKind::Label;
        const NAME: &'static str = "label";

        fn extract(variant: &Reading) -> Option<Self> {
            match variant {
                Reading::Label(v) => Some(*v),
                _ => None,
            }
        }
    }

    struct Describe;

    impl Visit<Describe> for Reading {
        type Output = String;

        fn visit_with(&self, _visitor: Describe) -> String {
            match self {
                Self::Empty(_) => "nothing".to_string(),
                Self::Count(v) => format!("{v} items"),
                Self::Label(v) => format!("label {v}"),
            }
        }
    }

    #[test]
    fn test_get_active_kind() {
        let reading = Reading::Count(7);
        assert_eq!(get::<u32, _>(&reading), Ok(7));
        assert!(holds_alternative::<u32, _>(&reading));
        assert!(!holds_alternative::<&str, _>(&reading));
    }

    #[cfg(not(feature = "abort-on-bad-access"))]
    #[test]
    fn test_get_wrong_kind_fails() {
        let reading = Reading::Label("disk");
        let err = get::<u32, _>(&reading).unwrap_err();

        assert_eq!(err.requested(), "count");
        assert_eq!(err.active(), "label");
        assert_eq!(
            err.to_string(),
            "bad variant access: requested count, active label"
        );
    }

    #[cfg(not(feature = "abort-on-bad-access"))]
    #[test]
    fn test_failed_get_leaves_index_unchanged() {
        let reading = Reading::Empty(Monostate);
        let before = index(&reading);

        assert!(get::<u32, _>(&reading).is_err());
        assert!(get::<&str, _>(&reading).is_err());

        assert_eq!(index(&reading), before);
        assert_eq!(reading, Reading::Empty(Monostate));
    }

    #[cfg(not(feature = "abort-on-bad-access"))]
    #[test]
    fn test_attribute_value_wrong_kind_fails() {
        use crate::attribute::{AttributeType, AttributeValue};

        let value = AttributeValue::from(42_i64);
        let err = get::<bool, _>(&value).unwrap_err();

        assert_eq!(err.requested(), "bool");
        assert_eq!(err.active(), "int64");
        assert_eq!(index(&value), AttributeType::Int64);
    }

    #[cfg(feature = "abort-on-bad-access")]
    #[test]
    fn test_wrong_kind_aborts_process() -> std::io::Result<()> {
        const CHILD_ENV: &str = "SHARED_BAD_ACCESS_CHILD";

        if std::env::var_os(CHILD_ENV).is_some() {
            let _ = get::<u32, _>(&Reading::Label("disk"));
            return Ok(());
        }

        let status = std::process::Command::new(std::env::current_exe()?)
            .args([
                "variant::tests::test_wrong_kind_aborts_process",
                "--exact",
                "--nocapture",
            ])
            .env(CHILD_ENV, "1")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()?;

        assert!(!status.success());
        Ok(())
    }

    #[test]
    fn test_visit_dispatches_on_active_kind() {
        assert_eq!(visit(Describe, &Reading::Count(3)), "3 items");
        assert_eq!(visit(Describe, &Reading::Label("cpu")), "label cpu");
        assert_eq!(visit(Describe, &Reading::Empty(Monostate)), "nothing");
    }
}
