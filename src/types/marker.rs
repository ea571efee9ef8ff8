//! Marker type identities
//!
//! The inject and obsolete settings hold the identity of a marker type that
//! the kernel recognizes on members, not the marker itself.

use std::any::TypeId;
use std::fmt;

/// Built-in marker for members that should be injected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Inject;

/// Built-in marker for members that must be skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Obsolete;

/// Identity of a marker type
///
/// Two markers are equal when they name the same Rust type.
#[derive(Clone, Copy)]
pub struct MarkerType {
    id: TypeId,
    name: &'static str,
}

impl MarkerType {
    /// Identity of the marker type `T`
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Check if this identity names `T`
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Full type name of the marker
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path
    ///
    /// Generic arguments are dropped: `a::Tag<b::C>` reads as `Tag`.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Underlying type id
    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for MarkerType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MarkerType {}

impl std::hash::Hash for MarkerType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for MarkerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MarkerType").field(&self.name).finish()
    }
}

impl fmt::Display for MarkerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Autowire;

    struct Tagged<T>(std::marker::PhantomData<T>);

    #[test]
    fn test_marker_identity() {
        assert_eq!(MarkerType::of::<Inject>(), MarkerType::of::<Inject>());
        assert_ne!(MarkerType::of::<Inject>(), MarkerType::of::<Obsolete>());
        assert!(MarkerType::of::<Autowire>().is::<Autowire>());
        assert!(!MarkerType::of::<Autowire>().is::<Inject>());
    }

    #[test]
    fn test_marker_names() {
        let marker = MarkerType::of::<Inject>();
        assert_eq!(marker.short_name(), "Inject");
        assert!(marker.name().ends_with("::Inject"));
        assert_eq!(marker.to_string(), "Inject");
    }

    #[test]
    fn test_generic_marker_short_name() {
        let marker = MarkerType::of::<Tagged<Inject>>();
        assert_eq!(marker.short_name(), "Tagged");
        assert!(marker.name().ends_with("::Inject>"));
        assert_ne!(marker, MarkerType::of::<Tagged<Obsolete>>());
    }
}
