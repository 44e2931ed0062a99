//! Activation selector and the route-group activation it resolves to.

use strum::{AsRefStr, Display, EnumString};

/// A recognized runtime profile naming one of the two route groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
pub enum Profile {
    /// The "typeone" route group.
    #[strum(serialize = "typeone")]
    TypeOne,

    /// The "typetwo" route group.
    #[strum(serialize = "typetwo")]
    TypeTwo,
}

/// Which route group is live for the process lifetime.
///
/// Resolved exactly once at startup, before any route registration.
/// `Neither` is a valid terminal state, not an error: no group is
/// registered and both prefixes resolve as 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The `/typeone` group is registered.
    TypeOne,
    /// The `/typetwo` group is registered.
    TypeTwo,
    /// No group is registered.
    Neither,
}

impl Activation {
    /// Resolve the activation from an optional selector value.
    ///
    /// Matching is exact and case-sensitive; anything other than the two
    /// recognized profile names (including an unset selector) yields
    /// `Neither`.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector.and_then(|s| s.parse::<Profile>().ok()) {
            Some(Profile::TypeOne) => Activation::TypeOne,
            Some(Profile::TypeTwo) => Activation::TypeTwo,
            None => Activation::Neither,
        }
    }

    /// The profile this activation corresponds to, if any.
    pub fn profile(&self) -> Option<Profile> {
        match self {
            Activation::TypeOne => Some(Profile::TypeOne),
            Activation::TypeTwo => Some(Profile::TypeTwo),
            Activation::Neither => None,
        }
    }

    /// Check whether any route group is active.
    pub fn is_active(&self) -> bool {
        !matches!(self, Activation::Neither)
    }
}
