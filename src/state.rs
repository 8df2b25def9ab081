/*
 * Copyright 2026 Narative Studio Inc.
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Page state for the landing page: which panel faces the visitor, and
//! whether the entrance transitions have kicked in yet.
//!
//! Both values are deliberately closed enums rather than strings, so an
//! impossible state cannot be stored.

/// The panel currently facing the visitor. The contact panel stays mounted
/// off-canvas either way; switching only moves the sliding layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Contact,
}

impl View {
    /// CSS transform for the sliding layer. The contact layer is parked one
    /// viewport-width to the right, so pushing the home panel out by
    /// `-100vw` brings the contact panel in.
    pub fn transform(self) -> &'static str {
        match self {
            View::Home => "translateX(0)",
            View::Contact => "translateX(-100vw)",
        }
    }
}

/// Gate for the entrance transitions. Flips to `Start` once, shortly after
/// mount, and never goes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    #[default]
    Idle,
    Start,
}

impl Animation {
    /// One-shot transition; `Start` is absorbing, so re-firing the mount
    /// timer is harmless.
    pub fn started(self) -> Animation {
        Animation::Start
    }

    pub fn is_started(self) -> bool {
        matches!(self, Animation::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_view_is_home() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn home_sits_at_origin() {
        assert_eq!(View::Home.transform(), "translateX(0)");
    }

    #[test]
    fn contact_slides_one_viewport_left() {
        assert_eq!(View::Contact.transform(), "translateX(-100vw)");
    }

    #[test]
    fn toggling_converges() {
        // home -> contact -> home -> contact must land where a single
        // home -> contact lands; there is no hidden history.
        let mut view = View::default();
        for target in [View::Contact, View::Home, View::Contact] {
            view = target;
        }
        assert_eq!(view, View::Contact);
        assert_eq!(view.transform(), View::Contact.transform());
    }

    #[test]
    fn animation_starts_idle() {
        assert_eq!(Animation::default(), Animation::Idle);
        assert!(!Animation::default().is_started());
    }

    #[test]
    fn animation_start_is_one_shot() {
        let first = Animation::Idle.started();
        assert_eq!(first, Animation::Start);
        // a second timer firing must not produce a new state
        assert_eq!(first.started(), Animation::Start);
        assert!(first.is_started());
    }
}
