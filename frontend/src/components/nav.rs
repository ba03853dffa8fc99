use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::scroll::ScrollSubscription;
use crate::config;
use crate::content::{CTA_LABEL, SECTION_LINKS};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub is_scrolled: bool,
    pub is_mobile_menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    /// Latest vertical scroll offset in pixels.
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl NavState {
    pub fn nav_class(&self) -> &'static str {
        if self.is_scrolled {
            "lexora-nav scrolled"
        } else {
            "lexora-nav"
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Scrolled(offset) => {
                // NaN compares false, so an unreadable offset means "top of page"
                next.is_scrolled = offset > config::SCROLL_THRESHOLD_PX;
                if next.is_scrolled != self.is_scrolled {
                    debug!("Nav scrolled state -> {} at offset {}", next.is_scrolled, offset);
                }
            }
            NavAction::ToggleMenu => {
                next.is_mobile_menu_open = !self.is_mobile_menu_open;
            }
            NavAction::CloseMenu => {
                next.is_mobile_menu_open = false;
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[function_component(ScrollAwareNav)]
pub fn scroll_aware_nav() -> Html {
    let nav = use_reducer_eq(NavState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(move |_| {
            let subscription = ScrollSubscription::attach(move |offset| {
                dispatcher.dispatch(NavAction::Scrolled(offset));
            });

            move || drop(subscription)
        }, ());
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    // Links still navigate, the menu just gets out of the way
    let close_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            nav.dispatch(NavAction::CloseMenu);
        })
    };

    let menu_open = nav.is_mobile_menu_open;

    html! {
        <nav class={nav.nav_class()}>
            <div class="nav-content">
                <a href="#" class="nav-logo georgia-font">{"Lexora"}</a>

                <div class="nav-links">
                    { for SECTION_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="nav-link" onclick={close_menu.clone()}>
                            {link.label}
                        </a>
                    }) }
                    <a href={config::APP_URL} class="nav-cta" onclick={close_menu.clone()}>
                        {CTA_LABEL}
                    </a>
                </div>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-expanded={menu_open.to_string()}
                    aria-label={if menu_open { "Zapri meni" } else { "Odpri meni" }}
                >
                    <IconSvg icon={if menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            {
                if menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for SECTION_LINKS.iter().map(|link| html! {
                                <a href={link.href} class="mobile-link" onclick={close_menu.clone()}>
                                    {link.label}
                                </a>
                            }) }
                            <a href={config::APP_URL} class="mobile-cta" onclick={close_menu.clone()}>
                                {CTA_LABEL}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<NavState>, action: NavAction) -> Rc<NavState> {
        state.reduce(action)
    }

    #[test]
    fn test_starts_unscrolled_with_menu_closed() {
        let state = NavState::default();
        assert!(!state.is_scrolled);
        assert!(!state.is_mobile_menu_open);
        assert_eq!(state.nav_class(), "lexora-nav");
    }

    #[test]
    fn test_scroll_sequence_follows_latest_offset() {
        let mut state = Rc::new(NavState::default());
        let mut seen = Vec::new();
        for offset in [0.0, 10.0, 25.0, 15.0] {
            state = apply(state, NavAction::Scrolled(offset));
            seen.push(state.is_scrolled);
        }
        assert_eq!(seen, vec![false, false, true, false]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let state = apply(Rc::new(NavState::default()), NavAction::Scrolled(20.0));
        assert!(!state.is_scrolled);
        let state = apply(state, NavAction::Scrolled(20.5));
        assert!(state.is_scrolled);
        assert_eq!(state.nav_class(), "lexora-nav scrolled");
    }

    #[test]
    fn test_no_hysteresis() {
        let offsets = [500.0, 21.0, 19.0, 21.0, 0.0, 1000.0, 20.0];
        let mut state = Rc::new(NavState::default());
        for offset in offsets {
            state = apply(state, NavAction::Scrolled(offset));
            assert_eq!(state.is_scrolled, offset > 20.0, "offset {}", offset);
        }
    }

    #[test]
    fn test_nan_offset_counts_as_top() {
        let state = apply(Rc::new(NavState::default()), NavAction::Scrolled(100.0));
        let state = apply(state, NavAction::Scrolled(f64::NAN));
        assert!(!state.is_scrolled);
    }

    #[test]
    fn test_toggle_menu_flips() {
        let state = apply(Rc::new(NavState::default()), NavAction::ToggleMenu);
        assert!(state.is_mobile_menu_open);
        let state = apply(state, NavAction::ToggleMenu);
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn test_close_menu_forces_closed() {
        let open = apply(Rc::new(NavState::default()), NavAction::ToggleMenu);
        assert!(!apply(open, NavAction::CloseMenu).is_mobile_menu_open);

        let closed = Rc::new(NavState::default());
        assert!(!apply(closed, NavAction::CloseMenu).is_mobile_menu_open);
    }

    #[test]
    fn test_flags_are_independent() {
        let state = apply(Rc::new(NavState::default()), NavAction::ToggleMenu);
        let state = apply(state, NavAction::Scrolled(300.0));
        assert!(state.is_mobile_menu_open);
        assert!(state.is_scrolled);

        let state = apply(state, NavAction::CloseMenu);
        assert!(state.is_scrolled);

        let state = apply(state, NavAction::ToggleMenu);
        let state = apply(state, NavAction::Scrolled(0.0));
        assert!(state.is_mobile_menu_open);
        assert!(!state.is_scrolled);
    }

    #[test]
    fn test_unchanged_state_is_reused() {
        let state = Rc::new(NavState::default());
        let next = apply(state.clone(), NavAction::Scrolled(5.0));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
