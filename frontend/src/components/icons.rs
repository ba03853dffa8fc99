use yew::prelude::*;

/// Symbolic icon referenced from the content tables.
///
/// Geometry is the lucide set on a 24x24 grid, stroked with `currentColor`
/// so the surrounding text color decides the tint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Shield,
    Zap,
    BookOpen,
    MessageSquare,
    ArrowRight,
    CheckCircle,
    ChevronDown,
    HelpCircle,
    Menu,
    Close,
    Scale,
    Search,
    FileText,
}

impl Icon {
    pub const ALL: [Icon; 13] = [
        Icon::Shield,
        Icon::Zap,
        Icon::BookOpen,
        Icon::MessageSquare,
        Icon::ArrowRight,
        Icon::CheckCircle,
        Icon::ChevronDown,
        Icon::HelpCircle,
        Icon::Menu,
        Icon::Close,
        Icon::Scale,
        Icon::Search,
        Icon::FileText,
    ];

    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Icon::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
            Icon::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Icon::MessageSquare => &[
                "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            ],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::CheckCircle => &[
                "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0",
                "m9 12 2 2 4-4",
            ],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::HelpCircle => &[
                "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0",
                "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3",
                "M12 17h.01",
            ],
            Icon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Scale => &[
                "m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z",
                "m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z",
                "M7 21h10",
                "M12 3v18",
                "M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2",
            ],
            Icon::Search => &[
                "M19 11a8 8 0 1 1-16 0a8 8 0 1 1 16 0",
                "m21 21-4.3-4.3",
            ],
            Icon::FileText => &[
                "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
                "M14 2v4a2 2 0 0 0 2 2h4",
                "M10 9H8",
                "M16 13H8",
                "M16 17H8",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconSvgProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconSvg)]
pub fn icon_svg(props: &IconSvgProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_geometry() {
        for icon in Icon::ALL {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{:?} has no paths", icon);
            for d in paths {
                assert!(
                    d.starts_with('M') || d.starts_with('m'),
                    "{:?} path does not start with a move command: {}",
                    icon,
                    d
                );
            }
        }
    }

    #[test]
    fn test_circle_icons_share_outline() {
        assert_eq!(Icon::CheckCircle.paths()[0], Icon::HelpCircle.paths()[0]);
    }
}
