use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod components {
    pub mod accordion;
    pub mod cards;
    pub mod icons;
    pub mod nav;
    pub mod scroll;
}
mod pages {
    pub mod landing;
}

use components::nav::ScrollAwareNav;
use pages::landing::Landing;


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            // Single page site, unknown paths still get the landing page
            info!("Unknown path, rendering Landing page");
            html! { <Landing /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollAwareNav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Lexora landing page");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_home() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn test_unknown_path_falls_back() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }

    #[test]
    fn test_home_route_path() {
        assert_eq!(Route::Home.to_path(), "/");
    }
}
