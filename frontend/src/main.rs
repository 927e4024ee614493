use yew::prelude::*;
use yew_router::prelude::*;

mod styles;
mod config;
mod sidebar;
mod home;
mod results;
pub mod render_results;

use crate::{
    sidebar::Sidebar,
    home::Home,
    results::Results,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/results")] Results,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex min-h-screen font-sans">
                <Sidebar />
                <main class={styles::MAIN_PANEL}>
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Results => html! { <Results /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests;
