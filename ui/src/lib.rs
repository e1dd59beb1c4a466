use payloads::{ClientError, GenAiClient};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
mod theme;

use components::ToastContainer;
use components::layout::MainLayout;
use contexts::{CatalogProvider, ToastProvider};
use pages::{AdminDashboardPage, HomePage, NotFoundPage};

pub use logs::init_logging;
pub use state::State;

/// Client for the brand kit model, configured at build time.
///
/// `GEMINI_API_KEY` is required; `GEMINI_MODEL` and `GEMINI_BASE_URL`
/// override the defaults.
pub fn get_genai_client() -> Result<GenAiClient, ClientError> {
    let api_key = option_env!("GEMINI_API_KEY").unwrap_or_default();
    let mut builder = GenAiClient::builder().api_key(api_key);
    if let Some(model) = option_env!("GEMINI_MODEL") {
        builder = builder.model(model);
    }
    if let Some(base_url) = option_env!("GEMINI_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    builder.build()
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <CatalogProvider>
                    <MainLayout>
                        <Switch<Route> render={switch} />
                    </MainLayout>
                    <ToastContainer />
                </CatalogProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Dashboard => html! { <AdminDashboardPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
