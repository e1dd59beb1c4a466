use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::contexts::use_toast;
use crate::hooks::use_push_route;
use crate::{Route, State};

const HEADER_BUTTON: &str = "flex items-center gap-2 px-3 py-2 rounded-md \
    text-sm font-medium hover:bg-black/10 transition-colors";

/// Where the header's navigation button leads. Signed-out visitors get
/// none, even on the dashboard URL.
fn nav_target(route: Option<&Route>, signed_in: bool) -> Option<Route> {
    match route {
        _ if !signed_in => None,
        Some(Route::Dashboard) => Some(Route::Home),
        _ => Some(Route::Dashboard),
    }
}

/// Sticky bar in the brand color. Shows the brand name, a link between the
/// home page and the dashboard, the customization toggle, and sign in/out.
#[function_component]
pub fn Header() -> Html {
    let (state, dispatch) = use_store::<State>();
    let route = use_route::<Route>();
    let push_route = use_push_route();
    let toasts = use_toast();

    let on_brand_click = {
        let push_route = push_route.clone();
        Callback::from(move |_: MouseEvent| push_route.emit(Route::Home))
    };

    let on_open_panel: Callback<MouseEvent> =
        dispatch.reduce_mut_callback(|state| state.panel_open = true);
    let on_open_auth: Callback<MouseEvent> =
        dispatch.reduce_mut_callback(|state| state.auth_modal_open = true);

    let on_sign_out = {
        let dispatch = dispatch.clone();
        let push_route = push_route.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|state| state.sign_out());
            toasts.success("आप लॉग आउट हो गए हैं।");
            push_route.emit(Route::Home);
        })
    };

    let nav_button =
        nav_target(route.as_ref(), state.is_signed_in()).map(|target| {
            let (icon, label) = match target {
                Route::Home => ("⌂", "होमपेज"),
                _ => ("▦", "डैशबोर्ड"),
            };
            let push_route = push_route.clone();
            html! {
                <button
                    onclick={Callback::from(move |_: MouseEvent| {
                        push_route.emit(target.clone())
                    })}
                    class={HEADER_BUTTON}
                >
                    <span aria-hidden="true">{icon}</span>
                    <span class="hidden sm:inline">{label}</span>
                </button>
            }
        });

    let customization = &state.customization;

    html! {
        <header class="sticky top-0 z-40 shadow-md \
                       bg-[var(--primary-color)] \
                       text-[var(--primary-foreground)]">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <button
                        onclick={on_brand_click}
                        class="text-2xl font-bold tracking-tight"
                    >
                        {&customization.brand_name}
                        <span class="font-light">
                            {&customization.brand_name_suffix}
                        </span>
                    </button>
                    <nav class="flex items-center gap-2">
                        {nav_button}
                        <button
                            onclick={on_open_panel}
                            class={HEADER_BUTTON}
                            aria-label="Settings"
                        >
                            <span aria-hidden="true">{"⚙"}</span>
                        </button>
                        if state.is_signed_in() {
                            <button
                                onclick={on_sign_out}
                                class={HEADER_BUTTON}
                                aria-label="Sign out"
                                title="लॉग आउट"
                            >
                                <span aria-hidden="true">{"👤"}</span>
                            </button>
                        } else {
                            <button
                                onclick={on_open_auth}
                                class={classes!(
                                    HEADER_BUTTON,
                                    "border",
                                    "border-current"
                                )}
                            >
                                {"लॉग इन करें"}
                            </button>
                        }
                    </nav>
                </div>
            </div>
        </header>
    }
}
