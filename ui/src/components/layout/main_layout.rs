use payloads::auth::AuthSession;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::layout::{Footer, Header};
use crate::components::{AuthModal, CustomizationPanel};
use crate::contexts::use_toast;
use crate::{State, theme::use_brand_theme};

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

/// Page chrome shared by every route, plus the overlays the header opens.
#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    use_brand_theme();
    let (state, dispatch) = use_store::<State>();
    let toasts = use_toast();

    let on_close_panel: Callback<()> =
        dispatch.reduce_mut_callback(|state| state.panel_open = false);
    let on_close_auth: Callback<()> =
        dispatch.reduce_mut_callback(|state| state.auth_modal_open = false);
    let on_signed_in = {
        let dispatch = dispatch.clone();
        Callback::from(move |session: AuthSession| {
            dispatch.reduce_mut(|state| state.sign_in(session));
            toasts.success("सफलतापूर्वक लॉग इन किया गया!");
        })
    };

    html! {
        <div class="min-h-screen flex flex-col bg-gray-50 text-gray-900">
            <Header />
            <main class="flex-grow">
                {for props.children.iter()}
            </main>
            <Footer />
            if state.panel_open {
                <CustomizationPanel on_close={on_close_panel} />
            }
            if state.auth_modal_open {
                <AuthModal
                    on_close={on_close_auth}
                    on_success={on_signed_in}
                />
            }
        </div>
    }
}
