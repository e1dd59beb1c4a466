use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

/// Renders its children only for a signed-in user. Anyone else gets a prompt
/// that opens the login modal.
///
/// Children and their hooks are not run at all while signed out.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let (state, dispatch) = use_store::<State>();

    if !state.is_signed_in() {
        let on_sign_in: Callback<MouseEvent> =
            dispatch.reduce_mut_callback(|state| state.auth_modal_open = true);
        return html! {
            <div class="max-w-md mx-auto my-16 text-center space-y-4">
                <h2 class="text-2xl font-bold text-gray-800">
                    {"लॉग इन आवश्यक है"}
                </h2>
                <p class="text-gray-600">
                    {"डैशबोर्ड देखने के लिए कृपया लॉग इन करें।"}
                </p>
                <button
                    onclick={on_sign_in}
                    class="bg-gray-800 text-white font-semibold py-2 px-6 \
                           rounded-md hover:bg-gray-700 transition-colors"
                >
                    {"लॉग इन करें"}
                </button>
            </div>
        };
    }

    html! {
        <>
            {for props.children.iter()}
        </>
    }
}
