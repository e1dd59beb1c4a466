use payloads::auth::{AuthField, AuthForm, AuthMode, AuthSession};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Modal;

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub on_close: Callback<()>,
    /// Emitted with the session once the form validates.
    pub on_success: Callback<AuthSession>,
}

/// Login / sign up dialog. Validation is local only; a valid form counts as
/// signed in. The form state lives as long as the modal is mounted, so
/// closing it discards whatever was typed.
#[function_component]
pub fn AuthModal(props: &AuthModalProps) -> Html {
    let form = use_state(AuthForm::default);

    let set_field = |field: AuthField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            match field {
                AuthField::Email => next.email = value,
                AuthField::Password => next.password = value,
                AuthField::ConfirmPassword => next.confirm_password = value,
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let session = next.submit();
            form.set(next);
            if let Some(session) = session {
                on_success.emit(session);
            }
        })
    };

    let on_toggle_mode = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.toggle_mode();
            form.set(next);
        })
    };

    let is_login = form.mode == AuthMode::Login;
    let field_error = |field: AuthField| {
        form.error(field).map(|error| {
            html! {
                <p class="text-xs text-red-500 mt-1">{error.to_string()}</p>
            }
        })
    };
    let input_class = |field: AuthField| {
        classes!(
            "mt-1", "block", "w-full", "px-3", "py-2", "bg-white", "border",
            "rounded-md", "shadow-sm", "focus:outline-none",
            "focus:ring-gray-500", "focus:border-gray-500", "sm:text-sm",
            if form.error(field).is_some() {
                "border-red-500"
            } else {
                "border-gray-300"
            }
        )
    };

    html! {
        <Modal on_close={props.on_close.clone()}>
            <div class="text-center mb-6">
                <h2 class="text-2xl font-bold text-gray-800">
                    {if is_login { "लॉग इन करें" } else { "साइन अप करें" }}
                </h2>
                <p class="text-gray-500 mt-2">
                    {"जारी रखने के लिए अपने खाते तक पहुंचें।"}
                </p>
            </div>

            <form onsubmit={on_submit} class="space-y-4" novalidate=true>
                <div>
                    <label for="email"
                        class="block text-sm font-medium text-gray-700">
                        {"ईमेल"}
                    </label>
                    <input
                        type="email"
                        id="email"
                        value={form.email.clone()}
                        oninput={set_field(AuthField::Email)}
                        class={input_class(AuthField::Email)}
                        placeholder="you@example.com"
                    />
                    {field_error(AuthField::Email)}
                </div>
                <div>
                    <div class="flex justify-between items-center">
                        <label for="password"
                            class="block text-sm font-medium text-gray-700">
                            {"पासवर्ड"}
                        </label>
                        if is_login {
                            <span class="text-sm text-indigo-600 \
                                         hover:text-indigo-500 cursor-pointer">
                                {"पासवर्ड भूल गए?"}
                            </span>
                        }
                    </div>
                    <input
                        type="password"
                        id="password"
                        value={form.password.clone()}
                        oninput={set_field(AuthField::Password)}
                        class={input_class(AuthField::Password)}
                        placeholder="••••••••"
                    />
                    {field_error(AuthField::Password)}
                </div>
                if !is_login {
                    <div>
                        <label for="confirm-password"
                            class="block text-sm font-medium text-gray-700">
                            {"पासवर्ड की पुष्टि करें"}
                        </label>
                        <input
                            type="password"
                            id="confirm-password"
                            value={form.confirm_password.clone()}
                            oninput={set_field(AuthField::ConfirmPassword)}
                            class={input_class(AuthField::ConfirmPassword)}
                            placeholder="••••••••"
                        />
                        {field_error(AuthField::ConfirmPassword)}
                    </div>
                }
                <button
                    type="submit"
                    class="w-full bg-gray-800 text-white font-semibold py-2 \
                           px-4 rounded-md hover:bg-gray-700 transition-colors"
                >
                    {if is_login { "लॉग इन करें" } else { "खाता बनाएं" }}
                </button>
            </form>

            <div class="relative my-6">
                <div class="absolute inset-0 flex items-center">
                    <div class="w-full border-t border-gray-300" />
                </div>
                <div class="relative flex justify-center text-sm">
                    <span class="px-2 bg-white text-gray-500">
                        {"या इसके साथ जारी रखें"}
                    </span>
                </div>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                {for ["Google", "GitHub"].into_iter().map(|provider| html! {
                    <button
                        type="button"
                        class="w-full inline-flex justify-center py-2 px-4 \
                               border border-gray-300 rounded-md shadow-sm \
                               bg-white text-sm font-medium text-gray-500 \
                               hover:bg-gray-50"
                    >
                        {provider}
                    </button>
                })}
            </div>

            <p class="text-center mt-6 text-sm text-gray-600">
                {if is_login {
                    "अभी तक कोई खाता नहीं है? "
                } else {
                    "पहले से एक खाता मौजूद है? "
                }}
                <button
                    type="button"
                    onclick={on_toggle_mode}
                    class="font-medium text-indigo-600 hover:text-indigo-500"
                >
                    {if is_login { "साइन अप करें" } else { "लॉग इन करें" }}
                </button>
            </p>
        </Modal>
    }
}
