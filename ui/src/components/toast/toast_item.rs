use crate::contexts::toast::{Toast, use_toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;

    let on_close = {
        let toast_id = toast.id;
        Callback::from(move |_: MouseEvent| toast_handle.remove(toast_id))
    };

    html! {
        <div class={classes!(
            "relative", "p-4", "rounded-lg", "border", "shadow-lg",
            "bg-green-50", "border-green-200", "text-green-700"
        )}>
            <div class="flex items-start space-x-3">
                <span class="flex-shrink-0 text-sm font-medium">{"✓"}</span>
                <p class="flex-1 min-w-0 text-sm font-medium leading-5">
                    {&toast.message}
                </p>
                <button
                    onclick={on_close}
                    class="flex-shrink-0 text-gray-400 hover:text-gray-600 \
                           transition-colors"
                    title="Dismiss"
                >
                    <span class="text-lg leading-none">{"×"}</span>
                </button>
            </div>
        </div>
    }
}
