use yew::prelude::*;

use crate::Route;
use crate::hooks::use_push_route;

#[function_component]
pub fn NotFoundPage() -> Html {
    let push_route = use_push_route();
    let on_home = Callback::from(move |_: MouseEvent| {
        push_route.emit(Route::Home)
    });

    html! {
        <div class="text-center py-24 space-y-4">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="text-gray-600">{"पृष्ठ नहीं मिला"}</p>
            <button
                onclick={on_home}
                class="text-indigo-600 hover:text-indigo-500 font-medium"
            >
                {"होमपेज"}
            </button>
        </div>
    }
}
