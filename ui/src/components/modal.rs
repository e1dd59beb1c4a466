use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the close
/// button emits `on_close`; the parent decides whether to unmount it.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub children: Html,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            // only clicks on the backdrop itself, not bubbled from the dialog
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex \
                   items-center justify-center p-4"
        >
            <div class="relative bg-white rounded-lg shadow-xl w-full \
                        max-w-md p-8">
                <button
                    onclick={props.on_close.reform(|_| ())}
                    class="absolute top-4 right-4 text-gray-400 \
                           hover:text-gray-600"
                    aria-label="Close"
                >
                    <span class="text-2xl leading-none">{"×"}</span>
                </button>
                {props.children.clone()}
            </div>
        </div>
    }
}
