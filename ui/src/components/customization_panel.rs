use payloads::CustomizationField;
use payloads::CustomizationUpdate;
use payloads::brand_kit::{LogoError, LogoImage, PRESET_COLORS};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::LogoUpload;
use crate::hooks::{BrandKitHandle, use_brand_kit};

type UploadResult = Result<LogoImage, LogoError>;

const INPUT_CLASSES: &str = "mt-1 block w-full px-3 py-2 border \
    border-gray-300 rounded-md shadow-sm focus:outline-none \
    focus:ring-gray-500 focus:border-gray-500 sm:text-sm";
const SECTION_TITLE: &str = "text-lg font-semibold text-gray-800 mb-4";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_close: Callback<()>,
}

/// Right-hand drawer for editing the branding. Edits apply immediately.
#[function_component]
pub fn CustomizationPanel(props: &Props) -> Html {
    let backdrop_ref = use_node_ref();
    let brand_kit = use_brand_kit();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop) = backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>() == Some(&backdrop)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 z-50 bg-black bg-opacity-50"
        >
            <aside class="absolute right-0 top-0 bottom-0 w-full max-w-sm \
                          bg-white shadow-xl flex flex-col">
                <div class="flex items-center justify-between p-4 border-b \
                            border-gray-200">
                    <h2 class="text-xl font-bold text-gray-800">
                        {"कस्टमाइज़ करें"}
                    </h2>
                    <button
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        class="text-gray-400 hover:text-gray-600"
                        aria-label="Close"
                    >
                        <span class="text-2xl leading-none">{"×"}</span>
                    </button>
                </div>
                <div class="flex-grow overflow-y-auto p-6 space-y-8">
                    <BrandKitSection brand_kit={brand_kit.clone()} />
                    <ManualBrandingSection brand_kit={brand_kit} />
                    <HeroSection />
                </div>
            </aside>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BrandKitProps {
    brand_kit: BrandKitHandle,
}

#[function_component]
fn BrandKitSection(props: &BrandKitProps) -> Html {
    let primary_color = use_selector(|state: &State| {
        state.customization.primary_color.clone()
    });
    let brand_kit = &props.brand_kit;
    let session = brand_kit.session();

    let on_upload = {
        let brand_kit = brand_kit.clone();
        Callback::from(move |logo: UploadResult| brand_kit.upload(logo))
    };
    let on_generate = {
        let brand_kit = brand_kit.clone();
        Callback::from(move |_: MouseEvent| brand_kit.generate())
    };
    let on_dismiss_error = {
        let brand_kit = brand_kit.clone();
        Callback::from(move |_: MouseEvent| brand_kit.dismiss_error())
    };

    let preview = session.logo().map(|logo| AttrValue::from(logo.data_url()));
    let busy = session.is_busy();

    html! {
        <section>
            <h3 class={SECTION_TITLE}>{"AI ब्रांड किट जेनरेटर"}</h3>
            <div class="space-y-4">
                <LogoUpload {on_upload} {preview} disabled={busy} />
                <button
                    onclick={on_generate}
                    disabled={!session.can_generate()}
                    class="w-full bg-gray-800 text-white font-semibold py-2 \
                           px-4 rounded-md hover:bg-gray-700 \
                           transition-colors disabled:opacity-50 \
                           disabled:cursor-not-allowed"
                >
                    {if busy {
                        "प्रोसेस हो रहा है..."
                    } else {
                        "AI से ब्रांड किट बनाएं"
                    }}
                </button>
                if let Some(error) = session.error() {
                    <div class="flex items-start justify-between gap-2 \
                                text-sm text-red-600">
                        <p>{error}</p>
                        <button
                            onclick={on_dismiss_error}
                            class="text-red-400 hover:text-red-600"
                            aria-label="Dismiss"
                        >
                            {"×"}
                        </button>
                    </div>
                }
                if !session.palette().is_empty() {
                    <div>
                        <p class="text-sm font-medium text-gray-700 mb-2">
                            {"AI द्वारा उत्पन्न पैलेट"}
                        </p>
                        <div class="flex flex-wrap gap-2">
                            {for session.palette().iter().map(|color| {
                                let brand_kit = brand_kit.clone();
                                let chosen = color.clone();
                                html! {
                                    <Swatch
                                        color={color.clone()}
                                        selected={
                                            same_color(color, &primary_color)
                                        }
                                        on_select={Callback::from(
                                            move |()| brand_kit
                                                .select_generated(&chosen)
                                        )}
                                    />
                                }
                            })}
                        </div>
                    </div>
                }
            </div>
        </section>
    }
}

#[function_component]
fn ManualBrandingSection(props: &BrandKitProps) -> Html {
    let customization =
        use_selector(|state: &State| state.customization.clone());

    html! {
        <section>
            <h3 class={SECTION_TITLE}>{"मैनुअल ब्रांडिंग"}</h3>
            <div class="space-y-4">
                <TextField
                    label="ब्रांड नाम"
                    field={CustomizationField::BrandName}
                    value={customization.brand_name.clone()}
                />
                <TextField
                    label="ब्रांड नाम Suffix"
                    field={CustomizationField::BrandNameSuffix}
                    value={customization.brand_name_suffix.clone()}
                />
                <div>
                    <p class="block text-sm font-medium text-gray-700 mb-2">
                        {"प्राथमिक रंग"}
                    </p>
                    <div class="flex flex-wrap gap-2">
                        {for PRESET_COLORS.into_iter().map(|color| {
                            let brand_kit = props.brand_kit.clone();
                            html! {
                                <Swatch
                                    color={color}
                                    selected={same_color(
                                        color,
                                        &customization.primary_color
                                    )}
                                    on_select={Callback::from(move |()| {
                                        brand_kit.select_manual(color)
                                    })}
                                />
                            }
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn HeroSection() -> Html {
    let (state, dispatch) = use_store::<State>();

    let on_subtitle_input = dispatch.reduce_mut_callback_with(
        |state, e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            state.customize(CustomizationUpdate::field(
                CustomizationField::HeroSubtitle,
                textarea.value(),
            ));
        },
    );

    html! {
        <section>
            <h3 class={SECTION_TITLE}>{"हीरो सेक्शन"}</h3>
            <div class="space-y-4">
                <TextField
                    label="हीरो शीर्षक"
                    field={CustomizationField::HeroTitle}
                    value={state.customization.hero_title.clone()}
                />
                <div>
                    <label class="block text-sm font-medium text-gray-700">
                        {"हीरो उपशीर्षक"}
                    </label>
                    <textarea
                        rows="3"
                        value={state.customization.hero_subtitle.clone()}
                        oninput={on_subtitle_input}
                        class={INPUT_CLASSES}
                    />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    label: AttrValue,
    field: CustomizationField,
    value: AttrValue,
}

#[function_component]
fn TextField(props: &TextFieldProps) -> Html {
    let dispatch = use_dispatch::<State>();
    let field = props.field;
    let oninput = dispatch.reduce_mut_callback_with(
        move |state, e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.customize(CustomizationUpdate::field(field, input.value()));
        },
    );

    html! {
        <div>
            <label class="block text-sm font-medium text-gray-700">
                {&props.label}
            </label>
            <input
                type="text"
                value={props.value.clone()}
                {oninput}
                class={INPUT_CLASSES}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SwatchProps {
    color: AttrValue,
    selected: bool,
    on_select: Callback<()>,
}

#[function_component]
fn Swatch(props: &SwatchProps) -> Html {
    let style = format!("background-color: {}", props.color);
    html! {
        <button
            type="button"
            title={props.color.clone()}
            aria-label={props.color.clone()}
            onclick={props.on_select.reform(|_: MouseEvent| ())}
            {style}
            class={classes!(
                "w-8", "h-8", "rounded-full", "border", "border-gray-200",
                props.selected.then_some(
                    "ring-2 ring-offset-2 ring-gray-800"
                ),
            )}
        />
    }
}

fn same_color(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
