use payloads::brand_kit::{LogoError, LogoImage, MAX_LOGO_SIZE};
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, FileReader, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Called once the chosen file is read, or rejected.
    pub on_upload: Callback<Result<LogoImage, LogoError>>,
    /// Data URL of the current logo, shown as a preview.
    #[prop_or_default]
    pub preview: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

/// File picker for the brand kit logo. Reads the file in the browser and
/// hands over the bytes with the type the browser reports.
#[function_component]
pub fn LogoUpload(props: &Props) -> Html {
    let on_file_select = {
        let on_upload = props.on_upload.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0))
            else {
                return;
            };
            // same file picked again should still fire a change
            input.set_value("");

            let size = file.size() as usize;
            if size > MAX_LOGO_SIZE {
                on_upload.emit(Err(LogoError::TooLarge { size }));
                return;
            }
            if !file.type_().starts_with("image/") {
                on_upload.emit(Err(LogoError::NotAnImage(file.type_())));
                return;
            }
            read_file(file, on_upload.clone());
        })
    };

    let label = if props.preview.is_some() {
        "Change Logo"
    } else {
        "अपना लोगो अपलोड करें"
    };

    html! {
        <div class="space-y-3">
            <label class={classes!(
                "flex", "items-center", "justify-center", "w-full", "px-4",
                "py-3", "border-2", "border-dashed", "border-gray-300",
                "rounded-md", "text-sm", "text-gray-600",
                "hover:border-gray-400", "transition-colors",
                if props.disabled {
                    "opacity-50 cursor-not-allowed"
                } else {
                    "cursor-pointer"
                },
            )}>
                <span>{label}</span>
                <input
                    type="file"
                    accept="image/*"
                    class="sr-only"
                    disabled={props.disabled}
                    onchange={on_file_select}
                />
            </label>
            if let Some(preview) = &props.preview {
                <div class="flex justify-center p-2 bg-gray-100 rounded-md">
                    <img
                        src={preview.clone()}
                        alt="Logo preview"
                        class="max-h-24 object-contain"
                    />
                </div>
            }
        </div>
    }
}

fn read_file(file: File, on_upload: Callback<Result<LogoImage, LogoError>>) {
    let Ok(reader) = FileReader::new() else {
        tracing::error!("FileReader is unavailable");
        return;
    };
    let mime_type = file.type_();

    let reader_clone = reader.clone();
    let onload = Closure::once(move |_: Event| {
        let Ok(result) = reader_clone.result() else {
            tracing::error!("failed to read logo file");
            return;
        };
        let bytes = js_sys::Uint8Array::new(&result).to_vec();
        on_upload.emit(LogoImage::new(bytes, mime_type));
    });

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    if let Err(error) = reader.read_as_array_buffer(&file) {
        tracing::error!(?error, "failed to start reading logo file");
        return;
    }
    onload.forget();
}
