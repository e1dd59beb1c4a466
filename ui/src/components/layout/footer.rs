use jiff::Zoned;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

#[function_component]
pub fn Footer() -> Html {
    let customization =
        use_selector(|state: &State| state.customization.clone());
    let year = Zoned::now().year();

    html! {
        <footer class="bg-gray-800 text-gray-300 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 \
                        text-center text-sm">
                {format!(
                    "© {year} {} {}. सर्वाधिकार सुरक्षित।",
                    customization.brand_name, customization.brand_name_suffix
                )}
            </div>
        </footer>
    }
}
