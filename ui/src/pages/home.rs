use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::HotelCard;
use crate::contexts::use_catalog;

#[function_component]
pub fn HomePage() -> Html {
    let customization =
        use_selector(|state: &State| state.customization.clone());
    let catalog = use_catalog();

    html! {
        <>
            <section class="bg-[var(--primary-color)] \
                            text-[var(--primary-foreground)]">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 \
                            text-center">
                    <h1 class="text-4xl md:text-6xl font-extrabold \
                               tracking-tight">
                        {&customization.hero_title}
                    </h1>
                    <p class="mt-6 max-w-2xl mx-auto text-lg md:text-xl \
                              opacity-90">
                        {&customization.hero_subtitle}
                    </p>
                    // decorative
                    <div class="mt-10 max-w-xl mx-auto">
                        <input
                            type="search"
                            placeholder="एक गंतव्य या होटल खोजें..."
                            class="w-full px-5 py-3 rounded-full text-gray-900 \
                                   shadow-lg focus:outline-none"
                        />
                    </div>
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <h2 class="text-3xl font-bold text-gray-800 mb-8 text-center">
                    {"विशेष रुप से प्रदर्शित होटल"}
                </h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 \
                            gap-8">
                    {for catalog.hotels().iter().map(|hotel| html! {
                        <HotelCard key={hotel.id.0} hotel={hotel.clone()} />
                    })}
                </div>
            </section>
        </>
    }
}
