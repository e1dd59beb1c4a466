use payloads::Hotel;
use payloads::currency::format_inr;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub hotel: Hotel,
}

#[function_component]
pub fn HotelCard(props: &Props) -> Html {
    let hotel = &props.hotel;
    html! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden \
                    hover:shadow-xl transition-shadow">
            <img
                src={hotel.image_url.clone()}
                alt={hotel.name.clone()}
                class="w-full h-48 object-cover"
            />
            <div class="p-4 space-y-2">
                <h3 class="text-lg font-semibold text-gray-800">
                    {&hotel.name}
                </h3>
                <p class="text-sm text-gray-500">{&hotel.location}</p>
                <div class="flex justify-between items-center">
                    <p class="text-lg font-bold text-gray-900">
                        {format_inr(hotel.price)}
                        <span class="text-sm font-normal text-gray-500">
                            {"/रात"}
                        </span>
                    </p>
                    <p class="text-sm text-gray-600">
                        <span class="text-yellow-500">{"★"}</span>
                        {format!(" {:.1}", hotel.rating)}
                        <span class="text-gray-400">
                            {format!(" ({} समीक्षाएं)", hotel.reviews)}
                        </span>
                    </p>
                </div>
            </div>
        </div>
    }
}
