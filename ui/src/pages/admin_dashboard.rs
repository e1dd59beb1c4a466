use std::rc::Rc;

use payloads::analytics::{
    BookingAnalytics, monthly_revenue, revenue_history, status_distribution,
};
use payloads::currency::format_inr;
use payloads::{
    Booking, BookingStatus, Catalog, Commission, CommissionStatus,
    OtaIntegration, SubscriptionPlan,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;

use crate::components::{ChartPoint, LineChart, PieChart, RequireAuth};
use crate::contexts::use_catalog;

/// Month the current bookings belong to, appended after the revenue history.
const CURRENT_MONTH: &str = "Aug";
const REVENUE_COLOR: &str = "#4f46e5";
const STATUS_COLORS: [&str; 3] = ["#22c55e", "#facc15", "#ef4444"];

const CARD: &str = "bg-white rounded-lg shadow-md p-6";
const CARD_TITLE: &str = "text-xl font-semibold text-gray-800 mb-4";
const TH: &str = "px-4 py-3 text-left text-xs font-medium text-gray-500 \
    uppercase tracking-wider";
const TD: &str = "px-4 py-3 whitespace-nowrap text-sm text-gray-700";

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Overview,
    Analytics,
}

#[function_component]
pub fn AdminDashboardPage() -> Html {
    html! {
        <RequireAuth>
            <AdminDashboard />
        </RequireAuth>
    }
}

#[function_component]
fn AdminDashboard() -> Html {
    let tab = use_state(|| Tab::Overview);
    let catalog = use_catalog();

    let tab_button = |target: Tab, label: &'static str| {
        let tab = tab.clone();
        let active = *tab == target;
        html! {
            <button
                onclick={Callback::from(move |_: MouseEvent| tab.set(target))}
                class={classes!(
                    "px-4", "py-2", "text-sm", "font-medium", "border-b-2",
                    "transition-colors",
                    if active {
                        "border-gray-800 text-gray-900"
                    } else {
                        "border-transparent text-gray-500 hover:text-gray-700"
                    }
                )}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">
                    {"व्यवस्थापक डैशबोर्ड"}
                </h1>
                <p class="text-gray-500 mt-1">
                    {"अपने होटल व्यवसाय का अवलोकन और प्रबंधन करें।"}
                </p>
            </div>
            <div class="flex gap-2 border-b border-gray-200">
                {tab_button(Tab::Overview, "अवलोकन")}
                {tab_button(Tab::Analytics, "एनालिटिक्स")}
            </div>
            {match *tab {
                Tab::Overview => html! { <Overview catalog={catalog} /> },
                Tab::Analytics => html! { <Analytics catalog={catalog} /> },
            }}
        </div>
    }
}

#[derive(Properties)]
struct CatalogProps {
    catalog: Rc<dyn Catalog>,
}

impl PartialEq for CatalogProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

#[function_component]
fn Overview(props: &CatalogProps) -> Html {
    let catalog = &props.catalog;

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 space-y-6">
                <div class={CARD}>
                    <h2 class={CARD_TITLE}>{"नवीनतम बुकिंग"}</h2>
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class={TH}>{"Booking ID"}</th>
                                    <th class={TH}>{"ग्राहक"}</th>
                                    <th class={TH}>{"होटल"}</th>
                                    <th class={TH}>{"दिनांक"}</th>
                                    <th class={TH}>{"राशि"}</th>
                                    <th class={TH}>{"स्थिति"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                {for catalog.bookings().iter().map(booking_row)}
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class={CARD}>
                    <h2 class={CARD_TITLE}>{"कमीशन अवलोकन"}</h2>
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class={TH}>{"होटल"}</th>
                                    <th class={TH}>{"बुकिंग"}</th>
                                    <th class={TH}>{"कमीशन राशि"}</th>
                                    <th class={TH}>{"स्थिति"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                {for catalog
                                    .commissions()
                                    .iter()
                                    .map(commission_row)}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            <div class="space-y-6">
                {for catalog.popular_plans().into_iter().map(plan_card)}
                <div class={CARD}>
                    <h2 class={CARD_TITLE}>{"OTA एकीकरण"}</h2>
                    <ul class="space-y-4">
                        {for catalog.ota_integrations().iter().map(ota_row)}
                    </ul>
                </div>
            </div>
        </div>
    }
}

fn booking_row(booking: &Booking) -> Html {
    html! {
        <tr key={booking.id.0.clone()}>
            <td class={TD}>{&booking.id.0}</td>
            <td class={TD}>{&booking.customer}</td>
            <td class={TD}>{&booking.hotel}</td>
            <td class={TD}>{booking.date.to_string()}</td>
            <td class={TD}>{format_inr(booking.amount)}</td>
            <td class={TD}>
                <BookingStatusBadge status={booking.status} />
            </td>
        </tr>
    }
}

fn commission_row(commission: &Commission) -> Html {
    html! {
        <tr key={commission.hotel.clone()}>
            <td class={TD}>{&commission.hotel}</td>
            <td class={TD}>{commission.bookings}</td>
            <td class={TD}>
                {format!(
                    "{} ({}%)",
                    format_inr(commission.commission_amount),
                    commission.commission_percentage
                )}
            </td>
            <td class={TD}>
                <CommissionStatusChip status={commission.status} />
            </td>
        </tr>
    }
}

fn plan_card(plan: &SubscriptionPlan) -> Html {
    html! {
        <div class={CARD} key={plan.name.clone()}>
            <h2 class={CARD_TITLE}>{"सदस्यता योजना"}</h2>
            <p class="text-gray-600">
                {"आपकी वर्तमान योजना: "}
                <span class="font-semibold text-gray-900">{&plan.name}</span>
            </p>
            <p class="text-3xl font-bold text-gray-900 my-4">
                {format_inr(plan.price)}
                <span class="text-base font-normal text-gray-500">
                    {"/माह"}
                </span>
            </p>
            <ul class="space-y-1 text-sm text-gray-600 mb-4">
                {for plan.features.iter().map(|feature| html! {
                    <li>{"✓ "}{feature}</li>
                })}
            </ul>
            <button class="w-full bg-gray-800 text-white font-semibold py-2 \
                           px-4 rounded-md hover:bg-gray-700 \
                           transition-colors">
                {"योजना अपग्रेड करें"}
            </button>
        </div>
    }
}

fn ota_row(ota: &OtaIntegration) -> Html {
    html! {
        <li
            class="flex items-center justify-between"
            key={ota.name.to_string()}
        >
            <div>
                <p class="font-medium text-gray-800">{ota.name.to_string()}</p>
                <p class="text-xs text-gray-500">{&ota.description}</p>
            </div>
            if ota.connected {
                <span class="text-sm font-medium text-green-600">
                    {"जुड़ा हुआ"}
                </span>
            } else {
                <button class="text-sm font-medium px-3 py-1 rounded-md \
                               border border-gray-300 hover:bg-gray-50">
                    {"कनेक्ट"}
                </button>
            }
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct BookingStatusProps {
    status: BookingStatus,
}

#[function_component]
fn BookingStatusBadge(props: &BookingStatusProps) -> Html {
    let (icon, color) = match props.status {
        BookingStatus::Confirmed => ("✓", "text-green-600"),
        BookingStatus::Pending => ("⏱", "text-yellow-600"),
        BookingStatus::Cancelled => ("✕", "text-red-600"),
    };
    html! {
        <span class={classes!("inline-flex", "items-center", "gap-1", color)}>
            <span aria-hidden="true">{icon}</span>
            {props.status.to_string()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct CommissionStatusProps {
    status: CommissionStatus,
}

#[function_component]
fn CommissionStatusChip(props: &CommissionStatusProps) -> Html {
    let color = match props.status {
        CommissionStatus::Paid => "bg-green-100 text-green-800",
        CommissionStatus::Pending => "bg-yellow-100 text-yellow-800",
    };
    html! {
        <span class={classes!(
            "px-2", "py-1", "rounded-full", "text-xs", "font-semibold", color
        )}>
            {props.status.to_string()}
        </span>
    }
}

#[function_component]
fn Analytics(props: &CatalogProps) -> Html {
    let bookings = props.catalog.bookings();
    let analytics = BookingAnalytics::compute(bookings);

    let revenue_points: Vec<ChartPoint> =
        monthly_revenue(revenue_history(), CURRENT_MONTH, bookings)
            .into_iter()
            .map(|month| ChartPoint {
                label: month.month.into(),
                value: to_chart_value(month.revenue),
            })
            .collect();
    let status_points: Vec<ChartPoint> = status_distribution(bookings)
        .into_iter()
        .map(|entry| ChartPoint {
            label: entry.status.name().into(),
            value: entry.count as f64,
        })
        .collect();

    let format_revenue = Callback::from(|value: f64| {
        format_inr(Decimal::try_from(value).unwrap_or_default())
    });

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <KpiCard
                    title="कुल राजस्व"
                    value={format_inr(analytics.total_revenue)}
                />
                <KpiCard
                    title="कुल बुकिंग"
                    value={analytics.total_bookings.to_string()}
                />
                <KpiCard
                    title="औसत बुकिंग मूल्य"
                    value={average_label(analytics.avg_booking_value)}
                />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class={CARD}>
                    <h2 class={CARD_TITLE}>{"मासिक राजस्व अवलोकन"}</h2>
                    <LineChart
                        points={revenue_points}
                        series="Revenue"
                        color={REVENUE_COLOR}
                        format_value={format_revenue}
                    />
                </div>
                <div class={CARD}>
                    <h2 class={CARD_TITLE}>{"बुकिंग स्थिति वितरण"}</h2>
                    <PieChart
                        points={status_points}
                        colors={STATUS_COLORS.map(AttrValue::from).to_vec()}
                    />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct KpiCardProps {
    title: AttrValue,
    value: AttrValue,
}

#[function_component]
fn KpiCard(props: &KpiCardProps) -> Html {
    html! {
        <div class={CARD}>
            <p class="text-sm font-medium text-gray-500">{&props.title}</p>
            <p class="text-3xl font-bold text-gray-900 mt-2">
                {&props.value}
            </p>
        </div>
    }
}

fn average_label(average: Option<Decimal>) -> String {
    average.map(format_inr).unwrap_or_else(|| "—".into())
}

fn to_chart_value(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}
