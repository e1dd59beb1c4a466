//! Read-only reference data behind the home page and the admin dashboard.
//!
//! Views and analytics only see the [`Catalog`] trait, so the static demo
//! data can be swapped for a real store without touching them.

use jiff::civil::date;
use rust_decimal::{Decimal, dec};

use crate::{
    Booking, BookingId, BookingStatus, Commission, CommissionStatus, Hotel,
    HotelId, OtaIntegration, OtaName, SubscriptionPlan,
};

pub trait Catalog {
    fn hotels(&self) -> &[Hotel];
    fn bookings(&self) -> &[Booking];
    fn commissions(&self) -> &[Commission];
    fn subscription_plans(&self) -> &[SubscriptionPlan];
    fn ota_integrations(&self) -> &[OtaIntegration];

    /// Plans flagged as popular, shown as the "current plan" card.
    fn popular_plans(&self) -> Vec<&SubscriptionPlan> {
        self.subscription_plans()
            .iter()
            .filter(|plan| plan.is_popular)
            .collect()
    }
}

/// In-memory catalog. [`StaticCatalog::demo`] holds the prototype data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    pub hotels: Vec<Hotel>,
    pub bookings: Vec<Booking>,
    pub commissions: Vec<Commission>,
    pub subscription_plans: Vec<SubscriptionPlan>,
    pub ota_integrations: Vec<OtaIntegration>,
}

impl Catalog for StaticCatalog {
    fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    fn commissions(&self) -> &[Commission] {
        &self.commissions
    }

    fn subscription_plans(&self) -> &[SubscriptionPlan] {
        &self.subscription_plans
    }

    fn ota_integrations(&self) -> &[OtaIntegration] {
        &self.ota_integrations
    }
}

impl StaticCatalog {
    pub fn demo() -> Self {
        Self {
            hotels: demo_hotels(),
            bookings: demo_bookings(),
            commissions: demo_commissions(),
            subscription_plans: demo_plans(),
            ota_integrations: demo_otas(),
        }
    }
}

fn hotel(
    id: i32,
    name: &str,
    location: &str,
    price: Decimal,
    rating: f32,
    reviews: u32,
) -> Hotel {
    Hotel {
        id: HotelId(id),
        name: name.into(),
        location: location.into(),
        price,
        rating,
        reviews,
        image_url: format!("https://picsum.photos/seed/hotel{id}/400/300"),
    }
}

fn demo_hotels() -> Vec<Hotel> {
    vec![
        hotel(1, "रॉयल पैलेस होटल", "नई दिल्ली", dec!(2999), 4.5, 120),
        hotel(2, "सी व्यू रिज़ॉर्ट", "गोवा", dec!(5499), 4.8, 250),
        hotel(3, "माउंटेन व्यू विला", "मनाली", dec!(4200), 4.6, 180),
        hotel(4, "लेकसाइड पैराडाइज", "उदयपुर", dec!(3800), 4.7, 210),
        hotel(5, "सिटी सेंटर Inn", "मुंबई", dec!(3200), 4.3, 300),
        hotel(6, "हिमालयन रिट्रीट", "शिमला", dec!(4800), 4.9, 150),
    ]
}

fn booking(
    id: &str,
    customer: &str,
    hotel: &str,
    date: jiff::civil::Date,
    amount: Decimal,
    status: BookingStatus,
) -> Booking {
    Booking {
        id: BookingId(id.into()),
        customer: customer.into(),
        hotel: hotel.into(),
        date,
        amount,
        status,
    }
}

fn demo_bookings() -> Vec<Booking> {
    use BookingStatus::*;
    vec![
        booking(
            "#HB123456",
            "राहुल शर्मा",
            "रॉयल पैलेस होटल",
            date(2023, 8, 12),
            dec!(3598),
            Confirmed,
        ),
        booking(
            "#HB123457",
            "प्रिया पाटिल",
            "सी व्यू रिज़ॉर्ट",
            date(2023, 8, 11),
            dec!(5298),
            Confirmed,
        ),
        booking(
            "#HB123458",
            "अमित कुमार",
            "माउंटेन व्यू विला",
            date(2023, 8, 10),
            dec!(7598),
            Pending,
        ),
        booking(
            "#HB123459",
            "नीता मेनन",
            "रॉयल पैलेस होटल",
            date(2023, 8, 9),
            dec!(4198),
            Confirmed,
        ),
        booking(
            "#HB123460",
            "संजय गुप्ता",
            "सी व्यू रिज़ॉर्ट",
            date(2023, 8, 8),
            dec!(6498),
            Cancelled,
        ),
    ]
}

fn demo_commissions() -> Vec<Commission> {
    vec![
        Commission {
            hotel: "रॉयल पैलेस होटल".into(),
            bookings: 24,
            total_amount: dec!(86540),
            commission_percentage: dec!(15),
            commission_amount: dec!(12981),
            status: CommissionStatus::Pending,
        },
        Commission {
            hotel: "सी व्यू रिज़ॉर्ट".into(),
            bookings: 18,
            total_amount: dec!(102650),
            commission_percentage: dec!(12),
            commission_amount: dec!(12318),
            status: CommissionStatus::Paid,
        },
        Commission {
            hotel: "माउंटेन व्यू विला".into(),
            bookings: 8,
            total_amount: dec!(60780),
            commission_percentage: dec!(10),
            commission_amount: dec!(6078),
            status: CommissionStatus::Pending,
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn demo_plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            name: "बेसिक".into(),
            price: dec!(499),
            features: strings(&[
                "10 होटल तक",
                "50 बुकिंग/माह",
                "ईमेल समर्थन",
                "मूल रिपोर्ट",
            ]),
            non_features: strings(&["OTA एकीकरण", "कस्टम डोमेन"]),
            is_popular: false,
        },
        SubscriptionPlan {
            name: "प्रो".into(),
            price: dec!(999),
            features: strings(&[
                "अनलिमिटेड होटल",
                "200 बुकिंग/माह",
                "प्राथमिक समर्थन",
                "उन्नत रिपोर्ट",
                "1 OTA एकीकरण",
                "1 कस्टम डोमेन",
            ]),
            non_features: vec![],
            is_popular: true,
        },
        SubscriptionPlan {
            name: "एंटरप्राइज".into(),
            price: dec!(1999),
            features: strings(&[
                "अनलिमिटेड होटल",
                "अनलिमिटेड बुकिंग",
                "24/7 समर्थन",
                "विस्तृत रिपोर्ट",
                "सभी OTA एकीकरण",
                "एकाधिक डोमेन",
            ]),
            non_features: vec![],
            is_popular: false,
        },
    ]
}

fn demo_otas() -> Vec<OtaIntegration> {
    [
        (OtaName::BookingCom, true),
        (OtaName::Agoda, false),
        (OtaName::Goibibo, false),
        (OtaName::MakeMyTrip, false),
    ]
    .into_iter()
    .map(|(name, connected)| OtaIntegration {
        name,
        description: format!("अपने {name} खाते से कनेक्ट करें"),
        connected,
    })
    .collect()
}
