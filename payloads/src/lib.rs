pub mod analytics;
pub mod api_client;
pub mod auth;
pub mod brand_kit;
pub mod catalog;
pub mod currency;
pub mod requests;
pub mod responses;

pub use api_client::{ClientError, GenAiClient};
pub use catalog::{Catalog, StaticCatalog};

use derive_more::Display;
use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Branding applied across the customer-facing pages.
///
/// Every field is always populated. Changes go through
/// [`CustomizationState::apply`] with a [`CustomizationUpdate`], which only
/// touches the fields it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizationState {
    pub brand_name: String,
    pub brand_name_suffix: String,
    pub primary_color: String,
    pub hero_title: String,
    pub hero_subtitle: String,
}

impl Default for CustomizationState {
    fn default() -> Self {
        Self {
            brand_name: "Sonic".into(),
            brand_name_suffix: "Hotel Pro".into(),
            primary_color: "#3b82f6".into(),
            hero_title: "अपनी अगली आरामदायक छुट्टी पाएं".into(),
            hero_subtitle: "शानदार होटलों, रिज़ॉर्ट्स और बहुत कुछ पर सर्वोत्तम \
                            मूल्य खोजें। सुरक्षित रूप से और आसानी से बुक करें।"
                .into(),
        }
    }
}

impl CustomizationState {
    /// Merge `update` into this state. Fields the update leaves as `None`
    /// keep their current value.
    pub fn apply(&mut self, update: CustomizationUpdate) {
        let CustomizationUpdate {
            brand_name,
            brand_name_suffix,
            primary_color,
            hero_title,
            hero_subtitle,
        } = update;

        if let Some(value) = brand_name {
            self.brand_name = value;
        }
        if let Some(value) = brand_name_suffix {
            self.brand_name_suffix = value;
        }
        if let Some(value) = primary_color {
            self.primary_color = value;
        }
        if let Some(value) = hero_title {
            self.hero_title = value;
        }
        if let Some(value) = hero_subtitle {
            self.hero_subtitle = value;
        }
    }

    pub fn applied(mut self, update: CustomizationUpdate) -> Self {
        self.apply(update);
        self
    }

    pub fn get(&self, field: CustomizationField) -> &str {
        match field {
            CustomizationField::BrandName => &self.brand_name,
            CustomizationField::BrandNameSuffix => &self.brand_name_suffix,
            CustomizationField::PrimaryColor => &self.primary_color,
            CustomizationField::HeroTitle => &self.hero_title,
            CustomizationField::HeroSubtitle => &self.hero_subtitle,
        }
    }

    /// Full display name, e.g. "Sonic Hotel Pro".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand_name, self.brand_name_suffix)
    }
}

/// A partial [`CustomizationState`]. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizationUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,
}

impl CustomizationUpdate {
    /// An update touching a single field.
    pub fn field(field: CustomizationField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            CustomizationField::BrandName => Self {
                brand_name: value,
                ..Default::default()
            },
            CustomizationField::BrandNameSuffix => Self {
                brand_name_suffix: value,
                ..Default::default()
            },
            CustomizationField::PrimaryColor => Self {
                primary_color: value,
                ..Default::default()
            },
            CustomizationField::HeroTitle => Self {
                hero_title: value,
                ..Default::default()
            },
            CustomizationField::HeroSubtitle => Self {
                hero_subtitle: value,
                ..Default::default()
            },
        }
    }

    pub fn primary_color(color: impl Into<String>) -> Self {
        Self::field(CustomizationField::PrimaryColor, color)
    }

    /// Union of two updates where `later` wins on fields both carry.
    ///
    /// Applying the merged update is the same as applying `self` and then
    /// `later`.
    pub fn merge(self, later: CustomizationUpdate) -> Self {
        Self {
            brand_name: later.brand_name.or(self.brand_name),
            brand_name_suffix: later
                .brand_name_suffix
                .or(self.brand_name_suffix),
            primary_color: later.primary_color.or(self.primary_color),
            hero_title: later.hero_title.or(self.hero_title),
            hero_subtitle: later.hero_subtitle.or(self.hero_subtitle),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Names the editable fields so form inputs can build single-field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CustomizationField {
    #[display("brandName")]
    BrandName,
    #[display("brandNameSuffix")]
    BrandNameSuffix,
    #[display("primaryColor")]
    PrimaryColor,
    #[display("heroTitle")]
    HeroTitle,
    #[display("heroSubtitle")]
    HeroSubtitle,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct HotelId(pub i32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub location: String,
    /// Price per night in rupees.
    pub price: Decimal,
    pub rating: f32,
    pub reviews: u32,
    pub image_url: String,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct BookingId(pub String);

/// Lifecycle of a booking. Displays as the Hindi label shown in tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
pub enum BookingStatus {
    #[display("पुष्ट")]
    Confirmed,
    #[display("लंबित")]
    Pending,
    #[display("रद्द")]
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Confirmed,
        BookingStatus::Pending,
        BookingStatus::Cancelled,
    ];

    /// English name, used for chart legends.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub customer: String,
    pub hotel: String,
    pub date: Date,
    /// Whole rupees.
    pub amount: Decimal,
    pub status: BookingStatus,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub enum CommissionStatus {
    #[display("भुगतान हुआ")]
    Paid,
    #[display("भुगतान बाकी")]
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    pub hotel: String,
    pub bookings: u32,
    pub total_amount: Decimal,
    pub commission_percentage: Decimal,
    pub commission_amount: Decimal,
    pub status: CommissionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub name: String,
    /// Monthly price in rupees.
    pub price: Decimal,
    pub features: Vec<String>,
    #[serde(default)]
    pub non_features: Vec<String>,
    pub is_popular: bool,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub enum OtaName {
    #[display("Booking.com")]
    BookingCom,
    #[display("Agoda")]
    Agoda,
    #[display("Goibibo")]
    Goibibo,
    #[display("MakeMyTrip")]
    MakeMyTrip,
}

/// Connection status for an online travel agency channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtaIntegration {
    pub name: OtaName,
    pub description: String,
    pub connected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(
        brand_name: Option<&str>,
        primary_color: Option<&str>,
        hero_title: Option<&str>,
    ) -> CustomizationUpdate {
        CustomizationUpdate {
            brand_name: brand_name.map(Into::into),
            primary_color: primary_color.map(Into::into),
            hero_title: hero_title.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let before = CustomizationState::default();
        let after = before
            .clone()
            .applied(update(Some("Acme"), None, Some("Stay Better")));

        assert_eq!(after.brand_name, "Acme");
        assert_eq!(after.hero_title, "Stay Better");
        assert_eq!(after.brand_name_suffix, before.brand_name_suffix);
        assert_eq!(after.primary_color, before.primary_color);
        assert_eq!(after.hero_subtitle, before.hero_subtitle);
    }

    #[test]
    fn empty_update_is_identity() {
        let before = CustomizationState::default();
        let after = before.clone().applied(CustomizationUpdate::default());
        assert_eq!(before, after);
        assert!(CustomizationUpdate::default().is_empty());
    }

    #[test]
    fn values_are_accepted_verbatim() {
        let state = CustomizationState::default()
            .applied(CustomizationUpdate::primary_color("not a color"))
            .applied(CustomizationUpdate::field(
                CustomizationField::BrandName,
                "",
            ));
        assert_eq!(state.primary_color, "not a color");
        assert_eq!(state.brand_name, "");
    }

    #[test]
    fn sequential_updates_equal_merged_update() {
        let a = update(Some("First"), Some("#111111"), None);
        let b = update(Some("Second"), None, Some("Title"));

        let sequential = CustomizationState::default()
            .applied(a.clone())
            .applied(b.clone());
        let merged = CustomizationState::default().applied(a.merge(b));

        assert_eq!(sequential, merged);
        assert_eq!(merged.brand_name, "Second");
        assert_eq!(merged.primary_color, "#111111");
        assert_eq!(merged.hero_title, "Title");
    }

    #[test]
    fn merge_is_associative_for_disjoint_fields() {
        let a = update(Some("A"), None, None);
        let b = update(None, Some("#222222"), None);
        let c = update(None, None, Some("C"));

        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(b.merge(c));
        assert_eq!(left, right);
    }

    #[test]
    fn field_update_round_trips_through_get() {
        for field in [
            CustomizationField::BrandName,
            CustomizationField::BrandNameSuffix,
            CustomizationField::PrimaryColor,
            CustomizationField::HeroTitle,
            CustomizationField::HeroSubtitle,
        ] {
            let state = CustomizationState::default()
                .applied(CustomizationUpdate::field(field, "changed"));
            assert_eq!(state.get(field), "changed", "{field}");
        }
    }

    #[test]
    fn status_labels() {
        assert_eq!(BookingStatus::Confirmed.to_string(), "पुष्ट");
        assert_eq!(BookingStatus::Cancelled.name(), "Cancelled");
        assert_eq!(CommissionStatus::Paid.to_string(), "भुगतान हुआ");
        assert_eq!(OtaName::BookingCom.to_string(), "Booking.com");
    }
}
