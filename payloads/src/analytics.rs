//! Aggregates shown on the dashboard's analytics tab.
//!
//! Everything here is a pure function of the booking list and is recomputed
//! on each render.

use rust_decimal::{Decimal, dec};
use serde::{Deserialize, Serialize};

use crate::{Booking, BookingStatus};

/// KPI figures for the analytics tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingAnalytics {
    /// Sum of confirmed booking amounts.
    pub total_revenue: Decimal,
    /// Every booking, whatever its status.
    pub total_bookings: usize,
    pub confirmed_bookings: usize,
    /// `None` when there are no confirmed bookings to average over.
    pub avg_booking_value: Option<Decimal>,
}

impl BookingAnalytics {
    pub fn compute(bookings: &[Booking]) -> Self {
        let total_revenue = total_revenue(bookings);
        let confirmed_bookings =
            count_with_status(bookings, BookingStatus::Confirmed);
        let avg_booking_value = (confirmed_bookings > 0)
            .then(|| total_revenue / Decimal::from(confirmed_bookings));

        Self {
            total_revenue,
            total_bookings: bookings.len(),
            confirmed_bookings,
            avg_booking_value,
        }
    }
}

pub fn total_revenue(bookings: &[Booking]) -> Decimal {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .map(|b| b.amount)
        .sum()
}

fn count_with_status(bookings: &[Booking], status: BookingStatus) -> usize {
    bookings.iter().filter(|b| b.status == status).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: BookingStatus,
    pub count: usize,
}

/// One entry per [`BookingStatus`], in declaration order, including statuses
/// with no bookings.
pub fn status_distribution(bookings: &[Booking]) -> Vec<StatusCount> {
    BookingStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: count_with_status(bookings, status),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: Decimal,
}

/// Revenue of the months before the booking list starts.
pub fn revenue_history() -> Vec<MonthlyRevenue> {
    [
        ("Apr", dec!(65000)),
        ("May", dec!(78000)),
        ("Jun", dec!(92000)),
        ("Jul", dec!(81000)),
    ]
    .into_iter()
    .map(|(month, revenue)| MonthlyRevenue {
        month: month.into(),
        revenue,
    })
    .collect()
}

/// The revenue line chart series: `history` followed by the current month,
/// whose revenue is the confirmed total of `bookings`.
pub fn monthly_revenue(
    history: Vec<MonthlyRevenue>,
    current_month: &str,
    bookings: &[Booking],
) -> Vec<MonthlyRevenue> {
    let mut series = history;
    series.push(MonthlyRevenue {
        month: current_month.into(),
        revenue: total_revenue(bookings),
    });
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BookingId, StaticCatalog, catalog::Catalog};
    use jiff::civil::date;

    fn booking(amount: Decimal, status: BookingStatus) -> Booking {
        Booking {
            id: BookingId(format!("#T{amount}")),
            customer: "test".into(),
            hotel: "test".into(),
            date: date(2023, 8, 1),
            amount,
            status,
        }
    }

    #[test]
    fn test_kpis() {
        let bookings = [
            booking(dec!(100), BookingStatus::Confirmed),
            booking(dec!(200), BookingStatus::Confirmed),
            booking(dec!(500), BookingStatus::Pending),
        ];
        let analytics = BookingAnalytics::compute(&bookings);
        assert_eq!(analytics.total_revenue, dec!(300));
        assert_eq!(analytics.total_bookings, 3);
        assert_eq!(analytics.confirmed_bookings, 2);
        assert_eq!(analytics.avg_booking_value, Some(dec!(150)));
    }

    #[test]
    fn test_average_without_confirmed_bookings() {
        let bookings = [
            booking(dec!(500), BookingStatus::Pending),
            booking(dec!(900), BookingStatus::Cancelled),
        ];
        let analytics = BookingAnalytics::compute(&bookings);
        assert_eq!(analytics.total_revenue, Decimal::ZERO);
        assert_eq!(analytics.total_bookings, 2);
        assert_eq!(analytics.avg_booking_value, None);

        let empty = BookingAnalytics::compute(&[]);
        assert_eq!(empty.total_bookings, 0);
        assert_eq!(empty.avg_booking_value, None);
    }

    #[test]
    fn test_distribution_has_every_status() {
        let bookings = [
            booking(dec!(1), BookingStatus::Confirmed),
            booking(dec!(2), BookingStatus::Confirmed),
        ];
        let distribution = status_distribution(&bookings);
        assert_eq!(
            distribution,
            vec![
                StatusCount {
                    status: BookingStatus::Confirmed,
                    count: 2
                },
                StatusCount {
                    status: BookingStatus::Pending,
                    count: 0
                },
                StatusCount {
                    status: BookingStatus::Cancelled,
                    count: 0
                },
            ]
        );

        assert_eq!(status_distribution(&[]).len(), BookingStatus::ALL.len());
    }

    #[test]
    fn test_demo_catalog_figures() {
        let catalog = StaticCatalog::demo();
        let analytics = BookingAnalytics::compute(catalog.bookings());
        // 3598 + 5298 + 4198
        assert_eq!(analytics.total_revenue, dec!(13094));
        assert_eq!(analytics.total_bookings, 5);
        assert_eq!(
            crate::currency::format_inr(analytics.avg_booking_value.unwrap()),
            "₹4,365"
        );

        let counts: Vec<usize> = status_distribution(catalog.bookings())
            .iter()
            .map(|s| s.count)
            .collect();
        assert_eq!(counts, vec![3, 1, 1]);
    }

    #[test]
    fn test_monthly_revenue_appends_current_month() {
        let bookings = [
            booking(dec!(100), BookingStatus::Confirmed),
            booking(dec!(50), BookingStatus::Cancelled),
        ];
        let series = monthly_revenue(revenue_history(), "Aug", &bookings);
        assert_eq!(series.len(), 5);
        assert_eq!(series[0].month, "Apr");
        assert_eq!(series[0].revenue, dec!(65000));
        assert_eq!(series[4].month, "Aug");
        assert_eq!(series[4].revenue, dec!(100));
    }
}
