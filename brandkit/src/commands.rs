//! The work behind each subcommand, kept apart from argument parsing so the
//! integration tests can call it against a stub model.

use std::fmt::{self, Write as _};
use std::path::Path;

use anyhow::Context;
use payloads::analytics::{
    BookingAnalytics, monthly_revenue, revenue_history, status_distribution,
};
use payloads::brand_kit::{BrandKitSession, LogoImage};
use payloads::currency::format_inr;
use payloads::{Catalog, CustomizationState, GenAiClient};

/// Month the demo bookings fall in.
pub const CURRENT_MONTH: &str = "Aug";

/// Outcome of `brandkit generate`.
#[derive(Debug)]
pub struct GenerateReport {
    pub logo: LogoImage,
    pub palette: Vec<String>,
    /// The default customization with the generated kit applied.
    pub customization: CustomizationState,
}

impl fmt::Display for GenerateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Brand kit ({}, {} bytes)",
            self.logo.mime_type(),
            self.logo.len()
        )?;
        writeln!(f, "  palette:       {}", self.palette.join(" "))?;
        writeln!(f, "  primary color: {}", self.customization.primary_color)?;
        writeln!(f, "  brand:         {}", self.customization.display_name())?;
        write!(f, "  hero title:    {}", self.customization.hero_title)
    }
}

/// Read a logo from disk and run one generation for it, under the same rules
/// the drawer applies.
pub async fn generate(
    client: &GenAiClient,
    path: &Path,
) -> anyhow::Result<GenerateReport> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let logo = LogoImage::sniff(bytes)
        .with_context(|| format!("{} is not a usable logo", path.display()))?;

    let mut session = BrandKitSession::default();
    session.upload(logo);
    let (ticket, logo) = session.begin()?;
    let result = client.generate_brand_kit(&logo).await;

    let Some(update) = session.finish(ticket, result) else {
        anyhow::bail!(
            "{}",
            session.error().unwrap_or("brand kit generation failed")
        );
    };

    Ok(GenerateReport {
        logo,
        palette: session.palette().to_vec(),
        customization: CustomizationState::default().applied(update),
    })
}

/// Plain-text rendering of the dashboard's analytics tab.
pub fn analytics_report(catalog: &dyn Catalog) -> String {
    let bookings = catalog.bookings();
    let analytics = BookingAnalytics::compute(bookings);
    let average = analytics
        .avg_booking_value
        .map(format_inr)
        .unwrap_or_else(|| "—".into());

    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(
        out,
        "Total revenue:      {}",
        format_inr(analytics.total_revenue)
    );
    let _ = writeln!(out, "Total bookings:     {}", analytics.total_bookings);
    let _ = writeln!(out, "Avg. booking value: {average}");

    let _ = writeln!(out, "\nBooking status:");
    for entry in status_distribution(bookings) {
        let _ = writeln!(out, "  {:<10} {}", entry.status.name(), entry.count);
    }

    let _ = writeln!(out, "\nMonthly revenue:");
    for month in monthly_revenue(revenue_history(), CURRENT_MONTH, bookings) {
        let revenue = format_inr(month.revenue);
        let _ = writeln!(out, "  {}  {revenue}", month.month);
    }
    out
}
