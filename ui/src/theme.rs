//! Pushes the branding into the document: the `--primary-color` CSS
//! variable, a readable text color on top of it, and the page title.

use payloads::CustomizationState;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, window};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

/// Text color for content drawn on the primary color.
pub const LIGHT_FOREGROUND: &str = "#ffffff";
pub const DARK_FOREGROUND: &str = "#111827";

/// Relative luminance above which dark text reads better than white.
const LUMINANCE_THRESHOLD: f64 = 0.45;

/// Parse `#rgb` or `#rrggbb`.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let double = |i: usize| channel(&hex[i..=i].repeat(2));
            Some((double(0)?, double(1)?, double(2)?))
        }
        6 => Some((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// WCAG relative luminance of an sRGB color.
fn relative_luminance((r, g, b): (u8, u8, u8)) -> f64 {
    let linear = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// White on dark brand colors, near-black on light ones. Colors that don't
/// parse get white.
pub fn foreground_for(color: &str) -> &'static str {
    match parse_hex_color(color) {
        Some(rgb) if relative_luminance(rgb) > LUMINANCE_THRESHOLD => {
            DARK_FOREGROUND
        }
        _ => LIGHT_FOREGROUND,
    }
}

pub fn apply_brand_to_document(customization: &CustomizationState) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(&customization.display_name());

    let Some(root) = document
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    let color = &customization.primary_color;
    if style.set_property("--primary-color", color).is_err()
        || style
            .set_property("--primary-foreground", foreground_for(color))
            .is_err()
    {
        tracing::warn!(%color, "failed to apply brand color");
    }
}

/// Keep the document in sync with the customization in the store.
#[hook]
pub fn use_brand_theme() {
    let customization =
        use_selector(|state: &State| state.customization.clone());
    use_effect_with(customization, |customization| {
        apply_brand_to_document(customization);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3b82f6"), Some((0x3b, 0x82, 0xf6)));
        assert_eq!(parse_hex_color("#FFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color(" #000000 "), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("3b82f6"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#ggg"), None);
        assert_eq!(parse_hex_color("teal"), None);
    }

    #[test]
    fn test_foreground_for() {
        assert_eq!(foreground_for("#ffffff"), DARK_FOREGROUND);
        assert_eq!(foreground_for("#eab308"), DARK_FOREGROUND);
        assert_eq!(foreground_for("#000000"), LIGHT_FOREGROUND);
        assert_eq!(foreground_for("#3b82f6"), LIGHT_FOREGROUND);
        assert_eq!(foreground_for("#64748b"), LIGHT_FOREGROUND);
        assert_eq!(foreground_for("not a color"), LIGHT_FOREGROUND);
    }
}
