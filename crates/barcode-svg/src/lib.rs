//! Renders `barcode-core`'s geometry-primitive stream to SVG markup.
//!
//! `barcode-core` never touches pixels or markup; this crate is the thin
//! adapter that turns its [`BarcodeElement`] stream into a scaled,
//! quiet-zone-padded `<svg>` document (or, with `full_svg: false`, a bare
//! fragment a caller can embed in its own document).

mod error;

pub use error::SvgError;

use barcode_core::{BarcodeElement, Symbology, TextAlign};
use std::fmt::Write as _;

/// Knobs controlling how a geometry stream is scaled and styled when
/// serialized to SVG.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Side length, in SVG user units, of one barcode module/bar unit.
    pub module_size: f64,
    /// Width of the quiet zone around the symbol, in module units.
    pub quiet_zone_modules: f64,
    /// Fill color for dark bars and text, as a CSS/SVG color string
    /// (`#RRGGBB` is the common case — the low 24 bits of whatever color
    /// value the caller started from).
    pub dark_color: String,
    /// Background fill. `None` omits the background rectangle entirely,
    /// leaving the SVG transparent.
    pub light_color: Option<String>,
    /// Whether to emit [`BarcodeElement::Text`] elements at all.
    pub include_text: bool,
    /// `font-family` attribute applied to emitted text elements.
    pub font_family: String,
    /// Extra vertical gap, in module units, reserved between the bar region
    /// and a text element's own `top`/`height` box before applying
    /// `baseline`.
    pub text_padding: f64,
    /// Fraction of a text element's `height` added to its `top` to place
    /// the SVG baseline (text is anchored at its baseline, not its top-left
    /// corner, the way `<rect>` is).
    pub baseline: f64,
    /// When `true` (the default), wrap the output in a root `<svg>` element
    /// with a computed `viewBox`. When `false`, emit only the inner
    /// `<rect>`/`<text>` markup, for a caller embedding it in a document of
    /// its own.
    pub full_svg: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_size: 4.0,
            quiet_zone_modules: 4.0,
            dark_color: "#000000".to_string(),
            light_color: None,
            include_text: true,
            font_family: "monospace".to_string(),
            text_padding: 2.0,
            baseline: 0.75,
            full_svg: true,
        }
    }
}

/// Renders `data` under `symbology`, then serializes the result to an SVG
/// document string.
pub fn to_svg(symbology: Symbology, data: &str, options: &RenderOptions) -> Result<String, SvgError> {
    let elements = symbology.render(data)?;
    to_svg_string(&elements, options)
}

/// Serializes an already-rendered geometry stream to an SVG document
/// string, scaling by `options.module_size` and padding by
/// `options.quiet_zone_modules` on every side.
///
/// All filled [`BarcodeElement::Bar`]s are concatenated into a single
/// `<path>` (one `M h v h z` rectangle per bar) rather than one `<rect>`
/// each, matching how a real QR symbol (hundreds to thousands of modules)
/// is usually emitted. Unfilled bars contribute no markup — the light
/// background (or transparency) already shows through.
pub fn to_svg_string(elements: &[BarcodeElement], options: &RenderOptions) -> Result<String, SvgError> {
    if options.module_size <= 0.0 {
        return Err(SvgError::InvalidDimensions { width: options.module_size, height: options.module_size });
    }

    let (content_width, content_height) = content_bounds(elements);
    let quiet = options.quiet_zone_modules.max(0.0);
    let width = (content_width + 2.0 * quiet) * options.module_size;
    let height = (content_height + 2.0 * quiet) * options.module_size;
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(SvgError::InvalidDimensions { width, height });
    }

    let mut svg = String::new();
    if options.full_svg {
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(width),
            h = fmt_num(height),
        );
        if let Some(light) = &options.light_color {
            let _ = writeln!(
                svg,
                r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{c}"/>"#,
                w = fmt_num(width),
                h = fmt_num(height),
                c = light,
            );
        }
    }

    let mut path = String::new();
    for element in elements {
        if let BarcodeElement::Bar { left, top, width: w, height: h, filled: true } = element {
            let (x, y, w, h) = (
                (left + quiet) * options.module_size,
                (top + quiet) * options.module_size,
                w * options.module_size,
                h * options.module_size,
            );
            let _ = write!(path, "M{} {}h{}v{}h{}z", fmt_num(x), fmt_num(y), fmt_num(w), fmt_num(h), fmt_num(-w));
        }
    }
    if !path.is_empty() {
        let _ = writeln!(svg, r#"<path d="{path}" fill="{c}"/>"#, path = path, c = options.dark_color);
    }

    if options.include_text {
        for element in elements {
            if let BarcodeElement::Text { left, top, width: _, height, text, align } = element {
                let anchor = match align {
                    TextAlign::Start => "start",
                    TextAlign::Middle => "middle",
                    TextAlign::End => "end",
                };
                // Each symbology's renderer already places `left` at the
                // anchor point appropriate for its `align` (e.g. EAN-13
                // centers its digit string under the bar region), so the
                // serializer just scales it.
                let baseline_y = top + options.text_padding + height * options.baseline;
                let _ = writeln!(
                    svg,
                    r#"<text x="{x}" y="{y}" font-family="{ff}" font-size="{fs}" text-anchor="{a}" fill="{c}">{content}</text>"#,
                    x = fmt_num((left + quiet) * options.module_size),
                    y = fmt_num((baseline_y + quiet) * options.module_size),
                    ff = options.font_family,
                    fs = fmt_num(*height * options.module_size),
                    a = anchor,
                    c = options.dark_color,
                    content = escape_xml(text),
                );
            }
        }
    }

    if options.full_svg {
        svg.push_str("</svg>\n");
    }
    Ok(svg)
}

fn content_bounds(elements: &[BarcodeElement]) -> (f64, f64) {
    let mut max_x: f64 = 0.0;
    let mut max_y: f64 = 0.0;
    for element in elements {
        let (x, y, w, h) = element.bounding_box();
        max_x = max_x.max(x + w);
        max_y = max_y.max(y + h);
    }
    (max_x, max_y)
}

/// Formats a float with up to 5 fractional digits, trimming trailing zeros
/// and a trailing decimal point so whole numbers render as plain integers.
fn fmt_num(value: f64) -> String {
    let s = format!("{:.5}", value);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod should {
    use super::*;
    use barcode_core::ErrorCorrectionLevel;

    #[test]
    fn emit_a_well_formed_svg_document_for_a_qr_code() {
        let qr = barcode_core::QRCode::from_text("hi", ErrorCorrectionLevel::Low).unwrap();
        let mut elements = Vec::new();
        for y in 0..qr.size() {
            for x in 0..qr.size() {
                if qr.get_module(x, y) {
                    elements.push(BarcodeElement::Bar {
                        left: f64::from(x),
                        top: f64::from(y),
                        width: 1.0,
                        height: 1.0,
                        filled: true,
                    });
                }
            }
        }
        let svg = to_svg_string(&elements, &RenderOptions::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn render_ean13_through_the_registry_convenience_function() {
        let svg = to_svg(Symbology::Ean13, "123456789012", &RenderOptions::default()).unwrap();
        assert!(svg.contains("<path"));
        assert!(svg.contains("<text"));
    }

    #[test]
    fn reject_a_non_positive_module_size() {
        let options = RenderOptions { module_size: 0.0, ..RenderOptions::default() };
        let err = to_svg(Symbology::Ean13, "123456789012", &options).unwrap_err();
        assert!(matches!(err, SvgError::InvalidDimensions { .. }));
    }

    #[test]
    fn omit_the_root_svg_element_when_full_svg_is_false() {
        let options = RenderOptions { full_svg: false, ..RenderOptions::default() };
        let svg = to_svg(Symbology::Ean13, "123456789012", &options).unwrap();
        assert!(!svg.contains("<svg"));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn unfilled_bars_contribute_no_path_segment() {
        let elements = vec![
            BarcodeElement::Bar { left: 0.0, top: 0.0, width: 1.0, height: 1.0, filled: false },
            BarcodeElement::Bar { left: 1.0, top: 0.0, width: 1.0, height: 1.0, filled: true },
        ];
        let svg = to_svg_string(&elements, &RenderOptions::default()).unwrap();
        assert_eq!(svg.matches("M").count(), 1);
    }

    #[test]
    fn trim_trailing_zeros_when_formatting_numbers() {
        assert_eq!(fmt_num(4.0), "4");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(0.000001), "0");
    }

    #[test]
    fn escape_reserved_xml_characters_in_text_content() {
        assert_eq!(escape_xml("A&B<C>\"D\""), "A&amp;B&lt;C&gt;&quot;D&quot;");
    }
}
