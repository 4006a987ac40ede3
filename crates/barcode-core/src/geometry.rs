//! Renderer-agnostic geometry primitives emitted by every symbology.
//!
//! Encoding and rendering are kept separate: a symbology's `render` produces
//! a flat stream of [`BarcodeElement`]s, and a downstream serializer (an SVG
//! writer, a rasterizer, whatever the caller wants) turns that stream into
//! pixels or markup without knowing anything about QR codes or Code 128.

/// Horizontal alignment of a [`BarcodeElement::Text`] relative to its anchor
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Middle,
    End,
}

/// One piece of barcode geometry, in abstract user-space units. A
/// symbology's renderer emits these in document order (top-to-bottom,
/// left-to-right); the caller is responsible for choosing a module/bar
/// scale and quiet zone before handing the stream to a serializer.
#[derive(Debug, Clone, PartialEq)]
pub enum BarcodeElement {
    /// One cell of the bar/module grid: a QR module, or one bar-or-space
    /// slot of a 1D symbol. `filled` distinguishes dark modules from light
    /// ones — QR's renderer only emits dark (`filled: true`) modules, since
    /// the grid is otherwise mostly light; a 1D renderer emits the full
    /// left-to-right run, light gaps included, since their width is derived
    /// from a fixed module width rather than a sparse grid.
    Bar {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        filled: bool,
    },
    /// Human-readable text, such as the digits under an EAN-13 barcode.
    /// `height` is the box a serializer positions the text's baseline
    /// within (see `barcode-svg`'s `baseline` option), not a literal font
    /// metric — exact glyph rendering is the caller's problem.
    Text {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        text: String,
        align: TextAlign,
    },
}

impl BarcodeElement {
    /// The smallest axis-aligned rectangle containing this element, as
    /// `(left, top, width, height)`.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        match self {
            BarcodeElement::Bar { left, top, width, height, .. } => (*left, *top, *width, *height),
            BarcodeElement::Text { left, top, width, height, .. } => (*left, *top, *width, *height),
        }
    }

    /// `true` for a filled `Bar`; `false` for an unfilled `Bar` or any
    /// `Text` element.
    pub fn is_filled_bar(&self) -> bool {
        matches!(self, BarcodeElement::Bar { filled: true, .. })
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn report_its_own_rectangle_for_a_bar() {
        let el = BarcodeElement::Bar { left: 1.0, top: 2.0, width: 3.0, height: 4.0, filled: true };
        assert_eq!(el.bounding_box(), (1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn distinguish_filled_from_unfilled_bars() {
        let dark = BarcodeElement::Bar { left: 0.0, top: 0.0, width: 1.0, height: 1.0, filled: true };
        let light = BarcodeElement::Bar { left: 0.0, top: 0.0, width: 1.0, height: 1.0, filled: false };
        assert!(dark.is_filled_bar());
        assert!(!light.is_filled_bar());
    }

    #[test]
    fn text_elements_are_never_filled_bars() {
        let el = BarcodeElement::Text {
            left: 10.0,
            top: 10.0,
            width: 30.0,
            height: 10.0,
            text: "12345".to_string(),
            align: TextAlign::Middle,
        };
        assert!(!el.is_filled_bar());
        assert_eq!(el.bounding_box(), (10.0, 10.0, 30.0, 10.0));
    }
}
