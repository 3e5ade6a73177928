//! Stylesheet (`xl/styles.xml`) generation
//!
//! The palette snapshot already holds the tables in their final order, so
//! every handle maps straight onto an XML index. Counts come from the
//! snapshot rather than from the slices so the written `count` attributes
//! always match what was recorded at finalize time.

use ledger_sheets_core::{
    Alignment, BorderEntry, BorderLineStyle, BorderSide, CellFormat, FillEntry, FillPattern,
    FontEntry, HatchPattern, HorizontalAlignment, PaletteSnapshot, Rgb, VerticalAlignment,
};

use crate::error::{XlsxError, XlsxResult};

const DEFAULT_FONT_NAME: &str = "Calibri";
const DEFAULT_FONT_SIZE: u32 = 11;

/// Check that a snapshot carries the entries every stylesheet needs
pub(crate) fn validate(styles: &PaletteSnapshot) -> XlsxResult<()> {
    let counts = styles.counts();
    if counts.fonts < 1 {
        return Err(XlsxError::InvalidFormat(
            "stylesheet needs at least one font".into(),
        ));
    }
    if counts.fills < 2 {
        return Err(XlsxError::InvalidFormat(format!(
            "stylesheet needs at least two fills (none and gray125), found {}",
            counts.fills
        )));
    }
    if counts.borders < 1 {
        return Err(XlsxError::InvalidFormat(
            "stylesheet needs at least one border".into(),
        ));
    }
    if counts.cell_formats < 1 {
        return Err(XlsxError::InvalidFormat(
            "stylesheet needs at least one cell format".into(),
        ));
    }
    Ok(())
}

/// Render `xl/styles.xml`
pub(crate) fn to_styles_xml(styles: &PaletteSnapshot) -> String {
    let counts = styles.counts();

    let mut xml = String::new();
    xml.push_str(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    if counts.number_formats > 0 {
        xml.push_str(&format!("\n  <numFmts count=\"{}\">", counts.number_formats));
        for entry in styles.number_formats() {
            xml.push_str(&format!(
                "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                entry.id,
                escape_xml_attr(&entry.pattern)
            ));
        }
        xml.push_str("\n  </numFmts>");
    }

    xml.push_str(&format!("\n  <fonts count=\"{}\">", counts.fonts));
    for font in styles.fonts() {
        xml.push_str("\n    ");
        xml.push_str(&write_font(font));
    }
    xml.push_str("\n  </fonts>");

    xml.push_str(&format!("\n  <fills count=\"{}\">", counts.fills));
    for fill in styles.fills() {
        xml.push_str("\n    ");
        xml.push_str(&write_fill(fill));
    }
    xml.push_str("\n  </fills>");

    xml.push_str(&format!("\n  <borders count=\"{}\">", counts.borders));
    for border in styles.borders() {
        xml.push_str("\n    ");
        xml.push_str(&write_border(border));
    }
    xml.push_str("\n  </borders>");

    // cellStyleXfs (required)
    xml.push_str(
        r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
    );

    xml.push_str(&format!("\n  <cellXfs count=\"{}\">", counts.cell_formats));
    for format in styles.cell_formats() {
        xml.push_str("\n    ");
        xml.push_str(&write_xf(format));
    }
    xml.push_str("\n  </cellXfs>");

    // cellStyles (required)
    xml.push_str(
        r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>"#,
    );

    xml.push_str("\n</styleSheet>");
    xml
}

fn escape_xml_attr(s: &str) -> String {
    quick_xml::escape::escape(s).into_owned()
}

fn write_color(tag: &str, color: Option<Rgb>) -> String {
    match color {
        Some(rgb) => format!("<{tag} rgb=\"{}\"/>", rgb.to_argb_hex()),
        None => format!("<{tag} indexed=\"64\"/>"),
    }
}

fn write_font(font: &FontEntry) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    s.push_str(&format!("<sz val=\"{}\"/>", DEFAULT_FONT_SIZE));
    match font.color {
        Some(rgb) => s.push_str(&write_color("color", Some(rgb))),
        None => s.push_str("<color theme=\"1\"/>"),
    }
    s.push_str(&format!("<name val=\"{}\"/>", DEFAULT_FONT_NAME));
    s.push_str("<family val=\"2\"/><scheme val=\"minor\"/>");
    s.push_str("</font>");
    s
}

fn hatch_to_str(p: HatchPattern) -> &'static str {
    match p {
        HatchPattern::Gray125 => "gray125",
    }
}

fn write_fill(fill: &FillEntry) -> String {
    match fill.pattern {
        FillPattern::None => "<fill><patternFill patternType=\"none\"/></fill>".to_string(),
        FillPattern::Hatch(pattern) => match fill.foreground {
            Some(color) => format!(
                "<fill><patternFill patternType=\"{}\">{}</patternFill></fill>",
                hatch_to_str(pattern),
                write_color("fgColor", Some(color))
            ),
            None => format!(
                "<fill><patternFill patternType=\"{}\"/></fill>",
                hatch_to_str(pattern)
            ),
        },
        FillPattern::Solid => format!(
            "<fill><patternFill patternType=\"solid\">{}<bgColor indexed=\"64\"/></patternFill></fill>",
            write_color("fgColor", fill.foreground)
        ),
    }
}

fn border_style_to_str(s: BorderLineStyle) -> Option<&'static str> {
    match s {
        BorderLineStyle::None => None,
        BorderLineStyle::Thin => Some("thin"),
    }
}

fn side_tag(side: BorderSide) -> &'static str {
    match side {
        BorderSide::Left => "left",
        BorderSide::Right => "right",
        BorderSide::Top => "top",
        BorderSide::Bottom => "bottom",
    }
}

fn write_border(border: &BorderEntry) -> String {
    let mut s = String::from("<border>");
    for side in BorderSide::ALL {
        let tag = side_tag(side);
        match border_style_to_str(border.style) {
            Some(style) if border.edges.contains(side) => {
                s.push_str(&format!(
                    "<{tag} style=\"{}\">{}</{tag}>",
                    style,
                    write_color("color", border.color)
                ));
            }
            _ => s.push_str(&format!("<{tag}/>")),
        }
    }
    s.push_str("<diagonal/>");
    s.push_str("</border>");
    s
}

fn horiz_to_str(h: HorizontalAlignment) -> &'static str {
    match h {
        HorizontalAlignment::General => "general",
        HorizontalAlignment::Left => "left",
        HorizontalAlignment::Center => "center",
        HorizontalAlignment::Right => "right",
    }
}

fn vert_to_str(v: VerticalAlignment) -> &'static str {
    match v {
        VerticalAlignment::Top => "top",
        VerticalAlignment::Center => "center",
        VerticalAlignment::Bottom => "bottom",
    }
}

fn write_alignment(al: &Alignment) -> String {
    // Only write if any non-default property is set
    let default = Alignment::default();
    if al.is_default() {
        return String::new();
    }

    let mut s = String::from("<alignment");
    if al.horizontal != default.horizontal {
        s.push_str(&format!(" horizontal=\"{}\"", horiz_to_str(al.horizontal)));
    }
    if al.vertical != default.vertical {
        s.push_str(&format!(" vertical=\"{}\"", vert_to_str(al.vertical)));
    }
    s.push_str("/>");
    s
}

fn write_xf(format: &CellFormat) -> String {
    let num_fmt_id = format.number_format.map_or(0, |id| id.get());
    let font_id = format.font.map_or(0, |h| h.index());
    let fill_id = format.fill.map_or(0, |h| h.index());
    let border_id = format.border.map_or(0, |h| h.index());

    // apply flags
    let mut attrs = String::new();
    if format.number_format.is_some() {
        attrs.push_str(" applyNumberFormat=\"1\"");
    }
    if format.font.is_some() {
        attrs.push_str(" applyFont=\"1\"");
    }
    if format.fill.is_some() {
        attrs.push_str(" applyFill=\"1\"");
    }
    if format.border.is_some() {
        attrs.push_str(" applyBorder=\"1\"");
    }
    if !format.alignment.is_default() {
        attrs.push_str(" applyAlignment=\"1\"");
    }

    let mut s = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"{}",
        num_fmt_id, font_id, fill_id, border_id, attrs
    );

    let alignment_xml = write_alignment(&format.alignment);
    if alignment_xml.is_empty() {
        s.push_str("/>");
        return s;
    }

    s.push('>');
    s.push_str(&alignment_xml);
    s.push_str("</xf>");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_sheets_core::{BorderEntry, StylePalette};
    use pretty_assertions::assert_eq;

    fn minimal_palette() -> StylePalette {
        let mut palette = StylePalette::new();
        palette.add_font(FontEntry::new()).unwrap();
        palette.add_fill(FillEntry::none()).unwrap();
        palette.add_fill(FillEntry::hatch(HatchPattern::Gray125)).unwrap();
        palette.add_border(BorderEntry::new()).unwrap();
        palette.add_cell_format(CellFormat::new()).unwrap();
        palette
    }

    #[test]
    fn test_required_fills() {
        let mut palette = StylePalette::new();
        palette.add_font(FontEntry::new()).unwrap();
        palette.add_fill(FillEntry::none()).unwrap();
        palette.add_border(BorderEntry::new()).unwrap();
        palette.add_cell_format(CellFormat::new()).unwrap();
        let snapshot = palette.finalize().unwrap();

        assert!(matches!(
            validate(&snapshot),
            Err(XlsxError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_minimal_stylesheet() {
        let snapshot = minimal_palette().finalize().unwrap();
        validate(&snapshot).unwrap();

        let xml = to_styles_xml(&snapshot);
        assert!(!xml.contains("<numFmts"));
        assert!(xml.contains("<fonts count=\"1\">"));
        assert!(xml.contains("<fills count=\"2\">"));
        assert!(xml.contains("<patternFill patternType=\"gray125\"/>"));
        assert!(xml.contains("<cellXfs count=\"1\">"));
        assert!(xml.contains(
            "<xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/>"
        ));
    }

    #[test]
    fn test_xf_references_and_apply_flags() {
        let mut palette = minimal_palette();
        let currency = palette.add_number_format("$#.00").unwrap();
        let bold = palette.add_font(FontEntry::new().with_bold(true)).unwrap();
        let green = palette.add_fill(FillEntry::solid(Rgb::GREEN)).unwrap();
        let format = palette
            .add_cell_format(
                CellFormat::new()
                    .with_number_format(currency)
                    .with_font(bold)
                    .with_fill(green)
                    .with_alignment(Alignment::top_right()),
            )
            .unwrap();
        let snapshot = palette.finalize().unwrap();

        let xf = write_xf(snapshot.cell_format(format).unwrap());
        assert_eq!(
            xf,
            "<xf numFmtId=\"164\" fontId=\"1\" fillId=\"2\" borderId=\"0\" xfId=\"0\" \
             applyNumberFormat=\"1\" applyFont=\"1\" applyFill=\"1\" applyAlignment=\"1\">\
             <alignment horizontal=\"right\" vertical=\"top\"/></xf>"
        );

        let xml = to_styles_xml(&snapshot);
        assert!(xml.contains("<numFmt numFmtId=\"164\" formatCode=\"$#.00\"/>"));
        assert!(xml.contains("<fgColor rgb=\"FF00FF00\"/>"));
    }

    #[test]
    fn test_border_edges() {
        let thin = BorderEntry::all(BorderLineStyle::Thin, Rgb::new(0xB4, 0xB4, 0xB4));
        assert_eq!(
            write_border(&thin),
            "<border><left style=\"thin\"><color rgb=\"FFB4B4B4\"/></left>\
             <right style=\"thin\"><color rgb=\"FFB4B4B4\"/></right>\
             <top style=\"thin\"><color rgb=\"FFB4B4B4\"/></top>\
             <bottom style=\"thin\"><color rgb=\"FFB4B4B4\"/></bottom>\
             <diagonal/></border>"
        );
        assert_eq!(
            write_border(&BorderEntry::new()),
            "<border><left/><right/><top/><bottom/><diagonal/></border>"
        );
    }

    #[test]
    fn test_number_format_pattern_is_escaped() {
        let mut palette = minimal_palette();
        palette.add_number_format("\"<\"0").unwrap();
        let xml = to_styles_xml(&palette.finalize().unwrap());
        assert!(xml.contains("formatCode=\"&quot;&lt;&quot;0\""));
    }
}
