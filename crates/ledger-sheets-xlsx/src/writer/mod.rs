//! XLSX writer

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use ledger_sheets_core::cell::boolean_numeral;
use ledger_sheets_core::{Cell, CellFormatHandle, CellValue, PaletteSnapshot, Sheet};
use log::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::{XlsxError, XlsxResult};
use crate::styles;

/// XLSX package writer
///
/// Produces a single-sheet workbook. The sheet carries its own column
/// widths; the snapshot supplies the stylesheet every cell's style handle
/// points into.
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a package to a file path
    pub fn write_file<P: AsRef<Path>>(
        sheet: &Sheet,
        styles: &PaletteSnapshot,
        path: P,
    ) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, styles, BufWriter::new(file))
    }

    /// Write a package into memory
    pub fn to_bytes(sheet: &Sheet, styles: &PaletteSnapshot) -> XlsxResult<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::write(sheet, styles, Cursor::new(&mut buffer))?;
        Ok(buffer)
    }

    /// Write a package to a writer
    ///
    /// Every cell's style handle is checked against the snapshot before any
    /// byte is written.
    pub fn write<W: Write + Seek>(
        sheet: &Sheet,
        styles: &PaletteSnapshot,
        writer: W,
    ) -> XlsxResult<()> {
        styles::validate(styles)?;
        Self::check_cell_styles(sheet, styles)?;

        let mut zip = ZipWriter::new(writer);

        // Write [Content_Types].xml
        Self::write_part(&mut zip, "[Content_Types].xml", CONTENT_TYPES)?;

        // Write _rels/.rels
        Self::write_part(&mut zip, "_rels/.rels", ROOT_RELS)?;

        // Write xl/workbook.xml
        Self::write_part(&mut zip, "xl/workbook.xml", &Self::workbook_xml(sheet))?;

        // Write xl/_rels/workbook.xml.rels
        Self::write_part(&mut zip, "xl/_rels/workbook.xml.rels", WORKBOOK_RELS)?;

        // Write xl/styles.xml
        Self::write_part(&mut zip, "xl/styles.xml", &styles::to_styles_xml(styles))?;

        // Write the worksheet
        Self::write_part(
            &mut zip,
            "xl/worksheets/sheet1.xml",
            &Self::worksheet_xml(sheet),
        )?;

        zip.finish()?.flush()?;
        debug!(
            "wrote package for sheet '{}' ({} rows)",
            sheet.name(),
            sheet.row_count()
        );
        Ok(())
    }

    fn write_part<W: Write + Seek>(
        zip: &mut ZipWriter<W>,
        name: &str,
        content: &str,
    ) -> XlsxResult<()> {
        let options = SimpleFileOptions::default();
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes())?;
        debug!("wrote part {} ({} bytes)", name, content.len());
        Ok(())
    }

    fn check_cell_styles(sheet: &Sheet, styles: &PaletteSnapshot) -> XlsxResult<()> {
        let len = styles.counts().cell_formats;
        let dangling = sheet
            .rows()
            .iter()
            .flat_map(|row| row.cells())
            .find(|cell| styles.cell_format(cell.style).is_none());

        match dangling {
            Some(cell) => Err(XlsxError::InvalidFormat(format!(
                "cell {} uses style {} but only {} cell formats exist",
                cell.address, cell.style, len
            ))),
            None => Ok(()),
        }
    }

    fn workbook_xml(sheet: &Sheet) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>
        <sheet name="{}" sheetId="1" r:id="rId1"/>
    </sheets>
</workbook>"#,
            escape_xml(sheet.name())
        )
    }

    fn worksheet_xml(sheet: &Sheet) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        if let Some(range) = sheet.used_range() {
            content.push_str(&format!("\n    <dimension ref=\"{}\"/>", range));
        }

        if !sheet.columns().is_empty() {
            content.push_str("\n    <cols>");
            for col in sheet.columns() {
                let custom = if col.custom_width {
                    " customWidth=\"1\""
                } else {
                    ""
                };
                content.push_str(&format!(
                    "\n        <col min=\"{}\" max=\"{}\" width=\"{}\"{}/>",
                    col.column, col.column, col.width, custom
                ));
            }
            content.push_str("\n    </cols>");
        }

        content.push_str("\n    <sheetData>");
        for row in sheet.rows() {
            content.push_str(&format!("\n        <row r=\"{}\">", row.index()));
            for cell in row.cells() {
                content.push_str("\n            ");
                content.push_str(&Self::cell_xml(cell));
            }
            content.push_str("\n        </row>");
        }
        content.push_str("\n    </sheetData>");

        content.push_str("\n</worksheet>");
        content
    }

    fn cell_xml(cell: &Cell) -> String {
        let cell_ref = cell.address.to_a1_string();
        let style_attr = if cell.style != CellFormatHandle::DEFAULT {
            format!(" s=\"{}\"", cell.style.index())
        } else {
            String::new()
        };

        match &cell.value {
            CellValue::Number(n) | CellValue::Date(n) => {
                format!("<c r=\"{}\"{}><v>{}</v></c>", cell_ref, style_attr, n)
            }
            CellValue::Text(s) => {
                let space = if s.trim() != s {
                    " xml:space=\"preserve\""
                } else {
                    ""
                };
                format!(
                    "<c r=\"{}\"{} t=\"inlineStr\"><is><t{}>{}</t></is></c>",
                    cell_ref,
                    style_attr,
                    space,
                    escape_text(s)
                )
            }
            CellValue::Boolean(b) => {
                format!(
                    "<c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
                    cell_ref,
                    style_attr,
                    boolean_numeral(*b)
                )
            }
            CellValue::Formula(text) => {
                let formula_text = text.strip_prefix('=').unwrap_or(text);
                format!(
                    "<c r=\"{}\"{}><f>{}</f></c>",
                    cell_ref,
                    style_attr,
                    escape_xml(formula_text)
                )
            }
            // Placeholders keep their address and style
            CellValue::Blank => format!("<c r=\"{}\"{}/>", cell_ref, style_attr),
        }
    }
}

fn escape_xml(s: &str) -> String {
    quick_xml::escape::escape(s).into_owned()
}

/// Escape cell text, writing characters XML cannot carry as `_xHHHH_`
///
/// A literal `_` that would read back as such a sequence is itself
/// written as `_x005F_`.
fn escape_text(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        match c {
            '\t' | '\n' | '\r' => encoded.push(c),
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => {
                encoded.push_str(&format!("_x{:04X}_", c as u32))
            }
            '_' if starts_escape_sequence(&s[i..]) => encoded.push_str("_x005F_"),
            _ => encoded.push(c),
        }
    }
    escape_xml(&encoded)
}

fn starts_escape_sequence(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 7 && b[1] == b'x' && b[2..6].iter().all(u8::is_ascii_hexdigit) && b[6] == b'_'
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
    <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;
