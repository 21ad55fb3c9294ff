//! PDF layout generator.
//!
//! Emits a PDF 1.4 document by hand: one US-letter page per sheet, each
//! placement drawn as a stroked rectangle at [`DRAW_SCALE`] units per inch
//! with a centered size label. The writer tracks byte offsets for the xref
//! table, so object order in the file is fixed: catalog, page tree, font,
//! then page/content pairs.

use std::fmt::Write as _;

use crate::config::{
    SheetConfig, DRAW_SCALE, PAGE_HEIGHT, PAGE_OFFSET_X, PAGE_OFFSET_Y, PAGE_WIDTH,
};
use crate::model::{NestingResult, Sheet};

/// Low-level PDF object writer with xref bookkeeping.
struct PdfWriter {
    output: Vec<u8>,
    /// Byte offset of each object, indexed by object id - 1.
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut output = Vec::new();
        output.extend_from_slice(b"%PDF-1.4\n");
        Self {
            output,
            offsets: Vec::new(),
        }
    }

    /// Write a raw line.
    fn write_line(&mut self, line: &str) {
        self.output.extend_from_slice(line.as_bytes());
        self.output.push(b'\n');
    }

    /// Start an object, recording its offset. Objects must be emitted in
    /// ascending id order starting at 1.
    fn begin_object(&mut self, id: usize) {
        debug_assert_eq!(id, self.offsets.len() + 1);
        self.offsets.push(self.output.len());
        self.write_line(&format!("{} 0 obj", id));
    }

    fn end_object(&mut self) {
        self.write_line("endobj");
    }

    /// Write a dictionary object in one go.
    fn write_dict_object(&mut self, id: usize, dict: &str) {
        self.begin_object(id);
        self.write_line(dict);
        self.end_object();
    }

    /// Write a content-stream object.
    fn write_stream_object(&mut self, id: usize, content: &str) {
        self.begin_object(id);
        self.write_line(&format!("<< /Length {} >>", content.len()));
        self.write_line("stream");
        self.output.extend_from_slice(content.as_bytes());
        self.write_line("endstream");
        self.end_object();
    }

    /// Write the xref table and trailer, then return the document bytes.
    fn finish(mut self) -> Vec<u8> {
        let xref_offset = self.output.len();
        let count = self.offsets.len();

        self.write_line("xref");
        self.write_line(&format!("0 {}", count + 1));
        // Each entry is exactly 20 bytes.
        self.output.extend_from_slice(b"0000000000 65535 f \n");
        for i in 0..count {
            let offset = self.offsets[i];
            self.output
                .extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }

        self.write_line("trailer");
        self.write_line(&format!("<< /Size {} /Root 1 0 R >>", count + 1));
        self.write_line("startxref");
        self.write_line(&format!("{}", xref_offset));
        self.write_line("%%EOF");

        self.output
    }
}

/// Format a PDF coordinate: integers stay integral, everything else gets
/// two decimals.
fn format_coord(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Build the content stream for one sheet page.
fn sheet_content(sheet: &Sheet, sheet_num: usize, config: &SheetConfig) -> String {
    let mut content = String::new();

    // Page caption.
    writeln!(content, "BT /F1 12 Tf 30 750 Td (Sheet {}) Tj ET", sheet_num).unwrap();

    // Sheet boundary.
    writeln!(
        content,
        "{} {} {} {} re S",
        format_coord(PAGE_OFFSET_X),
        format_coord(PAGE_OFFSET_Y),
        format_coord(config.width * DRAW_SCALE),
        format_coord(config.height * DRAW_SCALE)
    )
    .unwrap();

    for p in sheet {
        let sx = p.x * DRAW_SCALE + PAGE_OFFSET_X;
        let sy = p.y * DRAW_SCALE + PAGE_OFFSET_Y;
        let sw = p.length * DRAW_SCALE;
        let sh = p.height * DRAW_SCALE;

        writeln!(
            content,
            "{} {} {} {} re S",
            format_coord(sx),
            format_coord(sy),
            format_coord(sw),
            format_coord(sh)
        )
        .unwrap();

        // Size label, roughly centered in the rectangle.
        writeln!(
            content,
            "BT /F1 8 Tf {} {} Td ({}x{}) Tj ET",
            format_coord(sx + sw / 2.0 - 10.0),
            format_coord(sy + sh / 2.0),
            p.length as i64,
            p.height as i64
        )
        .unwrap();
    }

    content
}

/// Generate the paginated layout document for a nesting result.
///
/// One page per sheet; an empty result still produces a single blank page
/// so the document remains well-formed.
pub fn generate_pdf(result: &NestingResult, config: &SheetConfig) -> Vec<u8> {
    let empty_sheet: Sheet = Vec::new();
    let sheets: Vec<&Sheet> = if result.sheets.is_empty() {
        vec![&empty_sheet]
    } else {
        result.sheets.iter().collect()
    };

    let mut writer = PdfWriter::new();

    // Object ids: 1 catalog, 2 page tree, 3 font, then (page, content)
    // pairs.
    let page_id = |i: usize| 4 + 2 * i;
    let content_id = |i: usize| 5 + 2 * i;

    let kids: Vec<String> = (0..sheets.len())
        .map(|i| format!("{} 0 R", page_id(i)))
        .collect();

    writer.write_dict_object(1, "<< /Type /Catalog /Pages 2 0 R >>");
    writer.write_dict_object(
        2,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            sheets.len()
        ),
    );
    writer.write_dict_object(
        3,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>",
    );

    for (i, sheet) in sheets.iter().enumerate() {
        writer.write_dict_object(
            page_id(i),
            &format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                format_coord(PAGE_WIDTH),
                format_coord(PAGE_HEIGHT),
                content_id(i)
            ),
        );
        writer.write_stream_object(content_id(i), &sheet_content(sheet, i + 1, config));
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Placement;

    fn pdf_text(result: &NestingResult) -> String {
        let bytes = generate_pdf(result, &SheetConfig::default());
        String::from_utf8(bytes).expect("generated PDF should be ASCII")
    }

    fn two_sheet_result() -> NestingResult {
        NestingResult {
            sheets: vec![
                vec![Placement::new(0.0, 0.0, 24.0, 48.0)],
                vec![Placement::new(0.0, 0.0, 48.0, 96.0)],
            ],
        }
    }

    #[test]
    fn test_pdf_header_and_trailer() {
        let text = pdf_text(&two_sheet_result());
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("startxref"));
    }

    #[test]
    fn test_one_page_per_sheet() {
        let text = pdf_text(&two_sheet_result());
        assert_eq!(text.matches("/Type /Page ").count(), 2);
        assert!(text.contains("/Count 2"));
        assert!(text.contains("(Sheet 1) Tj"));
        assert!(text.contains("(Sheet 2) Tj"));
    }

    #[test]
    fn test_rectangles_scaled_and_offset() {
        let text = pdf_text(&two_sheet_result());
        // Sheet boundary: 48x96 at 5 units/in.
        assert!(text.contains("50 100 240 480 re S"));
        // 24x48 at origin: 5 units/in, +50/+100 page offset.
        assert!(text.contains("50 100 120 240 re S"));
        // Label centered: 50 + 120/2 - 10 = 100, 100 + 240/2 = 220.
        assert!(text.contains("100 220 Td (24x48) Tj"));
    }

    #[test]
    fn test_empty_result_still_one_page() {
        let text = pdf_text(&NestingResult::default());
        assert_eq!(text.matches("/Type /Page ").count(), 1);
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let text = pdf_text(&two_sheet_result());
        let bytes = text.as_bytes();

        // `rfind("xref\n")` would match the suffix of "startxref\n", so
        // anchor on the preceding newline to find the xref table itself.
        let xref_pos = text.rfind("\nxref\n").unwrap() + 1;
        let entries: Vec<&str> = text[xref_pos..]
            .lines()
            .skip(2) // "xref" and the subsection header
            .take_while(|l| {
                let l = l.trim_end();
                l.ends_with(" n") || l.ends_with(" f")
            })
            .collect();
        assert_eq!(entries.len(), 8); // free entry + 7 objects

        for (i, entry) in entries.iter().enumerate().skip(1) {
            let offset: usize = entry[..10].parse().unwrap();
            let expected = format!("{} 0 obj", i);
            let at_offset = &bytes[offset..offset + expected.len()];
            assert_eq!(at_offset, expected.as_bytes());
        }

        let startxref_pos = text.rfind("startxref\n").unwrap();
        let declared: usize = text[startxref_pos..]
            .lines()
            .nth(1)
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(declared, xref_pos);
    }

    #[test]
    fn test_stream_length_matches_content() {
        let text = pdf_text(&two_sheet_result());
        let mut rest = text.as_str();
        while let Some(pos) = rest.find("<< /Length ") {
            let after = &rest[pos + "<< /Length ".len()..];
            let len: usize = after[..after.find(' ').unwrap()].parse().unwrap();
            let stream_start = after.find("stream\n").unwrap() + "stream\n".len();
            let stream = &after[stream_start..stream_start + len];
            assert!(stream.ends_with("ET\n"));
            rest = &after[stream_start + len..];
        }
    }
}
