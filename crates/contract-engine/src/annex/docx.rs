//! DOCX to HTML conversion
//!
//! Reads `word/document.xml` out of the container and keeps the structure a
//! tariff annex needs: paragraphs, headings, bold and italic runs, line
//! breaks and tables. Everything else (fonts, colours, numbering, images) is
//! dropped.
//!
//! Text nodes keep their XML character escaping, which is also valid HTML.

use std::io::{Cursor, Read};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use super::AnnexConverter;
use crate::errors::ContractError;

const DOCUMENT_PART: &str = "word/document.xml";

lazy_static! {
    /// A start, end or empty element tag, or a run of character data
    static ref NODE_RE: Regex =
        Regex::new(r#"<(/?)([A-Za-z][\w:.-]*)([^>]*?)(/?)>|([^<]+)"#).unwrap();
    static ref VAL_RE: Regex = Regex::new(r#"w:val="([^"]*)""#).unwrap();
}

/// Converts DOCX annexes on a blocking thread
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxHtmlConverter;

impl DocxHtmlConverter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnnexConverter for DocxHtmlConverter {
    async fn convert(&self, document: Vec<u8>) -> Result<String, ContractError> {
        tokio::task::spawn_blocking(move || docx_to_html(&document))
            .await
            .map_err(|e| ContractError::Join(e.to_string()))?
    }
}

/// Convert a DOCX file held in memory
pub fn docx_to_html(document: &[u8]) -> Result<String, ContractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(document))
        .map_err(|e| ContractError::Conversion(format!("not a DOCX container: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ContractError::Conversion(format!("{} missing: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ContractError::Conversion(format!("{} unreadable: {}", DOCUMENT_PART, e)))?;

    Ok(render_document_xml(&xml))
}

#[derive(Debug, Default)]
struct Paragraph {
    style: Option<String>,
    content: String,
}

impl Paragraph {
    fn tag(&self) -> &'static str {
        match self.style.as_deref() {
            Some("Title") | Some("Heading1") => "h1",
            Some("Heading2") => "h2",
            Some("Heading3") => "h3",
            Some("Heading4") => "h4",
            Some("Heading5") => "h5",
            Some("Heading6") => "h6",
            _ => "p",
        }
    }
}

#[derive(Debug, Default)]
struct RenderState {
    out: String,
    paragraphs: Vec<Paragraph>,
    bold: bool,
    italic: bool,
    in_run: bool,
    in_text: bool,
}

impl RenderState {
    /// Where inline content currently goes
    fn sink(&mut self) -> &mut String {
        match self.paragraphs.last_mut() {
            Some(paragraph) => &mut paragraph.content,
            None => &mut self.out,
        }
    }

    fn push_text(&mut self, text: &str) {
        let (bold, italic) = (self.bold, self.italic);
        let sink = self.sink();
        if bold {
            sink.push_str("<strong>");
        }
        if italic {
            sink.push_str("<em>");
        }
        sink.push_str(text);
        if italic {
            sink.push_str("</em>");
        }
        if bold {
            sink.push_str("</strong>");
        }
    }

    fn close_paragraph(&mut self) {
        let Some(paragraph) = self.paragraphs.pop() else {
            return;
        };
        if paragraph.content.trim().is_empty() {
            return;
        }
        let tag = paragraph.tag();
        let html = format!("<{tag}>{}</{tag}>", paragraph.content);
        self.sink().push_str(&html);
    }
}

/// Toggle properties such as `<w:b/>` are on unless `w:val` says otherwise
fn toggle_is_on(attrs: &str) -> bool {
    match VAL_RE.captures(attrs) {
        Some(caps) => !matches!(&caps[1], "false" | "0" | "off"),
        None => true,
    }
}

fn render_document_xml(xml: &str) -> String {
    let mut state = RenderState::default();

    for caps in NODE_RE.captures_iter(xml) {
        let Some(name) = caps.get(2) else {
            if state.in_text {
                if let Some(text) = caps.get(5) {
                    state.push_text(text.as_str());
                }
            }
            continue;
        };

        let closing = !caps[1].is_empty();
        let empty = !caps[4].is_empty();
        let attrs = &caps[3];

        match (name.as_str(), closing) {
            ("w:p", false) => {
                state.paragraphs.push(Paragraph::default());
                if empty {
                    state.paragraphs.pop();
                }
            }
            ("w:p", true) => state.close_paragraph(),
            ("w:pStyle", false) => {
                let style = VAL_RE.captures(attrs).map(|c| c[1].to_string());
                if let Some(paragraph) = state.paragraphs.last_mut() {
                    paragraph.style = style;
                }
            }
            ("w:r", false) => {
                state.bold = false;
                state.italic = false;
                state.in_run = !empty;
            }
            ("w:r", true) => state.in_run = false,
            ("w:b", false) => state.bold = toggle_is_on(attrs),
            ("w:i", false) => state.italic = toggle_is_on(attrs),
            ("w:t", false) => state.in_text = !empty,
            ("w:t", true) => state.in_text = false,
            ("w:br", false) => state.sink().push_str("<br />"),
            // Outside a run, w:tab is a tab stop definition
            ("w:tab", false) if state.in_run => state.sink().push(' '),
            ("w:tbl", false) => state.sink().push_str("<table>"),
            ("w:tbl", true) => state.sink().push_str("</table>"),
            ("w:tr", false) => state.sink().push_str("<tr>"),
            ("w:tr", true) => state.sink().push_str("</tr>"),
            ("w:tc", false) => state.sink().push_str("<td>"),
            ("w:tc", true) => state.sink().push_str("</td>"),
            _ => {}
        }
    }

    // Unbalanced input: flush whatever is still open
    while !state.paragraphs.is_empty() {
        state.close_paragraph();
    }

    state.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn wrap_body(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            body
        )
    }

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_and_runs() {
        let xml = wrap_body(
            r#"<w:p><w:r><w:t>Tarifa </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>mensal</w:t></w:r></w:p><w:p/><w:p><w:r><w:rPr><w:i/></w:rPr><w:t>IVA incluído</w:t></w:r></w:p>"#,
        );

        assert_eq!(
            render_document_xml(&xml),
            "<p>Tarifa <strong>mensal</strong></p><p><em>IVA incluído</em></p>"
        );
    }

    #[test]
    fn test_bold_off_value() {
        let xml = wrap_body(
            r#"<w:p><w:r><w:rPr><w:b w:val="false"/></w:rPr><w:t>normal</w:t></w:r></w:p>"#,
        );
        assert_eq!(render_document_xml(&xml), "<p>normal</p>");
    }

    #[test]
    fn test_headings() {
        let xml = wrap_body(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Notas</w:t></w:r></w:p>"#,
        );
        assert_eq!(render_document_xml(&xml), "<h2>Notas</h2>");
    }

    #[test]
    fn test_tables() {
        let xml = wrap_body(
            r#"<w:tbl><w:tblPr/><w:tr><w:tc><w:p><w:r><w:t>Comprimento</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>Valor</w:t></w:r></w:p></w:tc></w:tr><w:tr><w:tc><w:p><w:r><w:t>até 8 m</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>150 &amp; IVA</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
        );

        assert_eq!(
            render_document_xml(&xml),
            "<table><tr><td><p>Comprimento</p></td><td><p>Valor</p></td></tr>\
             <tr><td><p>até 8 m</p></td><td><p>150 &amp; IVA</p></td></tr></table>"
        );
    }

    #[test]
    fn test_tab_stops_are_not_tabs() {
        let xml = wrap_body(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="1440"/><w:tab w:val="right" w:pos="8640"/></w:tabs></w:pPr><w:r><w:t>Tarifa</w:t></w:r></w:p><w:p><w:r><w:t>Lugar</w:t><w:tab/><w:t>42</w:t></w:r></w:p>"#,
        );

        assert_eq!(
            render_document_xml(&xml),
            "<p>Tarifa</p><p>Lugar 42</p>"
        );
    }

    #[test]
    fn test_ignores_non_text_nodes() {
        let xml = wrap_body(
            r#"<w:p><w:r><w:instrText>PAGE</w:instrText></w:r><w:r><w:t xml:space="preserve">a</w:t><w:br/><w:t>b</w:t></w:r></w:p>"#,
        );
        assert_eq!(render_document_xml(&xml), "<p>a<br />b</p>");
    }

    #[test]
    fn test_docx_container() {
        let docx = build_docx(&wrap_body(r#"<w:p><w:r><w:t>Anexo</w:t></w:r></w:p>"#));
        assert_eq!(docx_to_html(&docx).unwrap(), "<p>Anexo</p>");
    }

    #[test]
    fn test_not_a_docx() {
        let result = docx_to_html(b"definitely not a zip");
        assert!(matches!(result, Err(ContractError::Conversion(_))));
    }

    #[test]
    fn test_missing_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(docx_to_html(&bytes), Err(ContractError::Conversion(_))));
    }

    #[tokio::test]
    async fn test_async_converter() {
        let docx = build_docx(&wrap_body(r#"<w:p><w:r><w:t>ok</w:t></w:r></w:p>"#));
        let html = DocxHtmlConverter::new().convert(docx).await.unwrap();
        assert_eq!(html, "<p>ok</p>");
    }
}
