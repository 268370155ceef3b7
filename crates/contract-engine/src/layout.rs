//! Fixed HTML blocks around the substituted templates

/// Marker text of the error fragment
pub const ERROR_MARKER: &str = "ERRO: Não foi possível gerar o contrato";

/// Returned instead of a contract when assembly fails
pub const ERROR_HTML: &str = r#"<p style="color: red; font-weight: bold;">ERRO: Não foi possível gerar o contrato. Verifique o console.</p>"#;

/// Shown in the preview pane while a contract is being generated
pub const LOADING_HTML: &str =
    r#"<p style="text-align: center; padding: 50px;">A gerar o contrato, por favor aguarde...</p>"#;

pub fn header_block(logo: &str, title: &str) -> String {
    format!(
        r#"
<div class="contrato-header" style="margin-top: 0;">
  <img src="{logo}" alt="Logo" class="logo-contrato" />
  <h1>{title}</h1>
</div>
"#
    )
}

pub fn regulation_block(regulation_html: &str) -> String {
    format!(
        r#"
<div class="page-break-before">
  <h2>REGULAMENTO DE UTILIZAÇÃO</h2>
  {regulation_html}
</div>
"#
    )
}

/// Annex I, the licensed area plan
pub fn annex_image_block(image: &str) -> String {
    format!(
        r#"
<div class="anexo page-break-before">
  <h4 class="anexo-titulo">ANEXO I – ÁREA LICENCIADA</h4>
  <div class="imagem-container">
    <img src="{image}" alt="Área Licenciada" class="anexo-imagem" />
  </div>
</div>
"#
    )
}

/// Annex II, the tariff regulation converted from DOCX
pub fn annex_document_block(annex_html: &str) -> String {
    format!(
        r#"
<div class="anexo page-break-before">
  <h4 class="anexo-titulo">ANEXO II – REGULAMENTO DE TARIFAS</h4>
  <p class="anexo-subtitulo">(Notas e Condições)</p>
  <div class="anexo-tabela-container">
    {annex_html}
  </div>
</div>
"#
    )
}

pub fn footer_block(lines: &[String]) -> String {
    let paragraphs: String = lines
        .iter()
        .map(|line| format!("  <p>{}</p>\n", line))
        .collect();
    format!("\n<div class=\"print-footer\">\n{}</div>\n", paragraphs)
}

/// Wrap an assembled contract in a standalone printable page
///
/// The page title is what print-to-PDF proposes as the file name.
pub fn printable_document(title: &str, contract_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-PT">
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <style>
    .page-break-before {{ page-break-before: always; }}
    .logo-contrato {{ max-height: 80px; }}
    .anexo-imagem {{ width: 100%; max-height: 75vh; object-fit: contain; }}
    .print-footer {{ font-size: 10px; text-align: center; }}
  </style>
</head>
<body>
{contract_html}
</body>
</html>
"#
    )
}
