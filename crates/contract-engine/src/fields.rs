//! Registry of the contract form fields

use serde::{Deserialize, Serialize};

/// Form section a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSection {
    /// Client identity (natural or collective person)
    Client,
    /// Lease terms
    Lease,
    /// Vessel registration and insurance
    Vessel,
    /// Computed from other fields at generation time
    Derived,
}

/// Information about a contract field
#[derive(Debug, Clone, Serialize)]
pub struct FieldInfo {
    /// Field name, as used in the form and in `{{name}}` tokens
    pub name: &'static str,
    /// Label shown next to the form input
    pub label: &'static str,
    pub section: FieldSection,
}

const FIELDS: &[(&str, &str, FieldSection)] = &[
    ("tipoPessoa", "Tipo de pessoa", FieldSection::Client),
    ("nomeCompleto", "Nome completo", FieldSection::Client),
    ("numeroCC", "Cartão de Cidadão n.º", FieldSection::Client),
    ("dataValidadeCC", "Validade do Cartão de Cidadão", FieldSection::Client),
    ("nif", "NIF", FieldSection::Client),
    ("nomeEmpresa", "Denominação social", FieldSection::Client),
    ("nipc", "NIPC", FieldSection::Client),
    ("representanteLegal", "Representante legal", FieldSection::Client),
    ("morada", "Morada", FieldSection::Client),
    ("emailCliente", "Email", FieldSection::Client),
    ("telefoneCliente", "Telefone", FieldSection::Client),
    ("numeroLugar", "Lugar n.º", FieldSection::Lease),
    ("dataInicio", "Data de início", FieldSection::Lease),
    ("dataFim", "Data de fim", FieldSection::Lease),
    ("valorMensal", "Valor mensal (€)", FieldSection::Lease),
    ("nomeEmbarcacao", "Nome da embarcação", FieldSection::Vessel),
    ("bandeira", "Bandeira", FieldSection::Vessel),
    ("portoRegisto", "Porto de registo", FieldSection::Vessel),
    ("numeroRegisto", "Número de registo", FieldSection::Vessel),
    ("comprimento", "Comprimento (m)", FieldSection::Vessel),
    ("boca", "Boca (m)", FieldSection::Vessel),
    ("pontal", "Pontal (m)", FieldSection::Vessel),
    ("materialCasco", "Material do casco", FieldSection::Vessel),
    ("cor", "Cor", FieldSection::Vessel),
    ("arqueacao", "Arqueação", FieldSection::Vessel),
    ("potenciaMotor", "Potência do motor (cv)", FieldSection::Vessel),
    ("anoConstrucao", "Ano de construção", FieldSection::Vessel),
    ("seguroApolice", "Apólice de seguro", FieldSection::Vessel),
    ("seguroCompanhia", "Companhia de seguros", FieldSection::Vessel),
    ("dataInicioFormatada", "Data de início (formatada)", FieldSection::Derived),
    ("dataFimFormatada", "Data de fim (formatada)", FieldSection::Derived),
    (
        "dataValidadeCCFormatada",
        "Validade do CC (formatada)",
        FieldSection::Derived,
    ),
    ("dataAtual", "Data de emissão", FieldSection::Derived),
    ("valorMensalExtenso", "Valor mensal por extenso", FieldSection::Derived),
];

/// List every known field, form fields first, then derived ones
pub fn list_fields() -> Vec<FieldInfo> {
    FIELDS
        .iter()
        .map(|&(name, label, section)| FieldInfo {
            name,
            label,
            section,
        })
        .collect()
}

/// Names of the fields a client fills in
pub fn form_field_names() -> impl Iterator<Item = &'static str> {
    FIELDS
        .iter()
        .filter(|(_, _, section)| *section != FieldSection::Derived)
        .map(|(name, _, _)| *name)
}

pub fn is_known_field(name: &str) -> bool {
    FIELDS.iter().any(|(known, _, _)| *known == name)
}
