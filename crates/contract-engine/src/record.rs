//! Contract records and derived display fields
//!
//! A [`ContractRecord`] is the flat snapshot of the form at generation time.
//! [`process_contract_data`] copies it and adds the display fields the
//! templates refer to (formatted dates, the fee in words, the issue date).

use std::collections::BTreeMap;

use chrono::{Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::{format_long_date, format_short_date, DATE_PLACEHOLDER};
use crate::words::euros_in_words;

/// Shown in place of the fee in words when no fee was entered
pub const AMOUNT_PLACEHOLDER: &str = "_________";

/// Title used when the configuration does not override it
pub const DEFAULT_TITLE_PREFIX: &str =
    "CONTRATO DE LOCAÇÃO DE LUGAR DE ACOSTAGEM ANCORADOURO DE RIO MAU";

pub const START_DATE_FORMATTED: &str = "dataInicioFormatada";
pub const END_DATE_FORMATTED: &str = "dataFimFormatada";
pub const ID_VALIDITY_FORMATTED: &str = "dataValidadeCCFormatada";
pub const ISSUE_DATE: &str = "dataAtual";
pub const MONTHLY_FEE_IN_WORDS: &str = "valorMensalExtenso";

/// Keys added by [`process_contract_data`]
pub const DERIVED_KEYS: [&str; 5] = [
    START_DATE_FORMATTED,
    END_DATE_FORMATTED,
    ID_VALIDITY_FORMATTED,
    ISSUE_DATE,
    MONTHLY_FEE_IN_WORDS,
];

/// (source field, derived field) pairs for the short dates
const DATE_FIELDS: [(&str, &str); 3] = [
    ("dataInicio", START_DATE_FORMATTED),
    ("dataFim", END_DATE_FORMATTED),
    ("dataValidadeCC", ID_VALIDITY_FORMATTED),
];

/// Field name to value mapping captured from the contract form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractRecord {
    fields: BTreeMap<String, String>,
}

impl ContractRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(name, value)` pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Value of a field that was actually filled in
    pub fn filled(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Demo data used to fill the form while testing
    pub fn sample() -> Self {
        Self::sample_on(Local::now().date_naive())
    }

    /// Demo data with the lease starting on `today` and running one month
    pub fn sample_on(today: NaiveDate) -> Self {
        let end = today.checked_add_months(Months::new(1)).unwrap_or(today);

        let mut record = Self::from_pairs(crate::fields::form_field_names().map(|n| (n, "")));
        for (key, value) in [
            ("tipoPessoa", "singular"),
            ("nomeCompleto", "João Maria da Silva"),
            ("numeroCC", "12345678 9 ZZ1"),
            ("dataValidadeCC", "2030-12-31"),
            ("nif", "250123456"),
            ("morada", "Rua das Flores, 123, 1000-100 Lisboa"),
            ("emailCliente", "joao.silva@email.com"),
            ("telefoneCliente", "912345678"),
            ("numeroLugar", "42"),
            ("valorMensal", "175"),
            ("nomeEmbarcacao", "Belo Mar"),
            ("bandeira", "Portuguesa"),
            ("portoRegisto", "Lisboa"),
            ("numeroRegisto", "LX-1234-AB"),
            ("comprimento", "12"),
            ("boca", "4"),
            ("pontal", "2"),
            ("materialCasco", "Fibra de Vidro"),
            ("cor", "Branco"),
            ("arqueacao", "15"),
            ("potenciaMotor", "50"),
            ("anoConstrucao", "2015"),
            ("seguroApolice", "S-987654"),
            ("seguroCompanhia", "Companhia de Seguros Segura"),
        ] {
            record.insert(key, value);
        }
        record.insert("dataInicio", today.format("%Y-%m-%d").to_string());
        record.insert("dataFim", end.format("%Y-%m-%d").to_string());
        record
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContractRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Whether the client is a natural or a collective person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonType {
    Singular,
    Coletiva,
}

impl PersonType {
    /// Read `tipoPessoa`; anything but `coletiva` is a natural person
    pub fn of(record: &ContractRecord) -> Self {
        match record.get("tipoPessoa") {
            Some("coletiva") => PersonType::Coletiva,
            _ => PersonType::Singular,
        }
    }
}

/// Name the contract is issued to
pub fn client_name(record: &ContractRecord) -> &str {
    let key = match PersonType::of(record) {
        PersonType::Coletiva => "nomeEmpresa",
        PersonType::Singular => "nomeCompleto",
    };
    record.get(key).unwrap_or_default()
}

/// Document title, `<prefix> - <client name>`
pub fn document_title(record: &ContractRecord, prefix: &str) -> String {
    format!("{} - {}", prefix, client_name(record))
}

/// Derive the display fields, issued today
pub fn process_contract_data(record: &ContractRecord) -> ContractRecord {
    process_contract_data_on(record, Local::now().date_naive())
}

/// Derive the display fields for a contract issued on `today`
///
/// The input is left untouched; every derived key is present in the result.
pub fn process_contract_data_on(record: &ContractRecord, today: NaiveDate) -> ContractRecord {
    let mut data = record.clone();

    for (source, target) in DATE_FIELDS {
        let formatted = match record.filled(source) {
            Some(value) => format_short_date(value).unwrap_or_else(|| {
                tracing::warn!(field = source, value, "Unrecognised date, leaving it blank");
                DATE_PLACEHOLDER.to_string()
            }),
            None => DATE_PLACEHOLDER.to_string(),
        };
        data.insert(target, formatted);
    }

    data.insert(ISSUE_DATE, format_long_date(today));

    let fee_in_words = record
        .filled("valorMensal")
        .map(euros_in_words)
        .unwrap_or_else(|| AMOUNT_PLACEHOLDER.to_string());
    data.insert(MONTHLY_FEE_IN_WORDS, fee_in_words);

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_derived_fields_from_filled_record() {
        let record = ContractRecord::from_pairs([
            ("valorMensal", "175"),
            ("dataInicio", "2024-01-15"),
            ("dataFim", "2024-02-15"),
            ("dataValidadeCC", "2030-12-31"),
            ("nomeCompleto", "Ana Sousa"),
        ]);

        let data = process_contract_data_on(&record, day(2024, 1, 10));

        assert_eq!(data.get(MONTHLY_FEE_IN_WORDS), Some("cento e setenta e cinco euros"));
        assert_eq!(data.get(START_DATE_FORMATTED), Some("15/01/2024"));
        assert_eq!(data.get(END_DATE_FORMATTED), Some("15/02/2024"));
        assert_eq!(data.get(ID_VALIDITY_FORMATTED), Some("31/12/2030"));
        assert_eq!(data.get(ISSUE_DATE), Some("10 de janeiro de 2024"));
        assert_eq!(data.get("nomeCompleto"), Some("Ana Sousa"));
    }

    #[test]
    fn test_derived_fields_always_present() {
        let data = process_contract_data_on(&ContractRecord::new(), day(2024, 6, 1));

        for key in DERIVED_KEYS {
            assert!(data.contains_key(key), "missing derived key {}", key);
        }
        assert_eq!(data.get(START_DATE_FORMATTED), Some(DATE_PLACEHOLDER));
        assert_eq!(data.get(MONTHLY_FEE_IN_WORDS), Some(AMOUNT_PLACEHOLDER));
    }

    #[test]
    fn test_empty_values_use_placeholders() {
        let record = ContractRecord::from_pairs([("valorMensal", ""), ("dataFim", "")]);
        let data = process_contract_data_on(&record, day(2024, 6, 1));

        assert_eq!(data.get(END_DATE_FORMATTED), Some(DATE_PLACEHOLDER));
        assert_eq!(data.get(MONTHLY_FEE_IN_WORDS), Some(AMOUNT_PLACEHOLDER));
    }

    #[test]
    fn test_unparseable_values_degrade() {
        let record = ContractRecord::from_pairs([("valorMensal", "abc"), ("dataInicio", "ontem")]);
        let data = process_contract_data_on(&record, day(2024, 6, 1));

        assert_eq!(data.get(MONTHLY_FEE_IN_WORDS), Some(""));
        assert_eq!(data.get(START_DATE_FORMATTED), Some(DATE_PLACEHOLDER));
    }

    #[test]
    fn test_input_record_not_mutated() {
        let record = ContractRecord::from_pairs([("valorMensal", "20")]);
        let before = record.clone();
        let _ = process_contract_data_on(&record, day(2024, 6, 1));
        assert_eq!(record, before);
    }

    #[test]
    fn test_recomputed_on_each_call() {
        let record = ContractRecord::from_pairs([("valorMensal", "20")]);
        let first = process_contract_data_on(&record, day(2024, 6, 1));
        let again = process_contract_data_on(&first, day(2024, 6, 2));
        assert_eq!(again.get(ISSUE_DATE), Some("2 de junho de 2024"));
    }

    #[test]
    fn test_client_name_and_title() {
        let singular = ContractRecord::from_pairs([
            ("tipoPessoa", "singular"),
            ("nomeCompleto", "João Maria da Silva"),
            ("nomeEmpresa", "Ignored, Lda."),
        ]);
        assert_eq!(client_name(&singular), "João Maria da Silva");

        let coletiva = ContractRecord::from_pairs([
            ("tipoPessoa", "coletiva"),
            ("nomeCompleto", "Ignored"),
            ("nomeEmpresa", "Náutica Sul, Lda."),
        ]);
        assert_eq!(PersonType::of(&coletiva), PersonType::Coletiva);
        assert_eq!(
            document_title(&coletiva, DEFAULT_TITLE_PREFIX),
            "CONTRATO DE LOCAÇÃO DE LUGAR DE ACOSTAGEM ANCORADOURO DE RIO MAU - Náutica Sul, Lda."
        );

        assert_eq!(client_name(&ContractRecord::new()), "");
    }

    #[test]
    fn test_sample_record() {
        let sample = ContractRecord::sample_on(day(2024, 1, 31));

        assert_eq!(sample.get("dataInicio"), Some("2024-01-31"));
        assert_eq!(sample.get("dataFim"), Some("2024-02-29"));
        assert_eq!(sample.get("nomeEmpresa"), Some(""));
        assert_eq!(client_name(&sample), "João Maria da Silva");
    }

    #[test]
    fn test_record_json_shape() {
        let record: ContractRecord =
            serde_json::from_str(r#"{"nomeCompleto":"Ana","valorMensal":"175"}"#).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("nomeCompleto"), Some("Ana"));
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"nomeCompleto":"Ana","valorMensal":"175"}"#
        );
    }
}
