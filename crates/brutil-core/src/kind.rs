//! # Identifier Kinds
//!
//! One enum naming every identifier the workspace validates. Errors and log
//! events carry an [`IdentifierKind`] rather than a free-form string.

use serde::{Deserialize, Serialize};

/// A kind of Brazilian identifier handled by the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Cadastro de Pessoas Físicas (individual taxpayer registry).
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (corporate taxpayer registry).
    Cnpj,
    /// Código de Endereçamento Postal (postal code).
    Cep,
    /// Landline or mobile telephone number with area code.
    Phone,
    /// PIS/PASEP/NIT worker registration number.
    Pis,
    /// Boleto bancário digitable line.
    Boleto,
    /// CNJ unified judicial process number.
    JudicialProcess,
    /// Email address.
    Email,
    /// Vehicle license plate (legacy or Mercosul).
    LicensePlate,
}

impl IdentifierKind {
    /// Return all identifier kinds as a slice.
    pub fn all() -> &'static [IdentifierKind] {
        &[
            Self::Cpf,
            Self::Cnpj,
            Self::Cep,
            Self::Phone,
            Self::Pis,
            Self::Boleto,
            Self::JudicialProcess,
            Self::Email,
            Self::LicensePlate,
        ]
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Cep => "CEP",
            Self::Phone => "phone",
            Self::Pis => "PIS",
            Self::Boleto => "boleto",
            Self::JudicialProcess => "judicial process",
            Self::Email => "email",
            Self::LicensePlate => "license plate",
        };
        write!(f, "{s}")
    }
}
