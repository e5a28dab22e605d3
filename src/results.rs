use serde::Serialize;

/// Placeholder stored in place of any field that could not be found
pub const NO_DATA: &str = "No data";

/// What a search results page yielded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Result title labels, in page order
    pub names: Vec<String>,

    /// Unwrapped outbound links, in page order (not aligned with `names`)
    pub links: Vec<String>,
}

/// CEO and NIP as reported by the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryDetails {
    pub ceo: String,
    pub nip: String,
}

impl RegistryDetails {
    pub fn new(ceo: impl Into<String>, nip: impl Into<String>) -> Self {
        Self {
            ceo: ceo.into(),
            nip: nip.into(),
        }
    }

    /// Both fields set to the sentinel
    pub fn no_data() -> Self {
        Self::new(NO_DATA, NO_DATA)
    }
}

/// One row of the output table; fields serialize in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyRecord {
    #[serde(rename = "Company")]
    pub company: String,

    #[serde(rename = "NIP")]
    pub nip: String,

    #[serde(rename = "CEO")]
    pub ceo: String,
}

impl CompanyRecord {
    pub fn new(company: impl Into<String>, details: RegistryDetails) -> Self {
        Self {
            company: company.into(),
            nip: details.nip,
            ceo: details.ceo,
        }
    }

    /// Whether any field carries real data
    pub fn is_enriched(&self) -> bool {
        self.nip != NO_DATA || self.ceo != NO_DATA
    }
}
