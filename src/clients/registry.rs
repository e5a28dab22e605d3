use crate::clients::HttpClient;
use crate::error::Result;
use crate::results::{NO_DATA, RegistryDetails};
use serde_json::Value;
use url::Url;

/// Board members in the current KRS extract
const REPRESENTATION_PATH: &str = "/odpis/dane/dzial2/reprezentacja/sklad";
/// Tax identifier in the current KRS extract
const NIP_PATH: &str = "/odpis/dane/dzial1/danePodmiotu/identyfikatory/nip";
/// Role looked for among board members (compared upper-cased)
const CEO_ROLE: &str = "PREZES ZARZĄDU";

/// Client for the public KRS registry API
pub struct RegistryClient {
    http: HttpClient,
    base_url: String,
}

impl RegistryClient {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the current extract for a KRS number
    pub fn endpoint(&self, krs: &str) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/api/krs/OdpisAktualny/{}",
            self.base_url, krs
        ))?;
        url.query_pairs_mut()
            .append_pair("rejestr", "P")
            .append_pair("format", "json");
        Ok(url)
    }

    /// Fetches CEO and NIP for a KRS number.
    ///
    /// Any request failure is logged and yields "No data" for both fields.
    pub async fn lookup(&self, krs: &str) -> RegistryDetails {
        match self.fetch(krs).await {
            Ok(document) => details_from_document(&document),
            Err(e) => {
                ::log::error!("Error fetching data from KRS API for KRS {}: {}", krs, e);
                RegistryDetails::no_data()
            }
        }
    }

    async fn fetch(&self, krs: &str) -> Result<Value> {
        let url = self.endpoint(krs)?;
        self.http.get_json(url).await
    }
}

/// Reads CEO and NIP out of a registry extract. Missing or oddly shaped
/// fields fall back to "No data" independently.
pub fn details_from_document(document: &Value) -> RegistryDetails {
    let ceo = find_ceo(document).unwrap_or_else(|| NO_DATA.to_string());
    let nip = find_nip(document).unwrap_or_else(|| NO_DATA.to_string());
    RegistryDetails { ceo, nip }
}

/// "First Last" of the first board member holding the president role
fn find_ceo(document: &Value) -> Option<String> {
    let members = document.pointer(REPRESENTATION_PATH)?.as_array()?;

    let president = members.iter().find(|member| {
        member
            .get("funkcjaWOrganie")
            .and_then(Value::as_str)
            .is_some_and(|role| role.to_uppercase().contains(CEO_ROLE))
    })?;

    let first_name = text_at(president, "/imiona/imie");
    let last_name = text_at(president, "/nazwisko/nazwiskoICzlon");
    Some(format!("{} {}", first_name, last_name))
}

fn find_nip(document: &Value) -> Option<String> {
    match document.pointer(NIP_PATH)? {
        Value::String(nip) => Some(nip.clone()),
        Value::Number(nip) => Some(nip.to_string()),
        _ => None,
    }
}

fn text_at(value: &Value, pointer: &str) -> String {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or(NO_DATA)
        .to_string()
}
