#![allow(dead_code)]

use krs_finder::FinderConfig;
use serde_json::json;
use std::path::Path;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Search results page with one titled, redirect-wrapped result per name
pub fn results_page(names: &[&str]) -> String {
    let items: String = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"<div class="g"><a href="/url?q=https://firma{i}.pl/&sa=U&ved=0"><h3>Oferta</h3><span class="VuuXrf">{name}</span></a></div>"#
            )
        })
        .collect();
    format!("<html><body><div id=\"search\">{}</div></body></html>", items)
}

/// Search page whose snippet mentions a KRS number
pub fn krs_page(krs: &str) -> String {
    format!(
        "<html><body><div><span>Sąd Rejonowy, numer KRS: {}</span></div></body></html>",
        krs
    )
}

/// Registry extract with a single president and a NIP
pub fn registry_extract(first: &str, last: &str, nip: &str) -> serde_json::Value {
    json!({
        "odpis": {
            "rodzaj": "Aktualny",
            "dane": {
                "dzial1": {
                    "danePodmiotu": {
                        "nazwa": "TEST",
                        "identyfikatory": { "regon": "12345678900000", "nip": nip }
                    }
                },
                "dzial2": {
                    "reprezentacja": {
                        "nazwaOrganu": "ZARZĄD",
                        "sklad": [
                            {
                                "nazwisko": { "nazwiskoICzlon": last },
                                "imiona": { "imie": first },
                                "funkcjaWOrganie": "PREZES ZARZĄDU"
                            }
                        ]
                    }
                }
            }
        }
    })
}

/// Config pointing both endpoints at the mock server, without pacing
pub fn test_config(server: &MockServer, output: &Path) -> FinderConfig {
    FinderConfig {
        search_url: format!("{}/search", server.uri()),
        registry_url: server.uri(),
        delay_ms: 0,
        timeout_secs: 5,
        output_path: output.to_string_lossy().into_owned(),
        ..FinderConfig::default()
    }
}

pub async fn mount_results(server: &MockServer, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("num", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(names)))
        .mount(server)
        .await;
}

pub async fn mount_search_page(server: &MockServer, query: &str, html: String) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

pub async fn mount_registry(server: &MockServer, krs: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/api/krs/OdpisAktualny/{}", krs)))
        .and(query_param("rejestr", "P"))
        .and(query_param("format", "json"))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
        .collect()
}
