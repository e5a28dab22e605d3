use crate::parsers::html::{ResultExtractor, stripped_strings, unwrap_redirect};
use scraper::Html;

const RESULTS_PAGE: &str = r#"
<html><body>
  <div class="g">
    <a href="/url?q=https://alpha.pl/&sa=U&ved=2ah">
      <h3>Karma dla psów</h3>
      <span class="VuuXrf">Alpha Sp. z o.o.</span>
    </a>
  </div>
  <div class="g">
    <span class="VuuXrf">  Beta S.A.  </span>
    <a href="https://example.com/direct">direct</a>
  </div>
  <div class="g">
    <span class="VuuXrf">Alpha Sp. z o.o.</span>
    <a href="/url?q=https://gamma.com/page">gamma</a>
  </div>
  <span class="VuuXrf">   </span>
  <span class="other">Not a title</span>
</body></html>
"#;

fn extractor() -> ResultExtractor {
    ResultExtractor::new("span.VuuXrf", "/url?q=").unwrap()
}

#[cfg(test)]
mod result_extractor_tests {
    use super::*;

    #[test]
    fn test_titles_in_page_order_with_duplicates() {
        let page = extractor().extract_html(RESULTS_PAGE);
        assert_eq!(
            page.names,
            vec!["Alpha Sp. z o.o.", "Beta S.A.", "Alpha Sp. z o.o."]
        );
    }

    #[test]
    fn test_only_redirect_links_are_unwrapped() {
        let page = extractor().extract_html(RESULTS_PAGE);
        assert_eq!(page.links, vec!["https://alpha.pl/", "https://gamma.com/page"]);
    }

    #[test]
    fn test_empty_page_yields_empty_lists() {
        let page = extractor().extract_html("<html><body><p>Nothing here</p></body></html>");
        assert!(page.names.is_empty());
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_title_text_is_stripped_and_joined() {
        let doc = Html::parse_document(r#"<span class="VuuXrf"> Gamma <em>Pet</em> Food </span>"#);
        assert_eq!(extractor().titles(&doc), vec!["GammaPetFood"]);
    }

    #[test]
    fn test_blank_titles_are_skipped() {
        let doc = Html::parse_document(
            r#"<span class="VuuXrf">  </span><span class="VuuXrf">Kappa S.A.</span>"#,
        );
        assert_eq!(extractor().titles(&doc), vec!["Kappa S.A."]);
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(ResultExtractor::new("span..", "/url?q=").is_err());
    }
}

#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn test_unwrap_redirect() {
        assert_eq!(
            unwrap_redirect("/url?q=https://a.pl/x&sa=U", "/url?q="),
            Some("https://a.pl/x".to_string())
        );
        assert_eq!(
            unwrap_redirect("https://www.google.com/url?q=https://b.pl", "/url?q="),
            Some("https://b.pl".to_string())
        );
        assert_eq!(unwrap_redirect("https://a.pl/", "/url?q="), None);
    }

    #[test]
    fn test_stripped_strings_keep_noscript_text() {
        let doc = Html::parse_document(
            "<html><body><noscript>NIP 1234567890</noscript><p>Stopka</p></body></html>",
        );
        let strings: Vec<&str> = stripped_strings(&doc).collect();
        assert_eq!(strings, vec!["NIP 1234567890", "Stopka"]);
    }

    #[test]
    fn test_stripped_strings_skip_scripts_and_blanks() {
        let doc = Html::parse_document(
            r#"<html><head><script>var nip = "NIP 1234567890";</script><style>b { color: red }</style></head>
            <body><p>  Hello  </p><div>   <span>World</span></div></body></html>"#,
        );
        let strings: Vec<&str> = stripped_strings(&doc).collect();
        assert_eq!(strings, vec!["Hello", "World"]);
    }
}
