// tests/ingest_extract.rs
use toulouse_experiences_feed::analyze::{classify_page, CompiledRules};
use toulouse_experiences_feed::ingest::extract::extract_candidates;

const WECANDOO: &str = include_str!("fixtures/wecandoo_listing.html");
const BASE: &str = "https://wecandoo.fr/ateliers/toulouse";

#[test]
fn listing_fixture_yields_filtered_candidates_in_dom_order() {
    let rules = CompiledRules::default();
    let c = extract_candidates(BASE, WECANDOO, &rules);

    let texts: Vec<_> = c.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Accueil",
            "Atelier poterie tournage",
            "Réserver",
            "Création de bijoux en argent",
            "Cours de cuisine japonaise",
            "Notre histoire",
            "Page suivante",
        ]
    );
    assert!(c.iter().all(|c| c.link.starts_with("https://wecandoo.fr/")));
}

#[test]
fn listing_fixture_classifies_workshops() {
    let rules = CompiledRules::default();
    let out = classify_page(extract_candidates(BASE, WECANDOO, &rules), &rules, 15);

    assert_eq!(
        out,
        vec![
            (
                "Atelier poterie tournage".to_string(),
                "https://wecandoo.fr/atelier/poterie-toulouse".to_string()
            ),
            (
                "Création de bijoux en argent".to_string(),
                "https://wecandoo.fr/atelier/bijoux-argent".to_string()
            ),
            (
                "Cours de cuisine japonaise".to_string(),
                "https://wecandoo.fr/atelier/cuisine-japonaise".to_string()
            ),
            (
                "Page suivante".to_string(),
                "https://wecandoo.fr/ateliers/toulouse?page=2".to_string()
            ),
        ]
    );
}

#[test]
fn extraction_and_classification_are_repeatable() {
    let rules = CompiledRules::default();
    let first = classify_page(extract_candidates(BASE, WECANDOO, &rules), &rules, 15);
    let second = classify_page(extract_candidates(BASE, WECANDOO, &rules), &rules, 15);
    assert_eq!(first, second);
}

#[test]
fn thirty_qualifying_links_are_capped_at_fifteen() {
    let mut html = String::from("<ul>");
    for i in 0..30 {
        html.push_str(&format!(
            r#"<li><a href="/ateliers/{i}">Masterclass numéro {i}</a></li>"#
        ));
    }
    html.push_str("</ul>");

    let rules = CompiledRules::default();
    let out = classify_page(
        extract_candidates("https://example.com/agenda/", &html, &rules),
        &rules,
        15,
    );
    assert_eq!(out.len(), 15);
    assert_eq!(out[0].1, "https://example.com/ateliers/0");
}

#[test]
fn garbage_input_yields_nothing() {
    let rules = CompiledRules::default();
    assert!(extract_candidates(BASE, "<<<>>> not html </a>", &rules).is_empty());
    assert!(extract_candidates(BASE, "", &rules).is_empty());
}
