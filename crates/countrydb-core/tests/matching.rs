use countrydb_core::prelude::*;
use serde_json::json;

fn sample() -> CountryDb {
    CountryDb::sample().expect("bundled dataset parses")
}

/// LKA borders IND (known) and MDV (not in the collection).
fn scenario() -> CountryDb {
    let store = RecordStore::from_json_str(
        r#"{
            "LKA": {
                "ISO2_CODE": "LK",
                "ISO3_CODE": "LKA",
                "LIST_OF_NAME": { "ENG": ["Sri Lanka"] },
                "CURRENCY": [{ "CODE": ["LKR"], "NAME": ["Sri Lanka Rupee"] }],
                "BORDERS": ["IND", "MDV"]
            },
            "IND": {
                "ISO2_CODE": "IN",
                "ISO3_CODE": "IND",
                "LIST_OF_NAME": { "ENG": ["India"] }
            },
            "XUS": {
                "ISO2_CODE": "XU",
                "ISO3_CODE": "XUS",
                "LIST_OF_NAME": { "ENG": ["Next Day Dollarland"] },
                "CURRENCY": [{ "CODE": ["USN"], "NAME": ["US Dollar (Next day)"] }]
            }
        }"#,
    )
    .unwrap();
    CountryDb::new(store)
}

#[test]
fn iso_codes_round_trip_to_the_same_record() {
    let db = sample();
    for c in db.countries() {
        let by2 = db.find_by_code(c.iso2()).unwrap();
        let by3 = db.find_by_code(c.iso3()).unwrap();
        assert!(std::ptr::eq(by2, by3));
        assert_eq!(db.find_by_code(&by2.iso3).unwrap().iso2, c.iso2);
    }
}

#[test]
fn scenario_lookups() {
    let db = scenario();
    assert_eq!(db.find_by_code("lk").map(|c| c.iso3()), Some("LKA"));
    assert_eq!(db.find_by_name("lanka").map(|c| c.iso3()), Some("LKA"));

    let neighbours = db.neighbors("LKA");
    assert_eq!(neighbours.len(), 1);
    assert_eq!(neighbours[0].iso3(), "IND");

    let lkr: Vec<&str> = db
        .find_flexible(&FlexibleQuery::new().with("CURRENCY.CODE", "LKR"))
        .iter()
        .map(|c| c.iso3())
        .collect();
    assert_eq!(lkr, ["LKA"]);
}

#[test]
fn find_by_name_ignores_case_and_padding() {
    let db = sample();
    let expected = db.find_by_name("Sri Lanka").unwrap();
    for q in [" sri ", "SRI", "sri", "ceylon"] {
        assert!(std::ptr::eq(db.find_by_name(q).unwrap(), expected), "query {q:?}");
    }
    assert!(db.find_by_name("").is_none());
    assert!(db.find_by_name("   ").is_none());
    assert!(db.find_by_name("Atlantis").is_none());
}

#[test]
fn find_by_name_searches_every_language() {
    let db = sample();
    assert_eq!(db.find_iso2("Deutschland"), Some("DE"));
    assert_eq!(db.find_iso3("éire"), Some("IRL"));
    assert_eq!(db.find_iso2("Atlantis"), None);
}

#[test]
fn find_by_name_is_first_match_not_best_match() {
    let db = sample();
    // "guinea" is a substring of Papua New Guinea too; Guinea is loaded first.
    assert_eq!(db.find_iso3("guinea"), Some("GIN"));
    // "united" hits United States before United Kingdom
    assert_eq!(db.find_iso2("united"), Some("US"));
}

#[test]
fn all_names_of_unknown_code_is_empty() {
    let db = sample();
    assert!(db.all_names("XX").is_empty());
    assert!(db.all_names("").is_empty());
    assert_eq!(
        db.all_names("ch"),
        ["Switzerland", "Swiss Confederation", "Schweiz", "Suisse", "Svizzera"]
    );
}

#[test]
fn filter_by_language_falls_back_to_default() {
    let db = sample();
    let de = db.filter_by_language(Some("DEU"));
    assert_eq!(de.len(), db.countries().len());

    let germany = de.iter().find(|n| n.code == "DE").unwrap();
    assert_eq!(germany.names[0], "Deutschland");
    let lanka = de.iter().find(|n| n.code == "LK").unwrap();
    assert_eq!(lanka.names[0], "Sri Lanka");

    let default = db.filter_by_language(None);
    assert_eq!(default[0].code, "LK");
    assert_eq!(default[0].names[0], "Sri Lanka");
}

#[test]
fn name_in_language_has_no_fallback() {
    let db = sample();
    assert_eq!(db.name_in_language("CH", "FRA"), Some("Suisse"));
    assert_eq!(db.name_in_language("LK", "FRA"), None);
    assert_eq!(db.name_in_language("XX", "ENG"), None);
}

#[test]
fn field_lookups() {
    let db = sample();

    assert_eq!(
        db.find_by_capital("sri jayawardenepura kotte").map(|c| c.iso3()),
        Some("LKA")
    );
    assert!(db.find_by_capital("Atlantis").is_none());
    assert!(db.find_by_capital("Sri").is_none());

    let sinhala: Vec<&str> = db.find_by_language("sinhalese").iter().map(|c| c.iso3()).collect();
    assert_eq!(sinhala, ["LKA"]);

    let ist: Vec<&str> = db.find_by_timezone("UTC+05:30").iter().map(|c| c.iso3()).collect();
    assert_eq!(ist, ["LKA", "IND"]);
    assert!(db.find_by_timezone("UTC+05").is_empty());

    let asia: Vec<&str> = db.find_by_region(" ASIA ").iter().map(|c| c.iso3()).collect();
    assert_eq!(asia, ["LKA", "IND"]);
    assert!(db.find_by_region("As").is_empty());
}

#[test]
fn phone_codes_ignore_plus_and_accept_single_strings() {
    let db = sample();
    let lk: Vec<&str> = db.find_by_phone_code("+94").iter().map(|c| c.iso2()).collect();
    assert_eq!(lk, ["LK"]);
    // Ecuador stores its phone code as a plain string
    let ec: Vec<&str> = db.find_by_phone_code("593").iter().map(|c| c.iso2()).collect();
    assert_eq!(ec, ["EC"]);
    assert!(db.find_by_phone_code("9").is_empty());
    assert!(db.find_by_phone_code("+").is_empty());
}

#[test]
fn currency_matches_code_exactly_or_name_partially() {
    let db = sample();
    let usd: Vec<&str> = db.find_by_currency("usd").iter().map(|c| c.iso2()).collect();
    assert_eq!(usd, ["US", "EC"]);

    let rupee: Vec<&str> = db.find_by_currency("rupee").iter().map(|c| c.iso2()).collect();
    assert_eq!(rupee, ["LK", "IN"]);

    let euro: Vec<&str> = db.find_by_currency("EUR").iter().map(|c| c.iso2()).collect();
    assert_eq!(euro, ["IE", "DE", "CH"]); // CH through "WIR Euro"

    // no code equals "US", but "US Dollar" contains it
    assert!(!db.find_by_currency("US").is_empty());
    assert!(db.find_by_currency("").is_empty());
}

#[test]
fn neighbours_skip_unknown_borders() {
    let db = sample();
    let india: Vec<&str> = db.neighbors("IN").iter().map(|c| c.iso3()).collect();
    assert_eq!(india, ["LKA"]);
    assert!(db.neighbors("AQ").is_empty());
    assert!(db.neighbors("XX").is_empty());
}

#[test]
fn scalar_getters() {
    let db = sample();
    assert_eq!(db.demonym("LKA"), Some("Sri Lankan"));
    assert_eq!(db.area("LKA"), Some(65610.0));
    assert_eq!(db.population("LK"), Some(21_919_000));

    assert_eq!(db.demonym("XX"), None);
    assert_eq!(db.area("XX"), None);
    assert_eq!(db.population("AQ"), None);
}

#[test]
fn code_validation_and_flags() {
    let db = sample();
    assert!(db.is_valid_code("lk"));
    assert!(db.is_valid_code("DEU"));
    assert!(!db.is_valid_code("XX"));
    assert_eq!(flag_emoji("LK"), "🇱🇰");
}

#[test]
fn empty_flexible_query_returns_everything_in_order() {
    let db = sample();
    let all: Vec<&CountryRecord> = db.find_flexible(&FlexibleQuery::new());
    assert_eq!(all.len(), db.countries().len());
    assert!(all.iter().zip(db.countries()).all(|(a, b)| std::ptr::eq(*a, b)));
}

#[test]
fn flexible_currency_code_is_membership_not_prefix() {
    let db = scenario();
    let usn: Vec<&str> = db
        .find_flexible(&FlexibleQuery::from(json!({ "CURRENCY.CODE": "USN" })))
        .iter()
        .map(|c| c.iso3())
        .collect();
    assert_eq!(usn, ["XUS"]);
    assert!(db
        .find_flexible(&FlexibleQuery::from(json!({ "CURRENCY.CODE": "USD" })))
        .is_empty());

    let sample = sample();
    let usd: Vec<&str> = sample
        .find_flexible(&FlexibleQuery::from(json!({ "CURRENCY.CODE": "USD" })))
        .iter()
        .map(|c| c.iso2())
        .collect();
    assert_eq!(usd, ["US", "EC"]);
}

#[test]
fn flexible_direct_fields_are_strict_and_combined() {
    let db = sample();
    let q = FlexibleQuery::from(json!({ "REGION": "Europe", "CURRENCY.CODE": "EUR" }));
    let hits: Vec<&str> = db.find_flexible(&q).iter().map(|c| c.iso2()).collect();
    assert_eq!(hits, ["IE", "DE"]);

    // name search is lenient, flexible search is not
    assert_eq!(db.find_by_region("europe").len(), 4);
    assert!(db
        .find_flexible(&FlexibleQuery::from(json!({ "REGION": "europe" })))
        .is_empty());

    // unmodeled fields are queryable too
    let tld = FlexibleQuery::new().with("TLD.x", "y");
    assert!(db.find_flexible(&tld).is_empty());
    let by_iso = FlexibleQuery::new().with("ISO2_CODE", "LK");
    assert_eq!(db.find_flexible(&by_iso).len(), 1);
}

#[cfg(feature = "fuzzy")]
mod fuzzy {
    use super::*;

    #[test]
    fn tolerates_small_spelling_mistakes() {
        let db = sample();
        assert_eq!(db.fuzzy_find("Sr Lanka").unwrap().map(|c| c.iso3()), Some("LKA"));
        assert_eq!(db.fuzzy_find("Swizerland").unwrap().map(|c| c.iso2()), Some("CH"));
        assert_eq!(db.fuzzy_find("germnay").unwrap().map(|c| c.iso2()), Some("DE"));
    }

    #[test]
    fn single_words_of_longer_names_are_reachable() {
        let db = sample();
        assert_eq!(db.fuzzy_find("Lanka").unwrap().map(|c| c.iso3()), Some("LKA"));
    }

    #[test]
    fn equal_distance_goes_to_the_first_record() {
        let db = sample();
        // "guinea" is also a word of "Papua New Guinea", which loads later
        assert_eq!(db.fuzzy_find("Guinea").unwrap().map(|c| c.iso3()), Some("GIN"));
        assert_eq!(
            db.fuzzy_find("papua new guinea").unwrap().map(|c| c.iso3()),
            Some("PNG")
        );
    }

    #[test]
    fn distant_queries_find_nothing() {
        let db = sample();
        assert!(db.fuzzy_find("Atlantis").unwrap().is_none());
        assert!(db.fuzzy_find("xq").unwrap().is_none());
    }

    #[test]
    fn blank_query_skips_index_construction() {
        let db = sample();
        assert!(db.fuzzy_find("").unwrap().is_none());
        assert!(db.fuzzy_find("  ").unwrap().is_none());
        assert!(!db.is_fuzzy_index_built());

        db.fuzzy_find("India").unwrap();
        assert!(db.is_fuzzy_index_built());
    }

    #[test]
    fn repeated_queries_reuse_the_index() {
        let db = sample();
        let first = db.fuzzy_find("United States").unwrap().map(|c| c.iso3());
        let second = db.fuzzy_find("United Kingdom").unwrap().map(|c| c.iso3());
        assert_eq!(first, Some("USA"));
        assert_eq!(second, Some("GBR"));
    }

    #[test]
    fn stricter_threshold_rejects_more() {
        let store = RecordStore::sample().unwrap();
        let strict =
            CountryDb::with_options(store, MatchOptions::default().with_fuzzy_threshold(0.05));
        assert!(strict.fuzzy_find("Sr Lanka").unwrap().is_none());
        assert_eq!(strict.fuzzy_find("sri lanka").unwrap().map(|c| c.iso3()), Some("LKA"));
    }
}

// cargo test -p countrydb-core --no-default-features --features json
#[cfg(not(feature = "fuzzy"))]
#[test]
fn fuzzy_without_backend_reports_missing_capability() {
    let db = sample();
    assert!(matches!(
        db.fuzzy_find("Sr Lanka"),
        Err(CountryError::MissingCapability(_))
    ));
    assert!(db.fuzzy_find("").unwrap().is_none());
}
