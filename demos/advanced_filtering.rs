//! Advanced filtering example for countrydb-rs
//!
//! This example demonstrates:
//! - Flexible multi-field queries, including `CURRENCY.<field>` membership
//! - Fuzzy name matching
//! - Autocomplete and per-language names

use countrydb_rs::prelude::*;
use serde_json::json;

fn codes(records: &[&CountryRecord]) -> Vec<String> {
    records.iter().map(|c| c.iso2().to_string()).collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== countrydb-rs Advanced Filtering Example ===\n");
    let db = CountryDb::sample()?;

    // Example 1: Flexible queries
    println!("--- Example 1: Flexible queries ---");
    let euro_in_europe = FlexibleQuery::new()
        .with("REGION", "Europe")
        .with("CURRENCY.CODE", "EUR");
    println!("Europe + EUR:   {:?}", codes(&db.find_flexible(&euro_in_europe)));

    let by_symbol = FlexibleQuery::from(json!({ "CURRENCY.SYMBOL": "$" }));
    println!("Symbol $:       {:?}", codes(&db.find_flexible(&by_symbol)));

    let by_capital = FlexibleQuery::new().with("CAPITAL", "Sri Jayawardenepura Kotte");
    println!("Capital match:  {:?}", codes(&db.find_flexible(&by_capital)));

    let lenient = FlexibleQuery::new().with("REGION", "").with("ISO2_CODE", "IN");
    println!("Falsy ignored:  {:?}", codes(&db.find_flexible(&lenient)));
    println!();

    // Example 2: Fuzzy matching
    println!("--- Example 2: Fuzzy matching ---");
    for typo in ["Sr Lanka", "Swizerland", "Germny", "Atlantis"] {
        let hit = db.fuzzy_find(typo)?;
        println!("{typo:>12} -> {:?}", hit.map(CountryRecord::name));
    }
    println!();

    // Example 3: Autocomplete
    println!("--- Example 3: Autocomplete ---");
    for (partial, lang) in [("uni", None), ("ir", None), ("sch", Some("DEU"))] {
        let hits: Vec<&str> = db
            .autocomplete(partial, lang)
            .iter()
            .map(|c| c.name())
            .collect();
        println!("{partial:>4} [{}] -> {hits:?}", lang.unwrap_or(DEFAULT_LANGUAGE));
    }
    println!();

    // Example 4: Names by language
    println!("--- Example 4: Names by language ---");
    for entry in db.filter_by_language(Some("DEU")).iter().take(4) {
        println!("{}: {:?}", entry.code, entry.names);
    }
    println!("CH in ITA: {:?}", db.name_in_language("CH", "ITA"));
    println!("LK in DEU: {:?}", db.name_in_language("LK", "DEU"));
    println!();

    // Example 5: Raw record as JSON
    println!("--- Example 5: Record as JSON ---");
    if let Some(ec) = db.find_by_code("EC") {
        println!("{}", serde_json::to_string_pretty(ec)?);
    }

    Ok(())
}
