//! Error handling example for countrydb-rs
//!
//! This example demonstrates proper error handling and edge cases

use countrydb_rs::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== countrydb-rs Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading a dataset with error handling ---");
    match CountryDb::load_from_path("does/not/exist.json") {
        Ok(db) => println!("✓ Loaded {} countries", db.countries().len()),
        Err(e) => eprintln!("✗ Failed to load dataset: {e}"),
    }
    match RecordStore::from_json_str("{ not json") {
        Ok(store) => println!("✓ Parsed {} records", store.len()),
        Err(e) => eprintln!("✗ Failed to parse dataset: {e}"),
    }
    println!();

    let db = CountryDb::sample()?;

    // Example 2: Unknown and malformed codes
    println!("--- Example 2: Unknown and malformed codes ---");
    for code in ["XX", "", "A", "ABCD", "123"] {
        match db.find_by_code(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.iso2()),
            None => println!("  Not found: {code:?} (valid: {})", db.is_valid_code(code)),
        }
    }
    println!();

    // Example 3: Blank queries never match
    println!("--- Example 3: Blank queries ---");
    println!("  find_by_name(\"  \"):     {:?}", db.find_by_name("  ").map(|c| c.iso2()));
    println!("  find_by_currency(\"\"):   {} results", db.find_by_currency("").len());
    println!("  fuzzy_find(\"\"):         {:?}", db.fuzzy_find("")?.map(|c| c.iso2()));
    println!();

    // Example 4: Fuzzy search without the capability
    println!("--- Example 4: Fuzzy search ---");
    match db.fuzzy_find("Indai") {
        Ok(Some(country)) => println!("  Best match: {}", country.name()),
        Ok(None) => println!("  No close match"),
        Err(CountryError::MissingCapability(what)) => {
            println!("  Fuzzy search unavailable: {what}")
        }
        Err(e) => return Err(e),
    }
    println!();

    // Example 5: Optional fields
    println!("--- Example 5: Optional fields ---");
    if let Some(aq) = db.find_by_code("AQ") {
        println!("  Country:    {} ({})", aq.name(), aq.iso2());
        println!("  Capital:    {:?}", aq.capital());
        println!("  Currencies: {}", aq.currencies().len());
        println!("  Population: {:?}", aq.population());
    }

    Ok(())
}
