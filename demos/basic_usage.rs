//! Basic usage example for countrydb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled sample dataset
//! - Look countries up by code and by name
//! - Read per-country fields (capital, demonym, area, population)
//! - Search by phone code, currency and timezone

use countrydb_rs::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== countrydb-rs Basic Usage Example ===\n");

    println!("Loading sample dataset...");
    let db = CountryDb::sample()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: List countries
    println!("--- Example 1: List all countries ---");
    let countries = db.countries();
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!(
            "{}. {} {} ({})",
            i + 1,
            flag_emoji(country.iso2()),
            country.name(),
            country.iso2()
        );
    }
    println!("... and {} more\n", countries.len().saturating_sub(5));

    // Example 2: Lookup by code
    println!("--- Example 2: Find country by ISO code ---");
    for code in ["lk", "LKA", " us "] {
        match db.find_by_code(code) {
            Some(c) => println!("{code:>6} -> {} ({}/{})", c.name(), c.iso2(), c.iso3()),
            None => println!("{code:>6} -> not found"),
        }
    }
    println!();

    // Example 3: Lookup by name
    println!("--- Example 3: Find country by name ---");
    for name in ["Sri Lanka", "lanka", "Ceylon", "Deutschland"] {
        println!("{name:>12} -> {:?}", db.find_iso3(name));
    }
    println!();

    // Example 4: Per-country fields
    println!("--- Example 4: Country details ---");
    if let Some(lk) = db.find_by_code("LK") {
        println!("Capital:    {:?}", lk.capital());
        println!("Demonym:    {:?}", db.demonym("LK"));
        println!("Area:       {:?} km²", db.area("LK"));
        println!("Population: {:?}", db.population("LK"));
        println!("Languages:  {}", lk.languages().join(", "));
        let neighbours: Vec<&str> = db.neighbors("LK").iter().map(|c| c.name()).collect();
        println!("Neighbours: {}", neighbours.join(", "));
    }
    println!();

    // Example 5: Field searches
    println!("--- Example 5: Search by phone code, currency and timezone ---");
    let by_phone: Vec<&str> = db.find_by_phone_code("+94").iter().map(|c| c.iso2()).collect();
    println!("Phone +94:        {by_phone:?}");
    let by_currency: Vec<&str> = db.find_by_currency("USD").iter().map(|c| c.iso2()).collect();
    println!("Currency USD:     {by_currency:?}");
    let by_tz: Vec<&str> = db
        .find_by_timezone("UTC+05:30")
        .iter()
        .map(|c| c.iso2())
        .collect();
    println!("Timezone +05:30:  {by_tz:?}");

    Ok(())
}
