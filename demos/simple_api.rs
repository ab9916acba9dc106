//! Simple API usage with convenience functions
//!
//! This example shows the high-level convenience functions for the most
//! common use cases. It talks to the public TheMealDB API.

use recipe_finder::{lookup_meal, search_meals, SearchOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Search: term → list of matches
    println!("=== Search ===");
    let meals = match search_meals("Arrabiata").await? {
        SearchOutcome::Matches(meals) => meals,
        SearchOutcome::NoMatches => {
            println!("No recipes found");
            return Ok(());
        }
    };
    for meal in &meals {
        match &meal.category {
            Some(category) => println!("  {} ({})", meal.name, category),
            None => println!("  {}", meal.name),
        }
    }

    // Lookup: id → full record
    println!("\n=== Lookup ===");
    if let Some(detail) = lookup_meal(&meals[0].id).await? {
        println!("{}", detail.name);
        println!("Ingredients:");
        for item in &detail.ingredients {
            let line = format!("{} {}", item.measure, item.name);
            println!("  - {}", line.trim());
        }
    }

    Ok(())
}
