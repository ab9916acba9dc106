//! Driving a full session through the RecipeFinder controller
//!
//! This example walks the same path a user takes in the app:
//! 1. Search for a term
//! 2. Open the first result
//! 3. Go back to the list

use std::time::Duration;

use recipe_finder::{RecipeFinder, UiState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut finder = RecipeFinder::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    println!("=== Step 1: search ===");
    finder.search("chicken").await;
    println!("state: {:?}", finder.view().ui());
    for (number, meal) in finder.view().results().iter().enumerate() {
        println!("{:>3}. {}", number + 1, meal.name);
    }

    if finder.view().ui() != UiState::ResultsShown {
        return Ok(());
    }

    println!("\n=== Step 2: open the first result ===");
    finder.select(0).await;
    if let Some(meal) = finder.view().detail() {
        println!("{}", meal.name);
        println!("{} ingredients", meal.ingredients.len());
    }

    println!("\n=== Step 3: back to the list ===");
    finder.back();
    println!("state: {:?}", finder.view().ui());

    println!("\n=== Rendered page ===");
    println!("{}", finder.render());

    Ok(())
}
