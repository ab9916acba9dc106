use std::env;
use std::io::{self, BufRead, Write};

use recipe_finder::{FinderConfig, MealDetail, RecipeFinder, ViewState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = FinderConfig::load()?;
    let mut finder = RecipeFinder::from_config(&config)?;

    // An initial search can be passed on the command line
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("Type a meal name to search, a number to open a result, 'b' to go back, 'q' to quit.");
    } else {
        finder.search(args.join(" ")).await;
        print_view(finder.view());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "q" | "quit" => break,
            "b" | "back" => finder.back(),
            _ => match line.parse::<usize>() {
                Ok(number) if number >= 1 => finder.select(number - 1).await,
                _ => finder.search(line).await,
            },
        }

        print_view(finder.view());
    }

    Ok(())
}

/// Plain-text projection of the page for the terminal.
fn print_view(view: &ViewState) {
    if let Some(banner) = view.banner() {
        println!("{}", banner);
    }
    if !view.heading().is_empty() {
        println!("{}", view.heading());
    }

    if view.detail_visible() {
        if let Some(meal) = view.detail() {
            print_detail(meal);
        }
        return;
    }

    for (number, meal) in view.results().iter().enumerate() {
        match &meal.category {
            Some(category) => println!("{:>3}. {} ({})", number + 1, meal.name, category),
            None => println!("{:>3}. {}", number + 1, meal.name),
        }
    }
}

fn print_detail(meal: &MealDetail) {
    println!("{}", meal.name);
    println!(
        "Category: {}",
        meal.category.as_deref().unwrap_or("Uncategorized")
    );
    println!();
    println!("Instructions");
    println!("{}", meal.instructions);
    println!();
    println!("Ingredients");
    for item in &meal.ingredients {
        let line = format!("{} {}", item.measure, item.name);
        println!("  - {}", line.trim());
    }
    if let Some(youtube) = &meal.youtube {
        println!();
        println!("Video: {}", youtube);
    }
}
