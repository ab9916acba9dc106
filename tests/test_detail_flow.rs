use mockito::Matcher;
use recipe_finder::{RecipeFinder, UiState};

fn meal_list(meals_json: &str) -> String {
    format!(r#"{{"meals":{}}}"#, meals_json)
}

/// Builds a finder against `server` with one search result already shown.
async fn finder_with_results(server: &mut mockito::ServerGuard) -> RecipeFinder {
    let _search = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "beef".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meal_list(
            r#"[{"idMeal": "52874", "strMeal": "Beef and Mustard Pie", "strCategory": "Beef", "strMealThumb": "https://example.com/52874.jpg"}]"#,
        ))
        .create();

    let mut finder = RecipeFinder::builder()
        .base_url(server.url())
        .build()
        .unwrap();
    finder.search("beef").await;
    assert_eq!(finder.view().ui(), UiState::ResultsShown);
    finder
}

#[tokio::test]
async fn test_selecting_a_result_shows_full_details() {
    let mut server = mockito::Server::new_async().await;

    let record = r#"[{
        "idMeal": "52874",
        "strMeal": "Beef and Mustard Pie",
        "strCategory": "Beef",
        "strMealThumb": "https://example.com/52874.jpg",
        "strInstructions": "Preheat the oven to 150C. Toss the beef and flour together.",
        "strYoutube": "https://www.youtube.com/watch?v=nMyBC9staMU",
        "strIngredient1": "Beef",
        "strMeasure1": "1kg",
        "strIngredient2": "Plain Flour",
        "strMeasure2": "2 tbs",
        "strIngredient3": "",
        "strMeasure3": "",
        "strIngredient4": null,
        "strMeasure4": null,
        "strIngredient20": "Green Beans",
        "strMeasure20": "100g"
    }]"#;

    let lookup = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52874".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meal_list(record))
        .create();

    let mut finder = finder_with_results(&mut server).await;
    finder.select(0).await;
    lookup.assert();

    let view = finder.view();
    assert_eq!(view.ui(), UiState::DetailShown);
    assert!(view.detail_visible());

    let meal = view.detail().unwrap();
    assert_eq!(meal.name, "Beef and Mustard Pie");
    assert_eq!(meal.category.as_deref(), Some("Beef"));
    // blank and null slots are skipped, the last slot is not
    assert_eq!(meal.ingredients.len(), 3);
    assert_eq!(meal.ingredients[0].name, "Beef");
    assert_eq!(meal.ingredients[0].measure, "1kg");
    assert_eq!(meal.ingredients[2].name, "Green Beans");

    let html = finder.render();
    assert!(html.contains("<div id=\"meal-details\">"));
    assert!(html.contains("<h2 class=\"meal-details-title\">Beef and Mustard Pie</h2>"));
    assert!(html.contains("<li><i class=\"fas fa-check-circle\"></i> 1kg Beef</li>"));
    assert!(html.contains("<li><i class=\"fas fa-check-circle\"></i> 100g Green Beans</li>"));
    assert!(html.contains("href=\"https://www.youtube.com/watch?v=nMyBC9staMU\""));
}

#[tokio::test]
async fn test_blank_category_falls_back_and_video_is_omitted() {
    let mut server = mockito::Server::new_async().await;

    let record = r#"[{
        "idMeal": "52874",
        "strMeal": "Beef and Mustard Pie",
        "strCategory": "",
        "strMealThumb": "https://example.com/52874.jpg",
        "strInstructions": "Bake it.",
        "strYoutube": "",
        "strIngredient1": "Beef",
        "strMeasure1": "1kg"
    }]"#;

    let _lookup = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52874".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meal_list(record))
        .create();

    let mut finder = finder_with_results(&mut server).await;
    finder.select(0).await;

    let meal = finder.view().detail().unwrap();
    assert!(meal.category.is_none());
    assert!(meal.youtube.is_none());

    let html = finder.render();
    assert!(html.contains("<span>Uncategorized</span>"));
    assert!(!html.contains("youtube-link"));
    assert!(!html.contains("Watch Video"));
}

#[tokio::test]
async fn test_back_returns_to_the_result_grid() {
    let mut server = mockito::Server::new_async().await;

    let record = r#"[{
        "idMeal": "52874",
        "strMeal": "Beef and Mustard Pie",
        "strCategory": "Beef",
        "strMealThumb": "https://example.com/52874.jpg",
        "strInstructions": "Bake it.",
        "strIngredient1": "Beef",
        "strMeasure1": "1kg"
    }]"#;

    let _lookup = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52874".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meal_list(record))
        .create();

    let mut finder = finder_with_results(&mut server).await;
    finder.select(0).await;
    assert_eq!(finder.view().ui(), UiState::DetailShown);

    finder.back();

    let view = finder.view();
    assert_eq!(view.ui(), UiState::ResultsShown);
    assert!(view.detail().is_none());
    assert_eq!(view.results().len(), 1);
    assert_eq!(view.heading(), "Search results for \"beef\":");

    let html = finder.render();
    assert!(html.contains("<div id=\"meal-details\" class=\"hidden\">"));
    assert!(html.contains("data-meal-id=\"52874\""));
}

#[tokio::test]
async fn test_vanished_meal_changes_nothing() {
    let mut server = mockito::Server::new_async().await;

    let _lookup = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52874".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(meal_list("null"))
        .create();

    let mut finder = finder_with_results(&mut server).await;
    finder.select(0).await;

    let view = finder.view();
    assert_eq!(view.ui(), UiState::ResultsShown);
    assert!(view.detail().is_none());
    assert!(view.banner().is_none());
    assert_eq!(view.results().len(), 1);
}

#[tokio::test]
async fn test_detail_failure_keeps_the_list() {
    let mut server = mockito::Server::new_async().await;

    let _lookup = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52874".into()))
        .with_status(500)
        .create();

    let mut finder = finder_with_results(&mut server).await;
    finder.select(0).await;

    let view = finder.view();
    assert_eq!(view.ui(), UiState::Error);
    assert_eq!(
        view.banner(),
        Some("Could not load recipe details. Please try again later.")
    );
    assert_eq!(view.results().len(), 1);
    assert!(view.detail().is_none());

    let html = finder.render();
    assert!(html.contains("Could not load recipe details. Please try again later."));
    // the grid is still there behind the banner
    assert!(html.contains("data-meal-id=\"52874\""));
}
