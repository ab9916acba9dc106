//! Markup renderers. Each function maps view data to an HTML fragment and
//! touches nothing else, so the same state always renders the same string.
//!
//! All API-supplied values are treated as text: element content is escaped
//! with [`encode_text`] and attribute values with
//! [`encode_double_quoted_attribute`].

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::{MealDetail, MealSummary};
use crate::state::ViewState;

/// Render the result grid: one card per meal, in API order.
///
/// A card carries the meal id in `data-meal-id` so a host can map clicks
/// back to entries. The category line is omitted entirely when the API
/// returned none.
pub fn results(meals: &[MealSummary]) -> String {
    let mut html = String::new();

    for meal in meals {
        html.push_str(&format!(
            "<div class=\"meal\" data-meal-id=\"{}\">\n",
            encode_double_quoted_attribute(&meal.id)
        ));
        html.push_str(&format!(
            "  <img src=\"{}\" alt=\"{}\">\n",
            encode_double_quoted_attribute(&meal.thumbnail),
            encode_double_quoted_attribute(&meal.name)
        ));
        html.push_str("  <div class=\"meal-info\">\n");
        html.push_str(&format!(
            "    <h3 class=\"meal-title\">{}</h3>\n",
            encode_text(&meal.name)
        ));
        if let Some(category) = &meal.category {
            html.push_str(&format!(
                "    <div class=\"meal-category\">{}</div>\n",
                encode_text(category)
            ));
        }
        html.push_str("  </div>\n");
        html.push_str("</div>\n");
    }

    html
}

/// Render the detail panel for a single meal.
///
/// The category falls back to "Uncategorized"; the video link is omitted
/// entirely when the record has none. Ingredient lines read `measure name`,
/// with the measure kept verbatim.
pub fn detail(meal: &MealDetail) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" class=\"meal-details-img\">\n",
        encode_double_quoted_attribute(&meal.thumbnail),
        encode_double_quoted_attribute(&meal.name)
    ));
    html.push_str(&format!(
        "<h2 class=\"meal-details-title\">{}</h2>\n",
        encode_text(&meal.name)
    ));

    let category = meal.category.as_deref().unwrap_or("Uncategorized");
    html.push_str("<div class=\"meal-details-category\">\n");
    html.push_str(&format!("  <span>{}</span>\n", encode_text(category)));
    html.push_str("</div>\n");

    html.push_str("<div class=\"meal-details-instructions\">\n");
    html.push_str("  <h3>Instructions</h3>\n");
    html.push_str(&format!("  <p>{}</p>\n", encode_text(&meal.instructions)));
    html.push_str("</div>\n");

    html.push_str("<div class=\"meal-details-ingredients\">\n");
    html.push_str("  <h3>Ingredients</h3>\n");
    html.push_str("  <ul class=\"ingredients-list\">\n");
    for item in &meal.ingredients {
        html.push_str(&format!(
            "    <li><i class=\"fas fa-check-circle\"></i> {} {}</li>\n",
            encode_text(&item.measure),
            encode_text(&item.name)
        ));
    }
    html.push_str("  </ul>\n");
    html.push_str("</div>\n");

    if let Some(youtube) = &meal.youtube {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"youtube-link\">\n",
            encode_double_quoted_attribute(youtube)
        ));
        html.push_str("  <i class=\"fab fa-youtube\"></i> Watch Video\n");
        html.push_str("</a>\n");
    }

    html
}

/// Render the whole page region from the current view state: search form,
/// banner, heading, meal grid and detail panel, with `hidden` classes
/// applied to the regions the state keeps out of sight.
pub fn page(view: &ViewState) -> String {
    let mut html = String::new();

    html.push_str("<form id=\"search-form\">\n");
    html.push_str(&format!(
        "  <input type=\"text\" id=\"search-input\" value=\"{}\">\n",
        encode_double_quoted_attribute(view.input())
    ));
    html.push_str("  <button id=\"search-btn\" type=\"submit\">Search</button>\n");
    html.push_str("</form>\n");

    match view.banner() {
        Some(message) => html.push_str(&format!(
            "<div id=\"error-container\">{}</div>\n",
            encode_text(message)
        )),
        None => html.push_str("<div id=\"error-container\" class=\"hidden\"></div>\n"),
    }

    html.push_str(&format!(
        "<div id=\"result-heading\">{}</div>\n",
        encode_text(view.heading())
    ));

    html.push_str("<div id=\"meals\">\n");
    html.push_str(&results(view.results()));
    html.push_str("</div>\n");

    if view.detail_visible() {
        html.push_str("<div id=\"meal-details\">\n");
    } else {
        html.push_str("<div id=\"meal-details\" class=\"hidden\">\n");
    }
    html.push_str(
        "  <button id=\"back-btn\" class=\"back-btn\"><i class=\"fas fa-arrow-left\"></i> Back to recipes</button>\n",
    );
    html.push_str("  <div class=\"meal-details-content\">\n");
    if let Some(meal) = view.detail() {
        html.push_str(&detail(meal));
    }
    html.push_str("  </div>\n");
    html.push_str("</div>\n");

    html
}
