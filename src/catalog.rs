//! Static e-card data: gallery categories, the holiday and trending card
//! lists, and the search/theme filter used when browsing them.

/// Image shown for a card until (or unless) a GIF is found for it.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Themes offered as quick filters on the explore page.
pub const THEMES: [&str; 5] = ["Christmas", "New Year", "Thanksgiving", "Diwali", "Halloween"];

/// A gallery category and the GIF search query that illustrates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub query: String,
}

impl Category {
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self { name: name.into(), query: query.into() }
    }
}

/// The six categories of the e-card gallery.
pub fn gallery_categories() -> Vec<Category> {
    [
        ("Birthdays", "birthday celebration"),
        ("Weddings", "wedding celebration"),
        ("Anniversaries", "anniversary love"),
        ("Holidays", "holiday cheer"),
        ("Thank You", "thank you grateful"),
        ("Congratulations", "congratulations success"),
    ]
    .into_iter()
    .map(|(name, query)| Category::new(name, query))
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ECard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
    pub query: Option<String>,
    pub likes: u64,
    pub shares: u64,
    pub views: u64,
}

/// The holiday cards listed on the explore page before any GIF lookup.
pub fn holiday_cards() -> Vec<ECard> {
    [
        ("Merry Christmas", "Christmas", "christmas", 1200, 300, 5000),
        ("Happy Hanukkah", "Hanukkah", "hanukkah", 800, 150, 3000),
        ("Happy New Year", "New Year", "new year", 1500, 400, 6000),
        ("Happy Diwali", "Diwali", "diwali", 700, 100, 2500),
        ("Happy Halloween", "Halloween", "halloween", 900, 200, 4000),
        ("Happy Thanksgiving", "Thanksgiving", "thanksgiving", 1100, 250, 4500),
        ("Happy Valentine's Day", "Valentine's Day", "valentine's day", 1300, 350, 5500),
        ("Happy Easter", "Easter", "easter", 1000, 200, 4200),
        ("Happy Holi", "Holi", "holi", 600, 90, 2000),
        ("Joyous Kwanzaa", "Kwanzaa", "kwanzaa", 500, 80, 1800),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, category, query, likes, shares, views))| ECard {
        id: (i + 1).to_string(),
        title: title.to_string(),
        category: category.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        query: Some(query.to_string()),
        likes,
        shares,
        views,
    })
    .collect()
}

/// The trending strip: six cards, each illustrated by a search for its
/// category.
pub fn trending_cards() -> Vec<ECard> {
    [
        ("Happy Birthday", "Birthday"),
        ("Congratulations", "Celebration"),
        ("Thank You", "Gratitude"),
        ("Get Well Soon", "Wellness"),
        ("Happy Anniversary", "Anniversary"),
        ("New Baby", "New Baby"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, category))| ECard {
        id: (i + 1).to_string(),
        title: title.to_string(),
        category: category.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        query: Some(category.to_string()),
        likes: 0,
        shares: 0,
        views: 0,
    })
    .collect()
}

/// The entry of [`THEMES`] matching `name`, ignoring case.
pub fn find_theme(name: &str) -> Option<&'static str> {
    THEMES.iter().copied().find(|t| t.eq_ignore_ascii_case(name.trim()))
}

/// Cards whose title or category contains `search_term` (case-insensitive)
/// and, when a theme is selected, whose category equals it.
pub fn filter_cards<'a>(cards: &'a [ECard], search_term: &str, theme: Option<&str>) -> Vec<&'a ECard> {
    let term = search_term.to_lowercase();
    let theme = theme.map(str::to_lowercase);

    cards
        .iter()
        .filter(|card| {
            let category = card.category.to_lowercase();
            let matches_search = card.title.to_lowercase().contains(&term) || category.contains(&term);
            let matches_theme = theme.as_deref().map_or(true, |t| category == t);
            matches_search && matches_theme
        })
        .collect()
}

/// Compact counter: `1200` -> `"1.2k"`, `950` -> `"950"`.
pub fn format_count(count: u64) -> String {
    if count >= 1000 {
        format!("{:.1}k", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}
