//! Category to CSS class mapping for marker info content.

use fxhash::FxHashMap;
use once_cell::sync::Lazy;

/// Known category names and the class fragment each contributes.
static CATEGORY_CLASSES: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut classes = FxHashMap::default();
    classes.insert("restaurant", "cat-restaurant");
    classes.insert("cafe", "cat-cafe");
    classes.insert("bar", "cat-bar");
    classes.insert("retail", "cat-retail");
    classes.insert("shop", "cat-retail");
    classes.insert("hotel", "cat-hotel");
    classes.insert("museum", "cat-museum");
    classes.insert("office", "cat-office");
    classes.insert("service", "cat-service");
    classes
});

/// Maps category names to a space-separated list of class fragments.
///
/// Lookup is case-insensitive; unknown and empty names contribute nothing,
/// and each fragment appears at most once however many categories map to it.
pub fn categories_to_classes(categories: &[String]) -> String {
    let mut fragments: Vec<&str> = Vec::new();
    for category in categories {
        let Some(&fragment) = CATEGORY_CLASSES.get(category.to_lowercase().as_str()) else {
            continue;
        };
        if !fragments.contains(&fragment) {
            fragments.push(fragment);
        }
    }
    fragments.join(" ")
}
