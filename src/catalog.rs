use serde::Serialize;

/// Collection that receives one document per catalog entry.
pub const COLLECTION: &str = "designItems";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DesignItem {
	pub name: &'static str,
	pub sizes: &'static [&'static str],
	pub credits_per_creative: u32,
	pub category: &'static str,
}

const fn item(
	name: &'static str,
	sizes: &'static [&'static str],
	credits_per_creative: u32,
	category: &'static str,
) -> DesignItem {
	DesignItem {
		name,
		sizes,
		credits_per_creative,
		category,
	}
}

/// The full rate card, in the order it is written to the store. Names
/// repeat where a product ships in more than one size at its own price
/// (Flyers A4/A5, Poster A3/A4).
pub const DESIGN_ITEMS: &[DesignItem] = &[
	item("Business card", &["Standard"], 2, "print"),
	item("Brochure (Bi fold)", &["A4/A5 - 4 pages"], 5, "print"),
	item("Brochure (Tri fold)", &["A4/A5 - 6 pages"], 10, "print"),
	item("Brochure -10 pages", &["A4/A5"], 15, "print"),
	item("Brochure -20 pages", &["A4/A5"], 30, "print"),
	item("Flyers", &["A4"], 15, "print"),
	item("Flyers", &["A5"], 12, "print"),
	item("Poster", &["A3"], 20, "print"),
	item("Poster", &["A4"], 15, "print"),
	item("Infographics", &["A4/A5"], 10, "print"),
	item("Booth Backdrops", &["Standard"], 20, "event"),
	item("Standees", &["Standard"], 15, "event"),
	item("ID card", &["Standard"], 3, "print"),
	item("Brand Presentation/Deck - up to 10 slides", &["Standard"], 40, "presentation"),
	item("Pitch Deck - up to 10 slides", &["Standard"], 50, "presentation"),
	item("Brand Deck - up to 20 slides", &["Standard"], 80, "presentation"),
	item("Product Catalog - up to 4 pages", &["A4/A5"], 25, "print"),
	item("Product Catalog - up to 6 pages", &["A4/A5"], 35, "print"),
	item("Product Catalog - up to 10 pages", &["A4/A5"], 40, "print"),
	item("Table Banner", &["Standard"], 15, "event"),
	item("Social media profile picture", &["Standard social media"], 2, "social"),
	item("Social media cover image", &["Standard social media"], 5, "social"),
	item("Emailer", &["Standard"], 10, "digital"),
	item("Ad Creative - static", &["Standard social media"], 5, "social"),
	item("Static social media creative", &["Standard social media"], 3, "social"),
	item("Reels (30 sec)", &["30 sec - no shoot"], 10, "video"),
	item("Reels (60 sec)", &["60 sec - no shoot"], 15, "video"),
	item("Shorts", &["60 sec - YouTube"], 10, "video"),
	item("GIFs", &["Standard social media"], 10, "motion"),
	item("Text-based creative", &["Standard social media"], 5, "social"),
	item("Motion graphics", &["30 sec"], 25, "motion"),
	item("Letterhead", &["A4"], 5, "print"),
	item("Billboards", &["Standard"], 20, "print"),
	item("Carousel creative posts", &["Standard social media"], 15, "social"),
	item("Website Banners", &["Standard"], 15, "web"),
	item("Icons", &["Standard"], 5, "web"),
	item("2D Video Editing", &["Up to 5 minutes"], 100, "video"),
	item("Packaging design", &["As per requirement"], 250, "print"),
	item("Logo designing", &["As per requirement"], 300, "branding"),
	item("Brand Guidebook", &["As per requirement"], 400, "branding"),
	item("Logo Guidebook", &["As per requirement"], 350, "branding"),
	item("Website Landing Page", &["Single page"], 500, "web"),
];

#[cfg(test)]
mod tests {
	use super::*;

	fn by_name(name: &str) -> &'static DesignItem {
		DESIGN_ITEMS
			.iter()
			.find(|item| item.name == name)
			.unwrap_or_else(|| panic!("no catalog entry named '{name}'"))
	}

	#[test]
	fn every_entry_is_fully_populated() {
		for item in DESIGN_ITEMS {
			assert!(!item.name.is_empty());
			assert!(!item.sizes.is_empty(), "'{}' has no sizes", item.name);
			for size in item.sizes {
				assert!(!size.is_empty(), "'{}' has an empty size label", item.name);
			}
			assert!(
				item.credits_per_creative > 0,
				"'{}' costs zero credits",
				item.name
			);
			assert!(!item.category.is_empty(), "'{}' has no category", item.name);
		}
	}

	#[test]
	fn prices_match_the_rate_card() {
		assert_eq!(DESIGN_ITEMS.len(), 42);
		assert_eq!(by_name("Business card").credits_per_creative, 2);
		assert_eq!(by_name("Logo designing").credits_per_creative, 300);
		assert_eq!(by_name("Website Landing Page").credits_per_creative, 500);
		assert_eq!(by_name("Brochure (Tri fold)").sizes, &["A4/A5 - 6 pages"]);
	}

	#[test]
	fn repeated_names_are_distinct_size_variants() {
		let flyers: Vec<_> = DESIGN_ITEMS.iter().filter(|x| x.name == "Flyers").collect();
		assert_eq!(flyers.len(), 2);
		assert_eq!(flyers[0].sizes, &["A4"]);
		assert_eq!(flyers[0].credits_per_creative, 15);
		assert_eq!(flyers[1].sizes, &["A5"]);
		assert_eq!(flyers[1].credits_per_creative, 12);

		let posters: Vec<_> = DESIGN_ITEMS.iter().filter(|x| x.name == "Poster").collect();
		assert_eq!(posters.len(), 2);
		assert_eq!(posters[0].sizes, &["A3"]);
		assert_eq!(posters[1].sizes, &["A4"]);
	}

	#[test]
	fn documents_carry_the_source_field_names() {
		let fields = serde_json::to_value(&DESIGN_ITEMS[0]).expect("catalog entry serializes");
		let object = fields.as_object().expect("document is an object");
		assert_eq!(object.len(), 4);
		assert_eq!(object["name"], "Business card");
		assert_eq!(object["sizes"], serde_json::json!(["Standard"]));
		assert_eq!(object["creditsPerCreative"], 2);
		assert_eq!(object["category"], "print");
	}
}
