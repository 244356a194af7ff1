//! Grocery List
//!
//! Items grouped by category, plus the plain-text export.

use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::meal_plan::MealPlan;

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: String,
    pub category: String,
}

impl GroceryItem {
    fn new(name: &str, quantity: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            category: category.to_string(),
        }
    }

    /// DOM id of the item's checkbox
    pub fn element_id(&self) -> String {
        let slug: Vec<&str> = self.name.split_whitespace().collect();
        format!("grocery-{}", slug.join("-"))
    }
}

/// Category -> items, categories in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryList {
    groups: IndexMap<String, Vec<GroceryItem>>,
}

impl GroceryList {
    pub fn from_items(items: impl IntoIterator<Item = GroceryItem>) -> Self {
        let mut groups: IndexMap<String, Vec<GroceryItem>> = IndexMap::new();
        for item in items {
            groups.entry(item.category.clone()).or_default().push(item);
        }
        Self { groups }
    }

    /// Shopping list for a generated plan.
    ///
    /// The backend has no ingredient data, so any non-empty plan maps to a
    /// fixed staple list.
    pub fn for_plan(plan: &MealPlan) -> Self {
        if plan.is_empty() {
            return Self::default();
        }
        Self::from_items([
            GroceryItem::new("Chicken Breast", "500g", "Protein"),
            GroceryItem::new("Brown Rice", "1kg", "Grains"),
            GroceryItem::new("Broccoli", "3 heads", "Vegetables"),
            GroceryItem::new("Eggs", "12 pieces", "Dairy"),
            GroceryItem::new("Olive Oil", "500ml", "Oils"),
            GroceryItem::new("Mixed Berries", "500g", "Fruits"),
            GroceryItem::new("Greek Yogurt", "1kg", "Dairy"),
            GroceryItem::new("Almonds", "200g", "Nuts"),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[GroceryItem])> {
        self.groups.iter().map(|(c, items)| (c.as_str(), items.as_slice()))
    }

    pub fn export_text(&self) -> String {
        let mut text = String::from("Grocery List\n\n");
        for (category, items) in self.groups() {
            text.push_str(category);
            text.push('\n');
            for item in items {
                text.push_str(&format!("- {} ({})\n", item.name, item.quantity));
            }
            text.push('\n');
        }
        text
    }

    /// `data:` URL suitable for an anchor download
    pub fn export_data_url(&self) -> String {
        let encoded = utf8_percent_encode(&self.export_text(), NON_ALPHANUMERIC).to_string();
        format!("data:text/plain;charset=utf-8,{}", encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal_plan::DayPlan;

    fn sample_plan() -> MealPlan {
        let mut plan = MealPlan::new();
        plan.insert("Day 1".into(), DayPlan::default());
        plan
    }

    #[test]
    fn test_groups_keep_first_seen_category_order() {
        let list = GroceryList::for_plan(&sample_plan());
        let categories: Vec<&str> = list.groups().map(|(c, _)| c).collect();
        assert_eq!(
            categories,
            vec!["Protein", "Grains", "Vegetables", "Dairy", "Oils", "Fruits", "Nuts"]
        );
        let dairy = list.groups().find(|(c, _)| *c == "Dairy").unwrap().1;
        assert_eq!(dairy.len(), 2);
    }

    #[test]
    fn test_export_text_layout() {
        let list = GroceryList::from_items([
            GroceryItem::new("Eggs", "12 pieces", "Dairy"),
            GroceryItem::new("Milk", "1l", "Dairy"),
        ]);
        assert_eq!(
            list.export_text(),
            "Grocery List\n\nDairy\n- Eggs (12 pieces)\n- Milk (1l)\n\n"
        );
    }

    #[test]
    fn test_empty_plan_gives_empty_list() {
        assert!(GroceryList::for_plan(&MealPlan::new()).is_empty());
    }

    #[test]
    fn test_element_id_and_data_url() {
        let item = GroceryItem::new("Mixed  Berries", "500g", "Fruits");
        assert_eq!(item.element_id(), "grocery-Mixed-Berries");

        let list = GroceryList::from_items([item]);
        let url = list.export_data_url();
        assert!(url.starts_with("data:text/plain;charset=utf-8,Grocery%20List%0A"));
    }
}
