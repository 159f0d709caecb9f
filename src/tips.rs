use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipCategory {
    Storage,
    Planning,
    Cooking,
    Shopping,
    Recycling,
}

impl TipCategory {
    pub const ALL: [TipCategory; 5] = [
        TipCategory::Storage,
        TipCategory::Planning,
        TipCategory::Cooking,
        TipCategory::Shopping,
        TipCategory::Recycling,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TipCategory::Storage => "Storage",
            TipCategory::Planning => "Planning",
            TipCategory::Cooking => "Cooking",
            TipCategory::Shopping => "Shopping",
            TipCategory::Recycling => "Recycling",
        }
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// An expert tip from the tips library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TipCategory,
    pub difficulty: Difficulty,
    pub time_to_implement: String,
    pub impact: Impact,
    pub tags: Vec<String>,
    pub content: String,
    pub likes: u32,
}

#[allow(clippy::too_many_arguments)]
fn tip(
    id: &str,
    title: &str,
    description: &str,
    category: TipCategory,
    difficulty: Difficulty,
    time_to_implement: &str,
    impact: Impact,
    tags: &[&str],
    content: &str,
    likes: u32,
) -> Tip {
    Tip {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category,
        difficulty,
        time_to_implement: time_to_implement.into(),
        impact,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        content: content.into(),
        likes,
    }
}

/// The built-in expert tips shown on the tips page.
pub fn tip_catalog() -> Vec<Tip> {
    vec![
        tip(
            "1",
            "First In, First Out (FIFO) Method",
            "Organize your fridge and pantry to use older items first",
            TipCategory::Storage,
            Difficulty::Easy,
            "15 minutes",
            Impact::High,
            &["organization", "fridge", "pantry"],
            "Place newer items behind older ones in your fridge and pantry. This simple rotation system ensures you use items before they expire. Label items with purchase dates if needed.",
            127,
        ),
        tip(
            "2",
            "Meal Planning Sunday",
            "Plan your weekly meals to buy only what you need",
            TipCategory::Planning,
            Difficulty::Medium,
            "30 minutes",
            Impact::High,
            &["meal planning", "shopping", "weekly"],
            "Spend 30 minutes every Sunday planning your meals for the week. Check what you already have, plan recipes around those ingredients, and create a precise shopping list.",
            89,
        ),
        tip(
            "3",
            "Proper Produce Storage",
            "Learn which fruits and vegetables should be stored together",
            TipCategory::Storage,
            Difficulty::Easy,
            "10 minutes",
            Impact::Medium,
            &["fruits", "vegetables", "storage"],
            "Store ethylene-producing fruits (apples, bananas) separately from ethylene-sensitive vegetables (leafy greens, broccoli). Use perforated bags for vegetables that need airflow.",
            156,
        ),
        tip(
            "4",
            "Creative Leftover Transformations",
            "Turn yesterday's dinner into today's exciting meal",
            TipCategory::Cooking,
            Difficulty::Medium,
            "20 minutes",
            Impact::Medium,
            &["leftovers", "creativity", "recipes"],
            "Transform leftovers into new dishes: turn roast chicken into soup, pasta into frittata, or vegetables into smoothies. Keep a 'leftover jar' in your fridge for small amounts.",
            203,
        ),
        tip(
            "5",
            "Smart Shopping List Strategy",
            "Shop with intention and avoid impulse purchases",
            TipCategory::Shopping,
            Difficulty::Easy,
            "5 minutes",
            Impact::High,
            &["shopping", "planning", "budget"],
            "Always shop with a list based on planned meals. Stick to your list and avoid shopping when hungry. Check store flyers for sales and plan meals around discounted items.",
            94,
        ),
        tip(
            "6",
            "Freezer Inventory Management",
            "Maximize your freezer space and prevent forgotten items",
            TipCategory::Storage,
            Difficulty::Medium,
            "45 minutes",
            Impact::High,
            &["freezer", "inventory", "organization"],
            "Keep a freezer inventory list on your fridge. Label everything with contents and date. Use clear containers and organize by category. Set monthly freezer cleanout reminders.",
            78,
        ),
        tip(
            "7",
            "Composting Basics",
            "Turn unavoidable food scraps into garden gold",
            TipCategory::Recycling,
            Difficulty::Advanced,
            "2 hours setup",
            Impact::Medium,
            &["composting", "environment", "garden"],
            "Start a simple compost bin with fruit and vegetable scraps, coffee grounds, and eggshells. Avoid meat, dairy, and oils. Turn regularly and maintain proper moisture levels.",
            145,
        ),
        tip(
            "8",
            "Portion Control Techniques",
            "Cook the right amount to minimize leftovers",
            TipCategory::Cooking,
            Difficulty::Easy,
            "5 minutes",
            Impact::Medium,
            &["portions", "cooking", "planning"],
            "Use measuring tools and learn standard portion sizes. Cook based on actual appetite, not package instructions. Start with smaller portions and add more if needed.",
            67,
        ),
    ]
}

/// Search box plus category tab. `category: None` is the "All" tab.
#[derive(Debug, Clone, Default)]
pub struct TipFilter {
    pub search: String,
    pub category: Option<TipCategory>,
}

/// Case-insensitive match over title, description, and tags, narrowed by
/// the selected category.
pub fn filter_tips<'a>(tips: &'a [Tip], filter: &TipFilter) -> Vec<&'a Tip> {
    let needle = filter.search.trim().to_lowercase();
    tips.iter()
        .filter(|tip| {
            let matches_search = needle.is_empty()
                || tip.title.to_lowercase().contains(&needle)
                || tip.description.to_lowercase().contains(&needle)
                || tip.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
            let matches_category = filter.category.map_or(true, |c| tip.category == c);
            matches_search && matches_category
        })
        .collect()
}

/// Which tips the user has liked this session.
#[derive(Debug, Clone, Default)]
pub struct LikedTips {
    ids: HashSet<String>,
}

impl LikedTips {
    /// Toggle a like. Returns the new liked state.
    pub fn toggle(&mut self, tips: &[Tip], tip_id: &str) -> AppResult<bool> {
        if !tips.iter().any(|t| t.id == tip_id) {
            return Err(AppError::NotFound(format!("Tip not found: {}", tip_id)));
        }
        if self.ids.remove(tip_id) {
            Ok(false)
        } else {
            self.ids.insert(tip_id.into());
            Ok(true)
        }
    }

    pub fn is_liked(&self, tip_id: &str) -> bool {
        self.ids.contains(tip_id)
    }

    /// The rendered like count: catalog likes plus the user's own.
    pub fn display_likes(&self, tip: &Tip) -> u32 {
        tip.likes + u32::from(self.is_liked(&tip.id))
    }
}
