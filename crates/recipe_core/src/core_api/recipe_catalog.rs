//! Built-in recipe name tables for Stardew Valley 1.3.
//!
//! Names are the `CraftingRecipes`/`CookingRecipes` data keys, which is what
//! the game writes into `<craftingRecipes>` and `<cookingRecipes>`; they are
//! not always the display names (`Cheese Cauli.`). Recipes added by 1.4 and
//! later, and the Wedding Ring, are not listed.

use super::types::RecipeKind;

#[rustfmt::skip]
const CRAFTING_RECIPES: &[&str] = &[
    // Fences & gates
    "Wood Fence", "Stone Fence", "Iron Fence", "Hardwood Fence", "Gate",

    // Artisan equipment
    "Bee House", "Cask", "Cheese Press", "Keg", "Loom", "Mayonnaise Machine",
    "Oil Maker", "Preserves Jar",

    // Refining & misc equipment
    "Charcoal Kiln", "Crystalarium", "Furnace", "Lightning Rod",
    "Recycling Machine", "Seed Maker", "Slime Egg-Press", "Slime Incubator",
    "Tapper", "Worm Bin", "Chest", "Scarecrow",

    // Signs
    "Wood Sign", "Stone Sign",

    // Farming
    "Sprinkler", "Quality Sprinkler", "Iridium Sprinkler",
    "Basic Fertilizer", "Quality Fertilizer", "Basic Retaining Soil",
    "Quality Retaining Soil", "Speed-Gro", "Deluxe Speed-Gro", "Grass Starter",
    "Wild Seeds (Sp)", "Wild Seeds (Su)", "Wild Seeds (Fa)", "Wild Seeds (Wi)",
    "Ancient Seeds",

    // Bombs & mining
    "Cherry Bomb", "Bomb", "Mega Bomb", "Staircase", "Explosive Ammo",
    "Transmute (Fe)", "Transmute (Au)",

    // Fishing
    "Crab Pot", "Spinner", "Trap Bobber", "Cork Bobber", "Treasure Hunter",
    "Dressed Spinner", "Barbed Hook", "Magnet", "Bait",

    // Consumables
    "Oil of Garlic", "Life Elixir", "Field Snack", "Jack-O-Lantern",

    // Floors & paths
    "Wood Floor", "Straw Floor", "Weathered Floor", "Crystal Floor",
    "Stone Floor", "Stepping Stone Path", "Wood Path", "Gravel Path",
    "Cobblestone Path", "Crystal Path",

    // Totems
    "Warp Totem: Farm", "Warp Totem: Mountains", "Warp Totem: Beach",
    "Warp Totem: Desert", "Rain Totem",

    // Lighting & decor
    "Torch", "Campfire", "Wooden Brazier", "Stone Brazier", "Gold Brazier",
    "Carved Brazier", "Stump Brazier", "Barrel Brazier", "Skull Brazier",
    "Marble Brazier", "Wood Lamp-post", "Iron Lamp-post", "Wicked Statue",
    "Flute Block", "Drum Block",

    // Rings
    "Small Glow Ring", "Glow Ring", "Small Magnet Ring", "Magnet Ring",
    "Warrior Ring", "Sturdy Ring", "Iridium Band", "Ring of Yoba",
];

#[rustfmt::skip]
const COOKING_RECIPES: &[&str] = &[
    "Fried Egg", "Omelet", "Salad", "Cheese Cauli.", "Baked Fish",
    "Parsnip Soup", "Vegetable Medley", "Complete Breakfast", "Fried Calamari",
    "Strange Bun", "Lucky Lunch", "Fried Mushroom", "Pizza", "Bean Hotpot",
    "Glazed Yams", "Carp Surprise", "Hashbrowns", "Pancakes", "Salmon Dinner",
    "Fish Taco", "Crispy Bass", "Pepper Poppers", "Bread", "Tom Kha Soup",
    "Trout Soup", "Chocolate Cake", "Pink Cake", "Rhubarb Pie", "Cookies",
    "Spaghetti", "Fried Eel", "Spicy Eel", "Sashimi", "Maki Roll", "Tortilla",
    "Red Plate", "Eggplant Parmesan", "Rice Pudding", "Ice Cream",
    "Blueberry Tart", "Autumn's Bounty", "Pumpkin Soup", "Super Meal",
    "Cranberry Sauce", "Stuffing", "Farmer's Lunch", "Survival Burger",
    "Dish O' The Sea", "Miner's Treat", "Roots Platter", "Triple Shot Espresso",
    "Seafoam Pudding", "Algae Soup", "Pale Broth", "Plum Pudding",
    "Artichoke Dip", "Stir Fry", "Roasted Hazelnuts", "Pumpkin Pie",
    "Radish Salad", "Fruit Salad", "Blackberry Cobbler", "Cranberry Candy",
    "Bruschetta", "Coleslaw", "Fiddlehead Risotto", "Poppyseed Muffin",
    "Chowder", "Fish Stew", "Escargot", "Lobster Bisque", "Maple Bar",
    "Crab Cakes",
];

/// All names tracked for the given kind, in catalog order.
pub fn reference_items(kind: RecipeKind) -> &'static [&'static str] {
    match kind {
        RecipeKind::Crafting => CRAFTING_RECIPES,
        RecipeKind::Cooking => COOKING_RECIPES,
    }
}

pub fn is_reference_item(kind: RecipeKind, name: &str) -> bool {
    reference_items(kind).contains(&name)
}
