//! Select and checkbox options shared by the forms (value, label).

pub const GENDERS: &[(&str, &str)] = &[
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
];

pub const ACTIVITY_LEVELS: &[(&str, &str)] = &[
    ("sedentary", "Sedentary"),
    ("light", "Lightly active"),
    ("moderate", "Moderately active"),
    ("active", "Active"),
    ("very_active", "Very active"),
];

pub const DIETARY_GOALS: &[(&str, &str)] = &[
    ("weight_loss", "Lose weight"),
    ("maintain", "Maintain weight"),
    ("weight_gain", "Gain weight"),
    ("muscle_gain", "Build muscle"),
];

pub const HEALTH_CONDITIONS: &[(&str, &str)] = &[
    ("diabetes", "Diabetes"),
    ("hypertension", "Hypertension"),
    ("heart_disease", "Heart disease"),
    ("high_cholesterol", "High cholesterol"),
];

pub const CUISINES: &[(&str, &str)] = &[
    ("Italian", "Italian"),
    ("Indian", "Indian"),
    ("Chinese", "Chinese"),
    ("Mexican", "Mexican"),
    ("Mediterranean", "Mediterranean"),
    ("American", "American"),
    ("Japanese", "Japanese"),
];

pub const ALLERGIES: &[(&str, &str)] = &[
    ("dairy", "Dairy"),
    ("nuts", "Nuts"),
    ("gluten", "Gluten"),
    ("seafood", "Seafood"),
];

pub const MEAL_TYPE_FILTERS: &[(&str, &str)] = &[
    ("all", "All meals"),
    ("breakfast", "Breakfast"),
    ("lunch", "Lunch"),
    ("dinner", "Dinner"),
    ("snack", "Snack"),
];

pub const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All categories"),
    ("Breakfast", "Breakfast"),
    ("Lunch", "Lunch"),
    ("Dinner", "Dinner"),
    ("Snack", "Snack"),
    ("Dessert", "Dessert"),
    ("Salad", "Salad"),
    ("Soup", "Soup"),
    ("Main Course", "Main Course"),
];

pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("score", "Best match"),
    ("calories", "Calories"),
    ("protein", "Protein"),
    ("health_score", "Health score"),
];

pub const DIET_TYPES: &[(&str, &str)] = &[
    ("balanced", "Balanced"),
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("keto", "Keto"),
    ("high_protein", "High protein"),
];
