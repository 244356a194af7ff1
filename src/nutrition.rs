//! Nutrition Math
//!
//! Macro splits and dashboard indicators.

use crate::models::{DailyIntake, NutritionTargets};

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Share of energy per macro, in whole percent summing to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroSplit {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl MacroSplit {
    /// Shown when no real intake is known
    pub const PLACEHOLDER: MacroSplit = MacroSplit {
        protein: 30,
        carbs: 50,
        fat: 20,
    };

    /// Convert gram amounts to calorie percentages.
    ///
    /// Uses largest-remainder rounding so the parts always add up to 100.
    /// Falls back to [`MacroSplit::PLACEHOLDER`] when there is no energy.
    pub fn from_grams(protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        let kcal = [
            clamp_grams(protein_g) * KCAL_PER_GRAM_PROTEIN,
            clamp_grams(carbs_g) * KCAL_PER_GRAM_CARBS,
            clamp_grams(fat_g) * KCAL_PER_GRAM_FAT,
        ];
        let total: f64 = kcal.iter().sum();
        if total <= 0.0 {
            return Self::PLACEHOLDER;
        }

        let exact: Vec<f64> = kcal.iter().map(|k| k / total * 100.0).collect();
        let mut parts: Vec<u32> = exact.iter().map(|p| p.floor() as u32).collect();
        let mut leftover = 100 - parts.iter().sum::<u32>();

        let mut order: Vec<usize> = (0..3).collect();
        order.sort_by(|&a, &b| {
            let ra = exact[a] - exact[a].floor();
            let rb = exact[b] - exact[b].floor();
            rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
        });
        for idx in order {
            if leftover == 0 {
                break;
            }
            parts[idx] += 1;
            leftover -= 1;
        }

        Self {
            protein: parts[0],
            carbs: parts[1],
            fat: parts[2],
        }
    }

    pub fn from_targets(targets: &NutritionTargets) -> Self {
        Self::from_grams(targets.daily_protein, targets.daily_carbs, targets.daily_fat)
    }

    pub fn as_array(&self) -> [u32; 3] {
        [self.protein, self.carbs, self.fat]
    }
}

fn clamp_grams(grams: f64) -> f64 {
    if grams.is_finite() && grams > 0.0 {
        grams
    } else {
        0.0
    }
}

/// Today's calories as a percentage of the target
pub fn calorie_progress(intake: &DailyIntake, targets: &NutritionTargets) -> f64 {
    if targets.daily_calories <= 0.0 {
        return 0.0;
    }
    intake.calories / targets.daily_calories * 100.0
}

/// Width of a progress bar; the bar never overflows its track
pub fn bar_width(percentage: f64) -> f64 {
    percentage.clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTone {
    Success,
    Warning,
    Danger,
}

impl ProgressTone {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage > 100.0 {
            ProgressTone::Danger
        } else if percentage > 80.0 {
            ProgressTone::Warning
        } else {
            ProgressTone::Success
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProgressTone::Success => "bg-success",
            ProgressTone::Warning => "bg-warning",
            ProgressTone::Danger => "bg-danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiStatus {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiStatus::Underweight
        } else if bmi >= 30.0 {
            BmiStatus::Obese
        } else if bmi >= 25.0 {
            BmiStatus::Overweight
        } else {
            BmiStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiStatus::Underweight => "UNDERWEIGHT",
            BmiStatus::Normal => "NORMAL",
            BmiStatus::Overweight => "OVERWEIGHT",
            BmiStatus::Obese => "OBESE",
        }
    }

    /// Bootstrap badge class
    pub fn badge_class(&self) -> &'static str {
        match self {
            BmiStatus::Normal => "badge bg-success",
            BmiStatus::Underweight | BmiStatus::Overweight => "badge bg-warning",
            BmiStatus::Obese => "badge bg-danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_and_carbs_only_split_evenly() {
        let split = MacroSplit::from_grams(100.0, 100.0, 0.0);
        assert_eq!(split, MacroSplit { protein: 50, carbs: 50, fat: 0 });
    }

    #[test]
    fn test_split_always_sums_to_hundred() {
        let samples = [
            (82.0, 275.0, 49.0),
            (1.0, 1.0, 1.0),
            (33.3, 12.7, 8.1),
            (0.0, 0.0, 5.0),
        ];
        for (p, c, f) in samples {
            let split = MacroSplit::from_grams(p, c, f);
            assert_eq!(split.as_array().iter().sum::<u32>(), 100, "{:?}", (p, c, f));
        }
    }

    #[test]
    fn test_fat_weighs_nine_kcal_per_gram() {
        // 4*10 = 40, 4*10 = 40, 9*10 = 90 -> 23.5 / 23.5 / 52.9
        let split = MacroSplit::from_grams(10.0, 10.0, 10.0);
        assert_eq!(split.fat, 53);
        assert_eq!(split.protein + split.carbs, 47);
    }

    #[test]
    fn test_zero_or_invalid_grams_use_placeholder() {
        assert_eq!(MacroSplit::from_grams(0.0, 0.0, 0.0), MacroSplit::PLACEHOLDER);
        assert_eq!(MacroSplit::from_grams(-5.0, f64::NAN, 0.0), MacroSplit::PLACEHOLDER);
    }

    #[test]
    fn test_calorie_progress_and_bar() {
        let targets = NutritionTargets::default();
        let intake = DailyIntake::default();
        let pct = calorie_progress(&intake, &targets);
        assert_eq!(pct.round(), 84.0);
        assert_eq!(bar_width(140.0), 100.0);

        let zero = NutritionTargets { daily_calories: 0.0, ..targets };
        assert_eq!(calorie_progress(&intake, &zero), 0.0);
    }

    #[test]
    fn test_progress_tone_thresholds() {
        assert_eq!(ProgressTone::for_percentage(80.0), ProgressTone::Success);
        assert_eq!(ProgressTone::for_percentage(80.5), ProgressTone::Warning);
        assert_eq!(ProgressTone::for_percentage(100.0), ProgressTone::Warning);
        assert_eq!(ProgressTone::for_percentage(101.0), ProgressTone::Danger);
    }

    #[test]
    fn test_bmi_classification() {
        assert_eq!(BmiStatus::classify(18.4), BmiStatus::Underweight);
        assert_eq!(BmiStatus::classify(18.5), BmiStatus::Normal);
        assert_eq!(BmiStatus::classify(24.9), BmiStatus::Normal);
        assert_eq!(BmiStatus::classify(25.0), BmiStatus::Overweight);
        assert_eq!(BmiStatus::classify(30.0), BmiStatus::Obese);
        assert_eq!(BmiStatus::classify(31.0).badge_class(), "badge bg-danger");
    }
}
