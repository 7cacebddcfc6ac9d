//! Anthropometric estimates derived from a user profile.
//!
//! None of these functions validate their inputs. Non-positive values lead to
//! meaningless results (NaN, infinity or negative numbers).

use crate::{Sex, UserProfile};

/// Body mass index rounded to one decimal.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    (weight_kg / (height_m * height_m) * 10.0).round() / 10.0
}

/// Basal metabolic rate in kcal per day (Mifflin-St Jeor).
///
/// Any sex other than male uses the female constant.
#[must_use]
pub fn bmr(profile: &UserProfile) -> i64 {
    let base =
        10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    let value = match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female | Sex::Other => base - 161.0,
    };
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    rounded
}

#[must_use]
pub fn activity_multiplier(days_per_week: u8) -> f64 {
    match days_per_week {
        0..=2 => 1.2,
        3 => 1.375,
        4 => 1.55,
        5 => 1.725,
        _ => 1.9,
    }
}

/// Total daily energy expenditure in kcal per day.
#[must_use]
pub fn tdee(bmr: i64, days_per_week: u8) -> i64 {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let value = (bmr as f64 * activity_multiplier(days_per_week)).round() as i64;
    value
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::user::tests::profile;

    #[test]
    fn test_bmi() {
        assert_approx_eq!(bmi(70.0, 175.0), 22.9, 1e-9);
        assert_approx_eq!(bmi(100.0, 200.0), 25.0, 1e-9);
    }

    #[test]
    fn test_bmi_zero_height() {
        assert!(bmi(70.0, 0.0).is_infinite());
    }

    #[rstest]
    #[case(Sex::Male, 1649)]
    #[case(Sex::Female, 1483)]
    #[case(Sex::Other, 1483)]
    fn test_bmr(#[case] sex: Sex, #[case] expected: i64) {
        assert_eq!(
            bmr(&UserProfile {
                age: 30,
                sex,
                ..profile()
            }),
            expected
        );
    }

    #[rstest]
    #[case(1, 1.2)]
    #[case(2, 1.2)]
    #[case(3, 1.375)]
    #[case(4, 1.55)]
    #[case(5, 1.725)]
    #[case(6, 1.9)]
    #[case(7, 1.9)]
    fn test_activity_multiplier(#[case] days: u8, #[case] expected: f64) {
        assert_approx_eq!(activity_multiplier(days), expected, 1e-12);
    }

    #[rstest]
    #[case(1600, 3, 2200)]
    #[case(1600, 6, 3040)]
    #[case(1649, 2, 1979)]
    fn test_tdee(#[case] bmr: i64, #[case] days: u8, #[case] expected: i64) {
        assert_eq!(tdee(bmr, days), expected);
    }
}
