use std::slice::Iter;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Category, Goal, Property, UserProfile};

#[derive(
    Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SplitType {
    FullBody,
    UpperLower,
    PushPullLegs,
    SkillsFocus,
}

impl Property for SplitType {
    fn iter() -> Iter<'static, SplitType> {
        static SPLIT: [SplitType; 4] = [
            SplitType::FullBody,
            SplitType::UpperLower,
            SplitType::PushPullLegs,
            SplitType::SkillsFocus,
        ];
        SPLIT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SplitType::FullBody => "Full Body",
            SplitType::UpperLower => "Upper / Lower",
            SplitType::PushPullLegs => "Push / Pull / Legs",
            SplitType::SkillsFocus => "Skills Focus",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Theme {
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Skills,
    Rest,
}

impl Theme {
    /// Movement categories a session with this theme is composed of, in session order.
    #[must_use]
    pub fn categories(self) -> &'static [Category] {
        match self {
            Theme::FullBody => &[Category::Push, Category::Pull, Category::Legs, Category::Core],
            Theme::Upper | Theme::Skills => &[Category::Push, Category::Pull, Category::Core],
            Theme::Lower => &[Category::Legs, Category::Core],
            Theme::Push => &[Category::Push, Category::Core],
            Theme::Pull => &[Category::Pull, Category::Core],
            Theme::Rest => &[],
        }
    }

    #[must_use]
    pub fn is_rest(self) -> bool {
        self == Theme::Rest
    }
}

impl Property for Theme {
    fn iter() -> Iter<'static, Theme> {
        static THEME: [Theme; 7] = [
            Theme::FullBody,
            Theme::Upper,
            Theme::Lower,
            Theme::Push,
            Theme::Pull,
            Theme::Skills,
            Theme::Rest,
        ];
        THEME.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Theme::FullBody => "Full Body",
            Theme::Upper => "Upper Body",
            Theme::Lower => "Lower Body",
            Theme::Push => "Push",
            Theme::Pull => "Pull",
            Theme::Skills => "Skills",
            Theme::Rest => "Rest",
        }
    }
}

#[must_use]
pub fn determine_split(profile: &UserProfile) -> SplitType {
    if profile.goal == Goal::Skills {
        return SplitType::SkillsFocus;
    }

    let days = profile.available_days_per_week;
    let duration = profile.session_duration_min;

    if days <= 3 || duration < 30 {
        SplitType::FullBody
    } else if days == 4 {
        SplitType::UpperLower
    } else if days >= 5 && duration >= 40 {
        SplitType::PushPullLegs
    } else {
        SplitType::FullBody
    }
}

/// Theme of every program day.
///
/// Training days are always the first `days_per_week` days of each 7-day block.
/// The theme rotation advances on training days only.
#[must_use]
pub fn day_themes(split: SplitType, total_days: u32, days_per_week: u8) -> Vec<Theme> {
    let mut training_day = 0usize;

    (0..total_days)
        .map(|day| {
            if day % 7 >= u32::from(days_per_week) {
                return Theme::Rest;
            }

            let rotation: &[Theme] = match split {
                SplitType::FullBody => &[Theme::FullBody],
                SplitType::UpperLower => &[Theme::Upper, Theme::Lower],
                SplitType::PushPullLegs => &[Theme::Push, Theme::Pull, Theme::Lower],
                SplitType::SkillsFocus => &[Theme::Skills, Theme::FullBody],
            };
            let theme = rotation[training_day % rotation.len()];
            training_day += 1;
            theme
        })
        .collect()
}
