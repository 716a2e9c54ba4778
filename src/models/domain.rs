use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::core::MatchError;

/// One independently scored compatibility axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Interests,
    Values,
    Personality,
    Astrology,
    Lifestyle,
    Goals,
}

impl Dimension {
    /// Every dimension, in breakdown order
    pub const ALL: [Dimension; 6] = [
        Dimension::Interests,
        Dimension::Values,
        Dimension::Personality,
        Dimension::Astrology,
        Dimension::Lifestyle,
        Dimension::Goals,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Dimension::Interests => "interests",
            Dimension::Values => "values",
            Dimension::Personality => "personality",
            Dimension::Astrology => "astrology",
            Dimension::Lifestyle => "lifestyle",
            Dimension::Goals => "goals",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile as held by the caller's roster
///
/// Tiered lists are rank-significant: the first entry of `top_interests`
/// is the strongest signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default, alias = "interests")]
    pub top_interests: Vec<String>,
    #[serde(default)]
    pub extra_interests: Vec<String>,
    #[serde(default, alias = "values")]
    pub top_values: Vec<String>,
    #[serde(default)]
    pub extra_values: Vec<String>,
    #[serde(default, alias = "mbtiType")]
    pub personality_type: Option<String>,
    #[serde(default)]
    pub zodiac_sign: Option<ZodiacSign>,
    #[serde(default)]
    pub lifestyle: Option<Lifestyle>,
    #[serde(default)]
    pub friendship_goals: Vec<String>,
}

impl Profile {
    /// Parsed personality code, `None` when absent or malformed
    pub fn personality(&self) -> Option<PersonalityType> {
        self.personality_type.as_deref().and_then(PersonalityType::parse)
    }

    /// Lifestyle record, only when it carries at least one usable signal
    pub fn active_lifestyle(&self) -> Option<&Lifestyle> {
        self.lifestyle.as_ref().filter(|ls| ls.is_present())
    }

    pub fn has_goals(&self) -> bool {
        !self.friendship_goals.is_empty()
    }

    /// Distinct interest tags across both tiers
    pub fn interest_tags(&self) -> BTreeSet<&str> {
        self.top_interests
            .iter()
            .chain(self.extra_interests.iter())
            .map(String::as_str)
            .collect()
    }

    /// All value tags, both tiers
    pub fn value_tags(&self) -> BTreeSet<&str> {
        self.top_values
            .iter()
            .chain(self.extra_values.iter())
            .map(String::as_str)
            .collect()
    }
}

/// Practical availability and activity preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifestyle {
    #[serde(default)]
    pub availability: Vec<String>,
    /// Expected in `[0, 1]`
    #[serde(default)]
    pub activity_level: Option<f64>,
    #[serde(default, alias = "groupSize")]
    pub group_size_preference: Vec<String>,
}

impl Lifestyle {
    /// Activity level, treating non-finite values as absent
    pub fn activity(&self) -> Option<f64> {
        self.activity_level.filter(|level| level.is_finite())
    }

    /// A record counts only if some sub-signal is filled in
    pub fn is_present(&self) -> bool {
        !self.availability.is_empty()
            || !self.group_size_preference.is_empty()
            || self.activity().is_some()
    }
}

const PERSONALITY_AXES: [[char; 2]; 4] = [['E', 'I'], ['S', 'N'], ['T', 'F'], ['J', 'P']];

/// Four-letter personality code over `{E,I}{S,N}{T,F}{J,P}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonalityType {
    letters: [char; 4],
}

impl PersonalityType {
    /// Parse a code case-insensitively; anything other than exactly four
    /// letters from the expected alphabets yields `None`.
    pub fn parse(code: &str) -> Option<Self> {
        let mut chars = code.chars().map(|c| c.to_ascii_uppercase());
        let mut letters = ['E'; 4];

        for (slot, axis) in letters.iter_mut().zip(PERSONALITY_AXES.iter()) {
            let letter = chars.next()?;
            if !axis.contains(&letter) {
                return None;
            }
            *slot = letter;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self { letters })
    }

    /// E/I
    pub const fn energy(&self) -> char {
        self.letters[0]
    }

    /// S/N
    pub const fn perception(&self) -> char {
        self.letters[1]
    }

    /// T/F
    pub const fn judgment(&self) -> char {
        self.letters[2]
    }

    /// J/P
    pub const fn structure(&self) -> char {
        self.letters[3]
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Classical element a zodiac sign belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Sun sign; names are matched case-insensitively and serialised lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }
}

impl FromStr for ZodiacSign {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sign = match s.trim().to_ascii_lowercase().as_str() {
            "aries" => ZodiacSign::Aries,
            "taurus" => ZodiacSign::Taurus,
            "gemini" => ZodiacSign::Gemini,
            "cancer" => ZodiacSign::Cancer,
            "leo" => ZodiacSign::Leo,
            "virgo" => ZodiacSign::Virgo,
            "libra" => ZodiacSign::Libra,
            "scorpio" => ZodiacSign::Scorpio,
            "sagittarius" => ZodiacSign::Sagittarius,
            "capricorn" => ZodiacSign::Capricorn,
            "aquarius" => ZodiacSign::Aquarius,
            "pisces" => ZodiacSign::Pisces,
            _ => return Err(MatchError::UnknownZodiacSign(s.to_string())),
        };
        Ok(sign)
    }
}

impl TryFrom<String> for ZodiacSign {
    type Error = MatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Badge summarising a notable compatibility signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    #[serde(rename = "Active Buddy")]
    ActiveBuddy,
    #[serde(rename = "Foodie Friend")]
    FoodieFriend,
    #[serde(rename = "Adventure Pal")]
    AdventurePal,
    #[serde(rename = "Creative Soul")]
    CreativeSoul,
    #[serde(rename = "Kindred Spirit")]
    KindredSpirit,
    #[serde(rename = "Same Wavelength")]
    SameWavelength,
    #[serde(rename = "Cosmic Connection")]
    CosmicConnection,
    #[serde(rename = "MBTI Twin")]
    MbtiTwin,
}

impl Highlight {
    pub const fn label(self) -> &'static str {
        match self {
            Highlight::ActiveBuddy => "Active Buddy",
            Highlight::FoodieFriend => "Foodie Friend",
            Highlight::AdventurePal => "Adventure Pal",
            Highlight::CreativeSoul => "Creative Soul",
            Highlight::KindredSpirit => "Kindred Spirit",
            Highlight::SameWavelength => "Same Wavelength",
            Highlight::CosmicConnection => "Cosmic Connection",
            Highlight::MbtiTwin => "MBTI Twin",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-dimension percentages; `None` means the dimension had no data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub interests: Option<u8>,
    pub values: Option<u8>,
    pub personality: Option<u8>,
    pub astrology: Option<u8>,
    pub lifestyle: Option<u8>,
    pub goals: Option<u8>,
}

impl Breakdown {
    pub const fn get(&self, dimension: Dimension) -> Option<u8> {
        match dimension {
            Dimension::Interests => self.interests,
            Dimension::Values => self.values,
            Dimension::Personality => self.personality,
            Dimension::Astrology => self.astrology,
            Dimension::Lifestyle => self.lifestyle,
            Dimension::Goals => self.goals,
        }
    }

    pub(crate) fn set(&mut self, dimension: Dimension, value: Option<u8>) {
        let slot = match dimension {
            Dimension::Interests => &mut self.interests,
            Dimension::Values => &mut self.values,
            Dimension::Personality => &mut self.personality,
            Dimension::Astrology => &mut self.astrology,
            Dimension::Lifestyle => &mut self.lifestyle,
            Dimension::Goals => &mut self.goals,
        };
        *slot = value;
    }

    /// Dimensions that carry a value
    pub fn present(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL
            .into_iter()
            .filter_map(move |d| self.get(d).map(|v| (d, v)))
    }
}

/// Compatibility of one viewer/candidate pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0-100
    pub overall: u8,
    pub breakdown: Breakdown,
    /// At most three, no duplicates
    pub highlights: Vec<Highlight>,
}

/// Ranked candidate with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    pub profile: Profile,
    #[serde(rename = "match")]
    pub result: MatchResult,
    pub shared_interests: Vec<String>,
    pub shared_values: Vec<String>,
}

/// Base weights per dimension before redistribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub interests: f64,
    pub values: f64,
    pub personality: f64,
    pub astrology: f64,
    pub lifestyle: f64,
    pub goals: f64,
}

impl ScoringWeights {
    pub const fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Interests => self.interests,
            Dimension::Values => self.values,
            Dimension::Personality => self.personality,
            Dimension::Astrology => self.astrology,
            Dimension::Lifestyle => self.lifestyle,
            Dimension::Goals => self.goals,
        }
    }

    /// Reject negative or non-finite base weights, and weights whose sum overflows
    pub fn validate(&self) -> Result<(), MatchError> {
        if let Some(dimension) = Dimension::ALL
            .into_iter()
            .find(|d| !(self.get(*d).is_finite() && self.get(*d) >= 0.0))
        {
            return Err(MatchError::InvalidWeight {
                dimension,
                value: self.get(dimension),
            });
        }

        let total: f64 = Dimension::ALL.iter().map(|d| self.get(*d)).sum();
        if !total.is_finite() {
            return Err(MatchError::UnboundedWeights { total });
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interests: 0.23,
            values: 0.25,
            personality: 0.20,
            astrology: 0.10,
            lifestyle: 0.12,
            goals: 0.10,
        }
    }
}
