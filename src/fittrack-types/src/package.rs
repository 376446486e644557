use std::{fmt::Display, str::FromStr};

use strum::{EnumIter, IntoEnumIterator};

/// Three-letter code a tracker sends in front of a training package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ActivityCode {
    Swimming,
    Running,
    SportsWalking,
}

impl ActivityCode {
    /// Number of positional values a package of this kind carries.
    pub fn arity(&self) -> usize {
        match self {
            ActivityCode::Running => 3,
            ActivityCode::SportsWalking => 4,
            ActivityCode::Swimming => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCode::Swimming => "SWM",
            ActivityCode::Running => "RUN",
            ActivityCode::SportsWalking => "WLK",
        }
    }
}

impl Display for ActivityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityCode::iter().find(|code| code.as_str() == s).ok_or(())
    }
}

/// Raw package as received from a tracker: a code and its positional values.
///
/// The code is kept as a plain string so that packages with unknown codes
/// still deserialize and can be reported one by one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrainingPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl TrainingPackage {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }
}
