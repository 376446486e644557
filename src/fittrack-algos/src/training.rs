use fittrack_types::ActivityCode;

use crate::{Session, TrainingError, TrainingSummary};

mod running;
pub use running::Running;

mod walking;
pub use walking::SportsWalking;

mod swimming;
pub use swimming::Swimming;

pub(crate) const M_IN_KM: f64 = 1000.0;
pub(crate) const MIN_IN_H: f64 = 60.0;

/// Distance, speed and energy estimates for one kind of training.
///
/// Implementors only provide the calorie formula; distance and mean speed
/// default to step counting with [`TrainingCalculator::LEN_STEP`] metres per
/// action.
pub trait TrainingCalculator {
    /// Name used in summaries
    const NAME: &'static str;
    /// Metres covered per step or stroke
    const LEN_STEP: f64 = 0.65;

    fn session(&self) -> &Session;

    /// Kilometres
    fn distance(&self) -> f64 {
        f64::from(self.session().action()) * Self::LEN_STEP / M_IN_KM
    }

    /// Kilometres per hour
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration()
    }

    /// Kilocalories
    fn spent_calories(&self) -> f64;

    fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            training_type: Self::NAME.to_owned(),
            duration: self.session().duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// A calculator for any supported kind of training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn code(&self) -> ActivityCode {
        match self {
            Training::Running(_) => ActivityCode::Running,
            Training::SportsWalking(_) => ActivityCode::SportsWalking,
            Training::Swimming(_) => ActivityCode::Swimming,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Training::Running(_) => Running::NAME,
            Training::SportsWalking(_) => SportsWalking::NAME,
            Training::Swimming(_) => Swimming::NAME,
        }
    }

    pub fn session(&self) -> &Session {
        match self {
            Training::Running(t) => t.session(),
            Training::SportsWalking(t) => t.session(),
            Training::Swimming(t) => t.session(),
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            Training::Running(t) => t.distance(),
            Training::SportsWalking(t) => t.distance(),
            Training::Swimming(t) => t.distance(),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Running(t) => t.mean_speed(),
            Training::SportsWalking(t) => t.mean_speed(),
            Training::Swimming(t) => t.mean_speed(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Training::Running(t) => t.spent_calories(),
            Training::SportsWalking(t) => t.spent_calories(),
            Training::Swimming(t) => t.spent_calories(),
        }
    }

    pub fn summary(&self) -> TrainingSummary {
        match self {
            Training::Running(t) => t.summary(),
            Training::SportsWalking(t) => t.summary(),
            Training::Swimming(t) => t.summary(),
        }
    }

    /// Fails when an extreme but valid reading pushes a derived figure to
    /// infinity, e.g. a subnormal duration.
    pub fn check_finite(&self) -> Result<(), TrainingError> {
        let summary = self.summary();
        if summary.distance.is_finite() && summary.speed.is_finite() && summary.calories.is_finite()
        {
            Ok(())
        } else {
            Err(TrainingError::Overflow {
                code: self.code(),
                speed: summary.speed,
                calories: summary.calories,
            })
        }
    }
}

impl From<Running> for Training {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<SportsWalking> for Training {
    fn from(value: SportsWalking) -> Self {
        Self::SportsWalking(value)
    }
}

impl From<Swimming> for Training {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn random_trainings(size: usize) -> Vec<Training> {
        let mut rng = rand::rng();
        (0..size)
            .map(|i| -> Training {
                let session = Session::new(
                    rng.random_range(0..50_000),
                    rng.random_range(0.05..6.0),
                    rng.random_range(30.0..150.0),
                )
                .unwrap();

                match i % 3 {
                    0 => Running::new(session).into(),
                    1 => SportsWalking::new(session, rng.random_range(120.0..210.0))
                        .unwrap()
                        .into(),
                    _ => Swimming::new(
                        session,
                        rng.random_range(10.0..50.0),
                        rng.random_range(0..200),
                    )
                    .unwrap()
                    .into(),
                }
            })
            .collect()
    }

    #[test]
    fn distance_and_speed_are_non_negative() {
        for training in random_trainings(300) {
            assert!(training.distance() >= 0.0, "{:?}", training);
            assert!(training.mean_speed() >= 0.0, "{:?}", training);
            assert!(training.spent_calories().is_finite(), "{:?}", training);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        for training in random_trainings(30) {
            let first = training.summary();
            assert_eq!(training.distance(), training.distance());
            assert_eq!(training.mean_speed(), training.mean_speed());
            assert_eq!(training.spent_calories(), training.spent_calories());
            assert_eq!(first, training.summary());
        }
    }

    #[test]
    fn enum_delegates_to_variant() {
        let session = Session::new(15000, 1.0, 75.0).unwrap();
        let running = Running::new(session);
        let training = Training::from(running);

        assert_eq!(training.code(), ActivityCode::Running);
        assert_eq!(training.name(), "Running");
        assert_eq!(training.session(), &session);
        assert_eq!(training.summary(), running.summary());
    }

    #[test]
    fn realistic_trainings_are_finite() {
        for training in random_trainings(30) {
            assert_eq!(training.check_finite(), Ok(()), "{:?}", training);
        }
    }

    #[test]
    fn huge_weight_overflows_calories() {
        let session = Session::new(720, 1.0, 1e300).unwrap();
        let swim = Training::from(Swimming::new(session, 1e300, 40).unwrap());
        assert!(matches!(
            swim.check_finite(),
            Err(TrainingError::Overflow {
                code: ActivityCode::Swimming,
                ..
            })
        ));
    }

    #[test]
    fn summary_carries_duration_and_name() {
        let session = Session::new(9000, 1.5, 75.0).unwrap();
        let summary = SportsWalking::new(session, 180.0).unwrap().summary();
        assert_eq!(summary.training_type, "SportsWalking");
        assert_eq!(summary.duration, 1.5);
    }
}
