use crate::{
    Session, TrainingError,
    session::positive,
    training::{MIN_IN_H, TrainingCalculator},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    session: Session,
    /// Centimetres
    height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const CM_IN_M: f64 = 100.0;
    const SEC_IN_MIN: f64 = 60.0;
    /// km/h -> m/s, rounded to three decimals
    const KMH_IN_MSEC: f64 = 0.278;

    pub fn new(session: Session, height: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            session,
            height: positive("height", height)?,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl TrainingCalculator for SportsWalking {
    const NAME: &'static str = "SportsWalking";

    fn session(&self) -> &Session {
        &self.session
    }

    /// (0.035 x weight + (speed_ms^2 / height_m) x 0.029 x weight) x minutes
    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight();
        let speed_ms = self.mean_speed() * Self::KMH_IN_MSEC;

        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_ms.powi(2) / (self.height / Self::CM_IN_M)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * (self.session.duration() * MIN_IN_H)
    }
}
