use crate::{
    Session, TrainingError,
    session::positive,
    training::{M_IN_KM, TrainingCalculator},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    session: Session,
    /// Metres
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(session: Session, length_pool: f64, count_pool: u32) -> Result<Self, TrainingError> {
        Ok(Self {
            session,
            length_pool: positive("length_pool", length_pool)?,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl TrainingCalculator for Swimming {
    const NAME: &'static str = "Swimming";
    const LEN_STEP: f64 = 1.38;

    fn session(&self) -> &Session {
        &self.session
    }

    /// Speed comes from the swum pool lengths, not from the stroke count.
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.session.duration()
    }

    /// (speed + 1.1) x 2 x weight x hours
    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight()
            * self.session.duration()
    }
}
