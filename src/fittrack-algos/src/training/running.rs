use crate::{
    Session,
    training::{M_IN_KM, MIN_IN_H, TrainingCalculator},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl TrainingCalculator for Running {
    const NAME: &'static str = "Running";

    fn session(&self) -> &Session {
        &self.session
    }

    /// (18 x speed + 1.79) x weight / 1000 x minutes
    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.session.weight()
            / M_IN_KM
            * (self.session.duration() * MIN_IN_H)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(action: u32, duration: f64, weight: f64) -> Running {
        Running::new(Session::new(action, duration, weight).unwrap())
    }

    #[test]
    fn one_hour_run() {
        let run = running(15000, 1.0, 75.0);
        assert!((run.distance() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed() - 9.75).abs() < 1e-9);
        // (18 x 9.75 + 1.79) x 75 / 1000 x 60 = 177.29 x 4.5
        assert!(
            (run.spent_calories() - 797.805).abs() < 1e-9,
            "got {}",
            run.spent_calories()
        );
    }

    #[test]
    fn longer_run_is_slower() {
        let fast = running(15000, 1.0, 75.0);
        let slow = running(15000, 2.0, 75.0);
        assert_eq!(fast.distance(), slow.distance());
        assert!((slow.mean_speed() - 4.875).abs() < 1e-9);
    }

    #[test]
    fn standing_still_burns_shift_only() {
        // speed 0 -> 1.79 x 80 / 1000 x 30
        let run = running(0, 0.5, 80.0);
        assert_eq!(run.distance(), 0.0);
        assert!((run.spent_calories() - 4.296).abs() < 1e-9);
    }
}
