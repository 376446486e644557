use crate::TrainingError;

/// Readings shared by every kind of training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps or strokes counted by the tracker
    action: u32,
    /// Hours
    duration: f64,
    /// Kilograms
    weight: f64,
}

impl Session {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }

    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Accepts finite values strictly above zero.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, TrainingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrainingError::NonPositive { field, value })
    }
}

/// Accepts whole numbers that fit a `u32` counter.
pub(crate) fn count(field: &'static str, value: f64) -> Result<u32, TrainingError> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(TrainingError::InvalidCount { field, value })
    }
}
