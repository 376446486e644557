use std::fmt::Display;

/// Computed figures for one finished training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometres
    pub distance: f64,
    /// Kilometres per hour
    pub speed: f64,
    /// Kilocalories
    pub calories: f64,
}

impl TrainingSummary {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for TrainingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(duration: f64, distance: f64, speed: f64, calories: f64) -> TrainingSummary {
        TrainingSummary {
            training_type: "Swimming".to_owned(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    #[test]
    fn message_template() {
        assert_eq!(
            summary(1.0, 0.9936, 1.0, 336.0).message(),
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Avg. speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn every_number_has_three_decimals() {
        for value in [0.0, 0.0004, 0.9995, 1.0, 12.3456, 797.805, 123_456_789.0, 1e-12] {
            let message = summary(value, value, value, value).message();
            let numbers = message
                .split(|c: char| !(c.is_ascii_digit() || c == '.'))
                .map(|token| token.trim_end_matches('.'))
                .filter(|token| token.contains('.'))
                .collect::<Vec<_>>();

            assert_eq!(numbers.len(), 4, "{}", message);
            for number in numbers {
                let (_, decimals) = number.split_once('.').unwrap();
                assert_eq!(decimals.len(), 3, "{} in {}", number, message);
            }
        }
    }

    #[test]
    fn serializes_fields() {
        let json = serde_json::to_value(summary(1.0, 2.0, 2.0, 3.5)).unwrap();
        assert_eq!(json["training_type"], "Swimming");
        assert_eq!(json["calories"], 3.5);
    }
}
