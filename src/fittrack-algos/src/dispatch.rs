use fittrack_types::{ActivityCode, TrainingPackage};

use crate::{
    Running, Session, SportsWalking, Swimming, Training, TrainingError,
    session::count,
};

type Constructor = fn(&[f64]) -> Result<Training, TrainingError>;

/// Codes a tracker may send, with the calculator each one builds.
static WORKOUT_TYPES: [(ActivityCode, Constructor); 3] = [
    (ActivityCode::Swimming, swimming),
    (ActivityCode::Running, running),
    (ActivityCode::SportsWalking, sports_walking),
];

/// Builds the calculator for a raw tracker package.
///
/// `data` is positional, in the order the tracker sends it:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, length_pool, count_pool
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training, TrainingError> {
    let unknown = || TrainingError::UnknownTrainingType(workout_type.to_owned());
    let code = workout_type.parse::<ActivityCode>().map_err(|_| unknown())?;
    let (_, constructor) = WORKOUT_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .ok_or_else(unknown)?;

    let training = constructor(data)?;
    training.check_finite()?;
    debug!("read {} package with {} values", code, data.len());
    Ok(training)
}

pub fn read(package: &TrainingPackage) -> Result<Training, TrainingError> {
    read_package(&package.workout_type, &package.data)
}

fn arg_count(code: ActivityCode, data: &[f64]) -> TrainingError {
    TrainingError::InvalidArgCount {
        code,
        expected: code.arity(),
        got: data.len(),
    }
}

fn session(action: f64, duration: f64, weight: f64) -> Result<Session, TrainingError> {
    Session::new(count("action", action)?, duration, weight)
}

fn running(data: &[f64]) -> Result<Training, TrainingError> {
    let &[action, duration, weight] = data else {
        return Err(arg_count(ActivityCode::Running, data));
    };

    Ok(Running::new(session(action, duration, weight)?).into())
}

fn sports_walking(data: &[f64]) -> Result<Training, TrainingError> {
    let &[action, duration, weight, height] = data else {
        return Err(arg_count(ActivityCode::SportsWalking, data));
    };

    Ok(SportsWalking::new(session(action, duration, weight)?, height)?.into())
}

fn swimming(data: &[f64]) -> Result<Training, TrainingError> {
    let &[action, duration, weight, length_pool, count_pool] = data else {
        return Err(arg_count(ActivityCode::Swimming, data));
    };

    Ok(Swimming::new(
        session(action, duration, weight)?,
        length_pool,
        count("count_pool", count_pool)?,
    )?
    .into())
}
