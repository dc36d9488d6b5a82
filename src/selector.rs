use crate::domain::Task;
use rand::Rng;

/// Source of the random index used by a spin
pub trait RandomSource {
    /// An index in `0..len`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Thread-local RNG, unseeded
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

impl RandomSource for rand::rngs::StdRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Result of a spin
#[derive(Debug, Clone, PartialEq)]
pub enum SpinOutcome {
    /// Minutes were missing, non-finite or not positive
    InvalidMinutes,
    /// Nothing eligible for this budget/location
    NoneFit {
        minutes: f64,
        location: Option<String>,
    },
    Picked(Task),
}

impl SpinOutcome {
    /// User-facing text for the outcomes that pick nothing
    pub fn message(&self) -> Option<String> {
        match self {
            SpinOutcome::InvalidMinutes => Some("Type how many minutes you have 🙂".to_string()),
            SpinOutcome::NoneFit { minutes, location } => {
                let at = location
                    .as_ref()
                    .map(|loc| format!(" at \"{}\"", loc))
                    .unwrap_or_default();
                Some(format!("No tasks fit {} minutes{} 😭", minutes, at))
            }
            SpinOutcome::Picked(_) => None,
        }
    }
}

/// Treat a blank location filter as no filter
pub fn normalize_filter(location: Option<&str>) -> Option<&str> {
    location.map(str::trim).filter(|loc| !loc.is_empty())
}

/// Whether a task can be picked for this budget and location
pub fn is_eligible(task: &Task, minutes: f64, location: Option<&str>) -> bool {
    if task.done {
        return false;
    }
    if f64::from(task.duration) > minutes {
        return false;
    }
    match location {
        Some(loc) => task.is_at(loc),
        None => true,
    }
}

/// The tasks a spin would choose from, in store order
pub fn eligible_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    minutes: f64,
    location: Option<&str>,
) -> Vec<&'a Task> {
    let location = normalize_filter(location);
    tasks
        .into_iter()
        .filter(|t| is_eligible(t, minutes, location))
        .collect()
}

/// Pick one eligible task uniformly at random
pub fn spin<'a, R: RandomSource + ?Sized>(
    tasks: impl IntoIterator<Item = &'a Task>,
    minutes: f64,
    location: Option<&str>,
    rng: &mut R,
) -> SpinOutcome {
    if !minutes.is_finite() || minutes <= 0.0 {
        return SpinOutcome::InvalidMinutes;
    }

    let location = normalize_filter(location);
    let eligible = eligible_tasks(tasks, minutes, location);
    if eligible.is_empty() {
        return SpinOutcome::NoneFit {
            minutes,
            location: location.map(str::to_string),
        };
    }

    let index = rng.pick_index(eligible.len());
    SpinOutcome::Picked(eligible[index].clone())
}

/// Parse free-form minutes input; anything unparseable becomes NaN and fails validation
pub fn parse_minutes(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}
