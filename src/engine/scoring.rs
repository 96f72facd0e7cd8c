use serde::{Deserialize, Serialize};

/// Correct answers normalized to a one-minute rate. Zero until a full second has passed.
pub fn words_per_minute(correct: u32, elapsed_secs: u64) -> u32 {
    if elapsed_secs == 0 {
        return 0;
    }
    (correct as f64 / elapsed_secs as f64 * 60.0).round() as u32
}

/// Share of submissions that were correct. No attempts yet counts as perfect.
pub fn accuracy_percent(correct: u32, incorrect: u32) -> u32 {
    let attempts = correct + incorrect;
    if attempts == 0 {
        return 100;
    }
    (correct as f64 / attempts as f64 * 100.0).round() as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    KeepPracticing,
}

impl Rating {
    pub fn from_accuracy(accuracy: u32) -> Self {
        if accuracy >= 80 {
            Rating::Excellent
        } else if accuracy >= 50 {
            Rating::Good
        } else {
            Rating::KeepPracticing
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Rating::Excellent => "Mükemmel!",
            Rating::Good => "İyi!",
            Rating::KeepPracticing => "Pratik Yap!",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Rating::Excellent => "\u{1f3c6}",
            Rating::Good => "\u{2b50}",
            Rating::KeepPracticing => "\u{1f4aa}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wpm_is_zero_without_elapsed_time() {
        assert_eq!(words_per_minute(0, 0), 0);
        assert_eq!(words_per_minute(25, 0), 0);
    }

    #[test]
    fn wpm_scales_to_a_minute() {
        assert_eq!(words_per_minute(10, 60), 10);
        assert_eq!(words_per_minute(10, 30), 20);
        assert_eq!(words_per_minute(1, 7), 9); // 8.57
        assert_eq!(words_per_minute(1, 8), 8); // 7.5 rounds up
    }

    #[test]
    fn accuracy_starts_at_100() {
        assert_eq!(accuracy_percent(0, 0), 100);
    }

    #[test]
    fn accuracy_rounds_to_whole_percent() {
        assert_eq!(accuracy_percent(2, 1), 67);
        assert_eq!(accuracy_percent(1, 2), 33);
        assert_eq!(accuracy_percent(0, 4), 0);
        assert_eq!(accuracy_percent(7, 0), 100);
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(Rating::from_accuracy(100), Rating::Excellent);
        assert_eq!(Rating::from_accuracy(80), Rating::Excellent);
        assert_eq!(Rating::from_accuracy(79), Rating::Good);
        assert_eq!(Rating::from_accuracy(50), Rating::Good);
        assert_eq!(Rating::from_accuracy(49), Rating::KeepPracticing);
    }
}
