use super::filter::FingeringProfile;
use crate::config::ScoringWeights;

/// A barre this wide counts as a standard full shape and earns the bonus.
pub const FULL_BARRE_MIN_STRINGS: usize = 3;

/// Additive playability score; lower is strictly preferred. Pure function
/// of the profile and weights.
pub fn score(profile: &FingeringProfile, weights: &ScoringWeights) -> i32 {
    let mut score = 0i32;

    if profile.root_in_bass {
        score -= weights.bonus_root_bass;
    } else {
        score += weights.penalty_inversion;
    }

    score += profile.muted as i32 * weights.penalty_mute;
    score -= profile.open as i32 * weights.bonus_open_string;

    if profile.barre && profile.barre_width >= FULL_BARRE_MIN_STRINGS {
        score -= weights.bonus_full_barre;
    }

    score += profile.start_fret as i32 * weights.weight_position;

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> FingeringProfile {
        FingeringProfile {
            start_fret: 0,
            muted: 0,
            open: 0,
            root_in_bass: true,
            barre: false,
            barre_width: 0,
        }
    }

    #[test]
    fn test_root_bass_dominates_inversion() {
        let w = ScoringWeights::default();
        let rooted = score(&base_profile(), &w);
        let inverted = score(
            &FingeringProfile {
                root_in_bass: false,
                ..base_profile()
            },
            &w,
        );
        assert_eq!(rooted, -50);
        assert_eq!(inverted, 20);
    }

    #[test]
    fn test_component_sum() {
        let w = ScoringWeights::default();
        let profile = FingeringProfile {
            start_fret: 3,
            muted: 1,
            open: 2,
            root_in_bass: true,
            barre: true,
            barre_width: 3,
        };
        // -50 + 20 - 20 - 20 + 6
        assert_eq!(score(&profile, &w), -64);
    }

    #[test]
    fn test_narrow_barre_gets_no_bonus() {
        let w = ScoringWeights::default();
        let wide = FingeringProfile {
            barre: true,
            barre_width: 3,
            ..base_profile()
        };
        let narrow = FingeringProfile {
            barre: true,
            barre_width: 2,
            ..base_profile()
        };
        assert_eq!(score(&wide, &w) + w.bonus_full_barre, score(&narrow, &w));
    }
}
