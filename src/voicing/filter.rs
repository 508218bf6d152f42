use super::MUTED;
use crate::fretboard::Fretboard;
use crate::theory::PitchClass;
use std::collections::HashSet;

/// Widest fret distance (max - min among fretted positions) one hand spans.
pub const MAX_FRET_STRETCH: i8 = 3;
/// Fretting fingers available; a valid barre counts as one.
pub const MAX_FINGERS: usize = 4;

/// Everything the scorer needs to know about a fingering that survived the
/// validity checks.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FingeringProfile {
    /// Lowest fretted (non-open) fret, or 0 when only opens/mutes are used.
    pub start_fret: i8,
    pub muted: usize,
    pub open: usize,
    /// The lowest-pitched sounding string plays the chord root.
    pub root_in_bass: bool,
    pub barre: bool,
    /// Strings pressed by the barre finger (0 when no barre formed).
    pub barre_width: usize,
}

/// Apply the hard validity rules to a raw fingering. Returns `None` on any
/// reject; otherwise the profile feeding the playability score.
pub fn analyze(
    frets: &[i8],
    board: &Fretboard,
    required: &[PitchClass],
    root: PitchClass,
) -> Option<FingeringProfile> {
    // String order is high-to-low pitch, so the bass string is the highest
    // played index. All-muted fingerings die here.
    let bass = frets.iter().rposition(|&f| f != MUTED)?;

    let mut sounded: HashSet<PitchClass> = HashSet::new();
    for (string, &fret) in frets.iter().enumerate() {
        if fret != MUTED {
            sounded.insert(board.note_at(string, fret));
        }
    }

    // Tone coverage. Triads and sevenths must sound complete; extended
    // chords may drop one middle tone but never the root or the defining
    // top extension.
    if required.len() <= 4 {
        if sounded.len() < required.len() {
            return None;
        }
    } else {
        if sounded.len() < required.len() - 1 {
            return None;
        }
        if !sounded.contains(&root) {
            return None;
        }
        if !sounded.contains(required.last()?) {
            return None;
        }
    }

    // Muting is only acceptable outside the played range.
    let first_played = frets.iter().position(|&f| f != MUTED)?;
    if frets[first_played..=bass].iter().any(|&f| f == MUTED) {
        return None;
    }

    let mut profile = FingeringProfile {
        muted: frets.iter().filter(|&&f| f == MUTED).count(),
        open: frets.iter().filter(|&&f| f == 0).count(),
        root_in_bass: board.note_at(bass, frets[bass]) == root,
        ..Default::default()
    };

    let fretted: Vec<i8> = frets.iter().copied().filter(|&f| f > 0).collect();
    if fretted.is_empty() {
        // Opens and mutes only: stretch and finger budget don't apply.
        return Some(profile);
    }

    let min_fret = fretted.iter().copied().min()?;
    let max_fret = fretted.iter().copied().max()?;
    profile.start_fret = min_fret;

    if max_fret - min_fret > MAX_FRET_STRETCH {
        return None;
    }

    // Barre detection: two or more strings on the minimum fret, with no
    // open string inside the barred index span and none at a lower index
    // (arching over an open treble string is not playable).
    let barred: Vec<usize> = frets
        .iter()
        .enumerate()
        .filter(|&(_, &f)| f == min_fret)
        .map(|(string, _)| string)
        .collect();

    let mut fingers = fretted.len();
    if barred.len() >= 2 {
        let lo = *barred.first()?;
        let hi = *barred.last()?;
        let open_in_span = frets[lo..=hi].iter().any(|&f| f == 0);
        let open_above = frets[..lo].iter().any(|&f| f == 0);
        if !open_in_span && !open_above {
            profile.barre = true;
            profile.barre_width = barred.len();
            // The barre finger covers every barred string at once.
            fingers = 1 + (fretted.len() - barred.len());
        }
    }

    if fingers > MAX_FINGERS {
        return None;
    }

    Some(profile)
}
