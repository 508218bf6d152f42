use super::MUTED;
use crate::fretboard::Fretboard;
use crate::theory::PitchClass;

/// A hand covers roughly this many consecutive frets at once; candidate
/// fingerings never reach outside one window (plus open strings).
pub const WINDOW_SPAN: i8 = 5;

/// Per-string fret choices for one window position: the mute sentinel,
/// fret 0 when the open string sounds a required tone, and every window
/// fret (clipped to `max_fret`) that sounds a required tone.
pub fn string_choices(
    board: &Fretboard,
    required: &[PitchClass],
    window_start: i8,
    max_fret: i8,
) -> Vec<Vec<i8>> {
    (0..board.string_count())
        .map(|string| {
            let mut choices = vec![MUTED];

            if required.contains(&board.note_at(string, 0)) {
                choices.push(0);
            }

            // Widen before adding: near the top of the i8 fret range the
            // window's end bound would otherwise overflow.
            let window_end = i32::from(window_start) + i32::from(WINDOW_SPAN);
            for fret in i32::from(window_start)..window_end {
                if fret <= i32::from(max_fret)
                    && required.contains(&board.note_at(string, fret as i8))
                {
                    choices.push(fret as i8);
                }
            }

            choices
        })
        .collect()
}

/// Walk the Cartesian product of the per-string choice sets, invoking
/// `visit` once per complete fingering. Depth-first so the scratch buffer
/// is reused across the whole product.
pub fn for_each_fingering(choices: &[Vec<i8>], visit: &mut impl FnMut(&[i8])) {
    let mut frets = Vec::with_capacity(choices.len());
    descend(choices, &mut frets, visit);
}

fn descend(choices: &[Vec<i8>], frets: &mut Vec<i8>, visit: &mut impl FnMut(&[i8])) {
    let string = frets.len();
    if string == choices.len() {
        visit(frets);
        return;
    }
    for &fret in &choices[string] {
        frets.push(fret);
        descend(choices, frets, visit);
        frets.pop();
    }
}
