use fretforge::fretboard::Instrument;
use fretforge::theory::{ChordQuality, PitchClass, CHROMATIC_SCALE};
use fretforge::voicing::{get_chord_voicings, Voicing};

fn pattern(v: &Voicing) -> String {
    v.frets
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn test_c_major_standard_guitar_shapes() {
    let voicings = get_chord_voicings(
        Instrument::Guitar,
        &[],
        6,
        PitchClass::C,
        ChordQuality::Major,
        18,
        50,
    );
    assert!(!voicings.is_empty());

    // Open C, high-to-low: [0, 1, 0, 2, 3, -1]
    assert!(voicings.iter().any(|v| pattern(v) == "0,1,0,2,3,-1"));
    // A-form barre at the 3rd fret: [3, 5, 5, 5, 3, -1]
    assert!(voicings.iter().any(|v| pattern(v) == "3,5,5,5,3,-1"));
    // E-form barre at the 8th fret: [8, 8, 9, 10, 10, 8]
    assert!(voicings.iter().any(|v| pattern(v) == "8,8,9,10,10,8"));
}

#[test]
fn test_drop_d_open_d_major() {
    let drop_d = [0, 0, 0, 0, 0, -2];
    let voicings = get_chord_voicings(
        Instrument::Guitar,
        &drop_d,
        6,
        PitchClass::D,
        ChordQuality::Major,
        18,
        10,
    );

    // Open drop-D shape: [2, 3, 2, 0, 0, 0]
    assert!(voicings.iter().any(|v| pattern(v) == "2,3,2,0,0,0"));
}

#[test]
fn test_g_major_top_rank_prefers_open_root_bass() {
    let voicings = get_chord_voicings(
        Instrument::Guitar,
        &[],
        6,
        PitchClass::G,
        ChordQuality::Major,
        18,
        5,
    );

    let first = pattern(&voicings[0]);
    assert!(
        first == "3,0,0,0,2,3" || first == "3,3,0,0,2,3",
        "unexpected top voicing {}",
        first
    );
}

#[test]
fn test_common_chords_always_have_a_voicing() {
    let common = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Dom7,
        ChordQuality::Maj7,
        ChordQuality::Min7,
        ChordQuality::Min7b5,
        ChordQuality::Dim7,
        ChordQuality::MinMaj7,
    ];

    for root in CHROMATIC_SCALE {
        for quality in common {
            let voicings =
                get_chord_voicings(Instrument::Guitar, &[], 6, root, quality, 18, 10);
            assert!(
                !voicings.is_empty(),
                "no voicing for {}{}",
                root,
                quality.symbol()
            );
        }
    }
}

#[test]
fn test_bass_triads_exist() {
    let voicings = get_chord_voicings(
        Instrument::Bass,
        &[],
        4,
        PitchClass::C,
        ChordQuality::Major,
        18,
        10,
    );
    assert!(!voicings.is_empty());
    assert!(voicings.iter().all(|v| v.frets.len() == 4));
}

#[test]
fn test_short_neck_yields_empty_not_error() {
    // No full 5-fret window fits below fret 5, so the search space is empty.
    let voicings = get_chord_voicings(
        Instrument::Guitar,
        &[],
        6,
        PitchClass::C,
        ChordQuality::Major,
        4,
        10,
    );
    assert!(voicings.is_empty());
}

#[test]
fn test_full_i8_neck_searches_cleanly() {
    // max_fret at i8::MAX pushes the last window right up against the type
    // boundary; the search must complete and stay within the neck.
    let voicings = get_chord_voicings(
        Instrument::Guitar,
        &[],
        6,
        PitchClass::C,
        ChordQuality::Major,
        127,
        10,
    );
    assert!(!voicings.is_empty());
    assert!(voicings
        .iter()
        .all(|v| v.frets.iter().all(|&f| (-1..=127).contains(&f))));
}

#[test]
fn test_results_are_sorted_unique_and_limited() {
    let voicings = get_chord_voicings(
        Instrument::Guitar,
        &[],
        6,
        PitchClass::A,
        ChordQuality::Min7,
        18,
        7,
    );

    assert!(voicings.len() <= 7);
    assert!(voicings.windows(2).all(|w| w[0].score <= w[1].score));

    let mut patterns: Vec<String> = voicings.iter().map(pattern).collect();
    patterns.sort();
    patterns.dedup();
    assert_eq!(patterns.len(), voicings.len());
}

#[test]
fn test_extended_chord_keeps_root_and_top_extension() {
    let voicings = get_chord_voicings(
        Instrument::Guitar,
        &[],
        6,
        PitchClass::C,
        ChordQuality::Dom9,
        18,
        20,
    );
    let tones = fretforge::theory::chord_tones(PitchClass::C, ChordQuality::Dom9);
    let top = *tones.last().unwrap();

    let board = fretforge::fretboard::Fretboard::standard(Instrument::Guitar);
    for v in &voicings {
        let sounded: Vec<PitchClass> = v
            .frets
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f >= 0)
            .map(|(s, &f)| board.note_at(s, f))
            .collect();
        assert!(sounded.contains(&PitchClass::C), "missing root in {:?}", v);
        assert!(sounded.contains(&top), "missing 9th in {:?}", v);
    }
}
