use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fretforge::fretboard::Fretboard;
use fretforge::theory::{self, ChordQuality, DiatonicChord, PitchClass};
use fretforge::voicing::{Voicing, MUTED};

fn fret_label(fret: i8) -> String {
    if fret == MUTED {
        "x".to_string()
    } else {
        fret.to_string()
    }
}

pub fn print_chord_tones(notes: &[PitchClass]) {
    let rendered: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
    println!("Tones: {}", rendered.join(" "));
}

pub fn print_voicing_table(voicings: &[Voicing], board: &Fretboard) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Frets (high → low)"),
        Cell::new("Start"),
        Cell::new("Notes"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for i in [2, 4] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, v) in voicings.iter().enumerate() {
        let frets: Vec<String> = v.frets.iter().map(|&f| fret_label(f)).collect();
        let notes: Vec<String> = v
            .frets
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f != MUTED)
            .map(|(s, &f)| board.note_at(s, f).to_string())
            .collect();

        table.add_row(vec![
            Cell::new(rank + 1).add_attribute(Attribute::Bold),
            Cell::new(frets.join(" ")),
            Cell::new(v.start_fret),
            Cell::new(notes.join(" ")),
            Cell::new(v.score).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

/// Small on-neck diagram of a single voicing: one row per string, one
/// column per fret of the hand position's window.
pub fn print_voicing_grid(rank: usize, voicing: &Voicing, board: &Fretboard) {
    // Widened so the column range can't overflow at the top of the neck.
    let window_start = i32::from(voicing.start_fret.max(1));

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut header = vec![Cell::new(format!("#{}", rank))];
    for fret in window_start..window_start + 5 {
        header.push(Cell::new(fret).set_alignment(CellAlignment::Center));
    }
    table.add_row(header);

    for (string, &fret) in voicing.frets.iter().enumerate() {
        let status = match fret {
            MUTED => "x",
            0 => "o",
            _ => " ",
        };
        let mut row = vec![Cell::new(format!(
            "{} {}",
            board.note_at(string, 0),
            status
        ))];
        for window_fret in window_start..window_start + 5 {
            let mark = if i32::from(fret) == window_fret { "●" } else { "" };
            row.push(Cell::new(mark).set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_tone_table(root: PitchClass, qualities: &[ChordQuality]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Chord").add_attribute(Attribute::Bold),
        Cell::new("Intervals"),
        Cell::new("Tones").fg(Color::Cyan),
    ]);

    for &quality in qualities {
        let intervals: Vec<String> = quality
            .intervals()
            .iter()
            .map(|i| i.to_string())
            .collect();
        let notes: Vec<String> = theory::chord_tones(root, quality)
            .iter()
            .map(|n| n.to_string())
            .collect();

        table.add_row(vec![
            Cell::new(format!("{}{}", root, quality.symbol())).add_attribute(Attribute::Bold),
            Cell::new(intervals.join(" ")),
            Cell::new(notes.join(" ")).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_scale(notes: &[PitchClass]) {
    let rendered: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
    println!("Scale: {}", rendered.join(" "));
}

pub fn print_diatonic_table(chords: &[DiatonicChord]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Degree").add_attribute(Attribute::Bold),
        Cell::new("Chord"),
    ]);

    for chord in chords {
        table.add_row(vec![
            Cell::new(chord.roman_numeral),
            Cell::new(format!("{}{}", chord.root, chord.quality.symbol())),
        ]);
    }
    println!("\n{}", table);
}
