use fretforge::api::{find_voicings, VoicingQuery};
use fretforge::config::ScoringWeights;
use fretforge::theory::PitchClass;

#[test]
fn test_query_deserializes_with_defaults() {
    let query: VoicingQuery =
        serde_json::from_str(r#"{"instrument":"guitar","root":"C","quality":"maj7"}"#).unwrap();

    assert_eq!(query.root, PitchClass::C);
    assert_eq!(query.max_fret, 18);
    assert_eq!(query.limit, 10);
    assert!(query.tuning_offsets.is_empty());
}

#[test]
fn test_report_carries_chord_symbol_and_tones() {
    let query: VoicingQuery =
        serde_json::from_str(r#"{"instrument":"guitar","root":"A","quality":"min7"}"#).unwrap();

    let report = find_voicings(&query, ScoringWeights::default());
    assert_eq!(report.chord, "Am7");
    assert_eq!(report.notes.len(), 4);
    assert!(!report.voicings.is_empty());
    assert!(report.voicings.len() <= 10);
}

#[test]
fn test_report_serializes_camel_case() {
    let query: VoicingQuery = serde_json::from_str(
        r#"{"instrument":"guitar","root":"D","quality":"major","tuningOffsets":[0,0,0,0,0,-2],"limit":3}"#,
    )
    .unwrap();

    let report = find_voicings(&query, ScoringWeights::default());
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"startFret\""));
    assert!(json.contains("\"voicings\""));
    assert_eq!(report.voicings.len(), 3);
}
