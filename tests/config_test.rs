use fretforge::config::{parse_tuning, ScoringWeights, SearchParams};

#[test]
fn test_embedded_weight_defaults() {
    let w = ScoringWeights::default();
    assert_eq!(w.bonus_root_bass, 50);
    assert_eq!(w.penalty_inversion, 20);
    assert_eq!(w.penalty_mute, 20);
    assert_eq!(w.bonus_open_string, 10);
    assert_eq!(w.bonus_full_barre, 20);
    assert_eq!(w.weight_position, 2);

    let s = SearchParams::default();
    assert_eq!(s.max_fret, 18);
    assert_eq!(s.limit, 10);
}

#[test]
fn test_partial_weights_profile_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    std::fs::write(&path, r#"{"bonus_root_bass": 80, "penalty_mute": 5}"#).unwrap();

    let w = ScoringWeights::load_from_file(&path).unwrap();
    assert_eq!(w.bonus_root_bass, 80);
    assert_eq!(w.penalty_mute, 5);
    // Untouched fields stay at the embedded defaults.
    assert_eq!(w.bonus_open_string, 10);
    assert_eq!(w.weight_position, 2);
}

#[test]
fn test_weights_file_missing_is_an_error() {
    assert!(ScoringWeights::load_from_file("does/not/exist.json").is_err());
}

#[test]
fn test_tuning_parsing() {
    assert_eq!(parse_tuning("0,0,0,0,0,-2").unwrap(), [0, 0, 0, 0, 0, -2]);
    assert_eq!(parse_tuning(" 1 , -1 ").unwrap(), [1, -1]);
    assert!(parse_tuning("0,drop,0").is_err());
}
