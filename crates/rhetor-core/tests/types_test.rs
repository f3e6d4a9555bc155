//! Tests for the speech record model.

use rhetor_core::types::{Category, Country, RecordViolation, SpeechMeta, SpeechRecord};

#[test]
fn test_category_is_exhaustive_and_exclusive() {
    assert_eq!(Category::all().len(), 2);
    assert_ne!(Category::Mainstream, Category::Populist);
}

#[test]
fn test_category_roundtrips_through_name() {
    for category in Category::all() {
        assert_eq!(category.name().parse::<Category>().unwrap(), *category);
    }
}

#[test]
fn test_country_display_matches_corpus_labels() {
    assert_eq!(Country::Uk.to_string(), "UK");
    assert_eq!(Country::Usa.to_string(), "USA");
}

#[test]
fn test_meta_validation_rejects_blank_speaker() {
    let meta = SpeechMeta {
        speech_id: "x".into(),
        speaker: "   ".into(),
        category: Category::Mainstream,
        country: Country::Usa,
        year: 2008,
    };
    assert_eq!(
        meta.validate(),
        Err(RecordViolation::MissingField("speaker"))
    );
}

#[test]
fn test_record_serde_roundtrip() {
    let record = SpeechRecord {
        speech_id: "obama_2008".into(),
        speaker: "Obama".into(),
        category: Category::Mainstream,
        country: Country::Usa,
        year: 2008,
        sentiment_score: 0.31,
    };
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"mainstream\""));
    assert!(json.contains("\"USA\""));
    let back: SpeechRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_violation_messages_are_specific() {
    let violation = RecordViolation::UnknownCategory("centrist".into());
    assert!(violation.to_string().contains("centrist"));
    let violation = RecordViolation::YearOutOfRange(1066);
    assert!(violation.to_string().contains("1066"));
}
