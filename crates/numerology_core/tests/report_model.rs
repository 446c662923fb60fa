use numerology_core::{build_report, AgeRange, BirthDate, NumerologyNumber, NumerologyReport};

#[test]
fn report_serialization_uses_expected_wire_fields() {
    let report = build_report("Nguyen Van An", "1990-05-15", 2026).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["fullName"], "Nguyen Van An");
    assert_eq!(json["birthDate"], "1990-05-15");
    assert_eq!(json["lifePathNumber"], 3);
    assert_eq!(json["expressionNumber"], 3);
    assert_eq!(json["soulUrgeNumber"], 8);
    assert_eq!(json["personalityNumber"], 4);
    assert_eq!(json["birthdayNumber"], 6);
    assert_eq!(json["attitudeNumber"], 2);
    assert_eq!(json["personalYear"], 3);
    assert_eq!(json["evaluatedYear"], 2026);
    assert!(json["personalYearAnalysis"].is_string());
    assert!(json["lifePath"]["strengths"].is_array());
    assert!(json["soulUrge"]["desires"].is_array());
    assert_eq!(json["birthChart"]["numbers"]["1"], 2);
    assert_eq!(json["birthChart"]["numbers"]["2"], 0);
    assert_eq!(
        json["birthChart"]["missing"],
        serde_json::json!([2, 3, 4, 6, 7, 8])
    );
    assert_eq!(json["lifeCycles"]["first"]["age"], "0-33");
    assert_eq!(json["lifeCycles"]["third"]["age"], "61+");
    assert_eq!(json["pinnacles"]["first"]["number"], 11);
    assert_eq!(json["pinnacles"]["fourth"]["age"], "52+");

    let decoded: NumerologyReport = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, report);
}

#[test]
fn deserialize_rejects_unreduced_numbers() {
    let report = build_report("Nguyen Van An", "1990-05-15", 2026).unwrap();
    let mut json = serde_json::to_value(&report).unwrap();
    json["lifePathNumber"] = serde_json::json!(12);

    let err = serde_json::from_value::<NumerologyReport>(json).unwrap_err();
    assert!(
        err.to_string().contains("numerology number 12 is out of range"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_malformed_age_labels() {
    let report = build_report("Nguyen Van An", "1990-05-15", 2026).unwrap();
    let mut json = serde_json::to_value(&report).unwrap();
    json["pinnacles"]["second"]["age"] = serde_json::json!("42-34");

    let err = serde_json::from_value::<NumerologyReport>(json).unwrap_err();
    assert!(
        err.to_string().contains("must be >= start"),
        "unexpected error: {err}"
    );
}

#[test]
fn numerology_number_serializes_as_bare_integer() {
    let number = NumerologyNumber::try_from(22).unwrap();
    assert_eq!(serde_json::to_string(&number).unwrap(), "22");
    assert_eq!(
        serde_json::from_str::<NumerologyNumber>("33").unwrap().value(),
        33
    );
    assert!(serde_json::from_str::<NumerologyNumber>("10").is_err());
}

#[test]
fn birth_date_serializes_as_canonical_date() {
    let date = BirthDate::parse("1990-05-15T08:00:00+07:00").unwrap();
    assert_eq!(serde_json::to_string(&date).unwrap(), "\"1990-05-15\"");

    let decoded: BirthDate = serde_json::from_str("\"2000-02-29\"").unwrap();
    assert_eq!((decoded.day(), decoded.month(), decoded.year()), (29, 2, 2000));
    assert!(serde_json::from_str::<BirthDate>("\"1900-02-29\"").is_err());
}

#[test]
fn age_range_serializes_as_label() {
    assert_eq!(
        serde_json::to_string(&AgeRange::bounded(34, 60)).unwrap(),
        "\"34-60\""
    );
    assert_eq!(
        serde_json::from_str::<AgeRange>("\"61+\"").unwrap(),
        AgeRange::open(61)
    );
}
