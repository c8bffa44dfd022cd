//! Wire shape of faculty and subject records.

use serde_json::{Value, json};
use ttb_model::{Faculty, Subject, SubjectDetails, SubjectKind, Weekday};

#[test]
fn faculty_uses_wire_field_names() {
    let mut faculty = Faculty::new();
    faculty.name = "MSK".to_string();
    let value = serde_json::to_value(&faculty).expect("serialize faculty");

    assert_eq!(
        value,
        json!({
            "Name": "MSK",
            "Full_Name": "",
            "Designation": "Professor",
            "Shift": "8-3",
            "Weekly_Hours": 18,
            "Subjects": []
        })
    );
}

#[test]
fn theory_subject_inlines_type_tag() {
    let mut subject = Subject::new(SubjectKind::Theory);
    subject.holidays.insert(Weekday::Sat);
    subject.num_holidays = 1;
    let value = serde_json::to_value(&subject).expect("serialize subject");

    assert_eq!(value["Type"], "Theory");
    assert_eq!(value["Theory_Classes"], 3);
    assert_eq!(value["Holidays"], json!(["Sat"]));
    assert_eq!(value["Num_Holidays"], 1);
    assert!(value.get("Num_Labs").is_none());
    assert!(value.get("Batches").is_none());
}

#[test]
fn lab_subject_carries_lab_fields_only() {
    let subject = Subject::new(SubjectKind::Lab);
    let value = serde_json::to_value(&subject).expect("serialize subject");

    assert_eq!(value["Type"], "Lab");
    assert_eq!(value["Num_Labs"], 1);
    assert_eq!(value["Batches"], json!(["B1"]));
    assert_eq!(value["Batches_Grouped"], false);
    assert!(value.get("Theory_Classes").is_none());
}

#[test]
fn subject_reads_back_from_wire() {
    let raw = json!({
        "Type": "Lab",
        "Semester": "5",
        "Division": "A",
        "Div_Shift": "10-5",
        "Subject": "Networks Lab",
        "Course_Code": "CS501L",
        "Holidays": ["Mon", "Mon", "Sat"],
        "Num_Holidays": 2,
        "Num_Labs": 2,
        "Batches": ["A1", "A2"],
        "Batches_Grouped": true
    });

    let subject: Subject = serde_json::from_value(raw).expect("deserialize subject");

    assert_eq!(subject.kind(), SubjectKind::Lab);
    assert_eq!(subject.holidays.as_slice(), &[Weekday::Mon, Weekday::Sat]);
    assert_eq!(subject.batches_label().as_deref(), Some("A1/A2"));
    assert!(matches!(
        subject.details,
        SubjectDetails::Lab { num_labs: 2, .. }
    ));
}

#[test]
fn faculty_round_trips_with_subjects() {
    let mut faculty = Faculty::new();
    faculty.name = "RAO".to_string();
    faculty.subjects.push(Subject::new(SubjectKind::Theory));
    faculty.subjects.push(Subject::new(SubjectKind::Lab));

    let json = serde_json::to_string(&faculty).expect("serialize faculty");
    let round: Faculty = serde_json::from_str(&json).expect("deserialize faculty");

    assert_eq!(round, faculty);
    let value: Value = serde_json::from_str(&json).expect("parse json");
    assert_eq!(value["Subjects"][1]["Type"], "Lab");
}
