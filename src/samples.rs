//! Sample resumes for testing and demonstration.
//!
//! Each sample exercises a different part of the template.

use crate::form::ResumeForm;

/// Short, single-page resume with every field filled.
pub fn jane_doe() -> ResumeForm {
    ResumeForm {
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        phone: "555-1234".into(),
        summary: "Engineer.".into(),
        education: "BS CS".into(),
        experience: "5 yrs".into(),
        skills: "Python, SQL, Go".into(),
        photo: None,
    }
}

/// Only the required fields; every section renders just its heading.
pub fn minimal() -> ResumeForm {
    ResumeForm {
        name: "Sam Lee".into(),
        email: "sam@example.org".into(),
        phone: "+1 202 555 0147".into(),
        ..ResumeForm::default()
    }
}

/// Western European names and typographic punctuation.
pub fn accented() -> ResumeForm {
    ResumeForm {
        name: "Zoë Ørsted-Müller".into(),
        email: "zoe@example.eu".into(),
        phone: "+45 12 34 56 78".into(),
        summary: "Product designer \u{2013} \u{201C}form follows function\u{201D}.".into(),
        education: "MA Design, Kunstakademiet K\u{00F8}benhavn".into(),
        experience: "Lead designer at Café Crème\u{2122} (2019\u{2013}2024).".into(),
        skills: "Figma, Typography , Façade mock-ups".into(),
        photo: None,
    }
}

/// Enough experience text to spill onto a second page.
pub fn long_career() -> ResumeForm {
    let mut experience = String::new();
    for year in 2001..2025 {
        experience.push_str(&format!(
            "{year}: Led a team maintaining payment services, migrated batch jobs to \
             streaming pipelines and mentored new engineers across three offices.\n"
        ));
    }
    ResumeForm {
        name: "Alex Morgan".into(),
        email: "alex.morgan@example.com".into(),
        phone: "555-0100".into(),
        summary: "Backend engineer with two decades of experience in payments.".into(),
        education: "MSc Computer Science\nBSc Mathematics".into(),
        experience,
        skills: "Rust, Go, Kafka, PostgreSQL, Kubernetes".into(),
        photo: None,
    }
}

/// Look up a sample by name.
pub fn by_name(name: &str) -> Option<ResumeForm> {
    match name {
        "jane" => Some(jane_doe()),
        "minimal" => Some(minimal()),
        "accented" => Some(accented()),
        "long" => Some(long_career()),
        _ => None,
    }
}

/// Names accepted by [`by_name`].
pub const SAMPLE_NAMES: [&str; 4] = ["jane", "minimal", "accented", "long"];
