//! Ordered step table for the resume wizard

use super::field::{FieldDefinition, FieldKind};

/// One gated section of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    /// Yes/no question asked before the section's fields are shown
    pub question: &'static str,
    /// Key of the section in the form document
    pub key: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldDefinition],
    /// Whether the section holds a list of entries
    pub repeatable: bool,
}

impl StepDefinition {
    pub fn field(&self, name: &str) -> Option<&'static FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldDefinition> {
        self.fields.iter().filter(|f| f.required)
    }
}

const PERSONAL_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("fullName", "Full Name")
        .required()
        .placeholder("Your Name")
        .guidance("As it should appear at the top of your resume"),
    FieldDefinition::text("email", "Email")
        .required()
        .placeholder("you@example.com")
        .guidance("A professional address recruiters can reach"),
    FieldDefinition::text("phone", "Phone")
        .placeholder("Phone Number")
        .guidance("Include the country code, e.g. +1 555 123 4567"),
    FieldDefinition::text("location", "Location")
        .placeholder("City, Country")
        .suggestions(&["Remote", "Open to relocation"]),
    FieldDefinition::text("website", "Website")
        .placeholder("Portfolio or LinkedIn URL"),
];

const SUMMARY_FIELDS: &[FieldDefinition] = &[FieldDefinition::text("summary", "Summary")
    .kind(FieldKind::MultiLine)
    .required()
    .placeholder("A short professional summary")
    .guidance("Two or three sentences about what you do best")
    .suggestions(&[
        "Detail-oriented engineer with a track record of shipping reliable software.",
        "Customer-focused professional who thrives in fast-paced teams.",
        "Recent graduate eager to apply strong analytical skills.",
    ])];

const EXPERIENCE_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("title", "Job Title")
        .required()
        .placeholder("Job Title"),
    FieldDefinition::text("company", "Company")
        .required()
        .placeholder("Company Name"),
    FieldDefinition::text("startDate", "Start Date")
        .kind(FieldKind::Date)
        .required()
        .placeholder("Start Date")
        .guidance("YYYY-MM"),
    FieldDefinition::text("endDate", "End Date")
        .kind(FieldKind::Date)
        .placeholder("Present")
        .guidance("Leave blank if this is your current role"),
    FieldDefinition::text("description", "Description")
        .kind(FieldKind::MultiLine)
        .placeholder("What you achieved in this role")
        .suggestions(&[
            "Led a team of engineers delivering customer-facing features.",
            "Reduced operating costs by automating manual processes.",
            "Collaborated with stakeholders to define product requirements.",
        ]),
];

const EDUCATION_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("degree", "Degree")
        .required()
        .placeholder("Degree")
        .suggestions(&["B.Sc. Computer Science", "B.A.", "M.Sc.", "Diploma"]),
    FieldDefinition::text("institution", "Institution")
        .required()
        .placeholder("School or University"),
    FieldDefinition::text("graduationYear", "Graduation Year")
        .kind(FieldKind::Number)
        .placeholder("Year"),
];

const SKILL_FIELDS: &[FieldDefinition] = &[FieldDefinition::text("skill", "Skill")
    .required()
    .placeholder("A skill")
    .guidance("One skill per entry")
    .suggestions(&[
        "Communication",
        "Project Management",
        "JavaScript",
        "Python",
        "SQL",
        "Rust",
    ])];

const PROJECT_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("name", "Project Name")
        .required()
        .placeholder("Project Name"),
    FieldDefinition::text("link", "Link").placeholder("Project URL"),
    FieldDefinition::text("description", "Description")
        .kind(FieldKind::MultiLine)
        .placeholder("What the project does and your role in it"),
];

/// The wizard's sections, in the order they are asked
pub static STEPS: &[StepDefinition] = &[
    StepDefinition {
        question: "Would you like to add your personal information?",
        key: "personal",
        title: "Personal Information",
        fields: PERSONAL_FIELDS,
        repeatable: false,
    },
    StepDefinition {
        question: "Would you like to add a professional summary?",
        key: "summary",
        title: "Summary",
        fields: SUMMARY_FIELDS,
        repeatable: false,
    },
    StepDefinition {
        question: "Do you have any work experience to add?",
        key: "experience",
        title: "Work Experience",
        fields: EXPERIENCE_FIELDS,
        repeatable: true,
    },
    StepDefinition {
        question: "Would you like to add your education?",
        key: "education",
        title: "Education",
        fields: EDUCATION_FIELDS,
        repeatable: true,
    },
    StepDefinition {
        question: "Would you like to list your skills?",
        key: "skills",
        title: "Skills",
        fields: SKILL_FIELDS,
        repeatable: true,
    },
    StepDefinition {
        question: "Do you have any projects to showcase?",
        key: "projects",
        title: "Projects",
        fields: PROJECT_FIELDS,
        repeatable: true,
    },
];

/// Look up a step by its section key
#[cfg(test)]
pub fn step_by_key(key: &str) -> Option<&'static StepDefinition> {
    STEPS.iter().find(|s| s.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_keys_are_unique() {
        let keys: HashSet<_> = STEPS.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), STEPS.len());
    }

    #[test]
    fn test_field_names_unique_within_step() {
        for step in STEPS {
            let names: HashSet<_> = step.fields.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), step.fields.len(), "step {}", step.key);
        }
    }

    #[test]
    fn test_every_step_has_a_required_field() {
        for step in STEPS {
            assert!(step.required_fields().count() > 0, "step {}", step.key);
        }
    }

    #[test]
    fn test_step_by_key() {
        assert_eq!(step_by_key("skills").map(|s| s.repeatable), Some(true));
        assert_eq!(step_by_key("personal").map(|s| s.repeatable), Some(false));
        assert!(step_by_key("hobbies").is_none());
    }

    #[test]
    fn test_phone_accepts_international_format() {
        let phone = step_by_key("personal").unwrap().field("phone").unwrap();
        assert!("+1 (555) 123-4567".chars().all(|c| phone.kind.accepts_char(c)));
    }

    #[test]
    fn test_field_lookup() {
        let personal = step_by_key("personal").unwrap();
        assert_eq!(personal.field("fullName").unwrap().placeholder, "Your Name");
        assert!(personal.field("skill").is_none());
    }

    #[test]
    fn test_wizard_has_at_most_six_steps() {
        assert!(STEPS.len() <= 6);
        assert_eq!(STEPS[0].key, "personal");
    }
}
