//! The resume record – one submission's fields, frozen at construction.

/// A submitted resume.
///
/// Built once from form input and read by the layout stage. Fields are
/// private so nothing can change them after [`Resume::new`].
#[derive(Debug, Clone)]
pub struct Resume {
    name: String,
    email: String,
    phone: String,
    summary: String,
    education: String,
    experience: String,
    /// Raw comma-separated pieces, untrimmed.
    skills: Vec<String>,
}

impl Resume {
    /// Build a record from the seven form inputs. Never fails.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        summary: impl Into<String>,
        education: impl Into<String>,
        experience: impl Into<String>,
        skills: &str,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            summary: summary.into(),
            education: education.into(),
            experience: experience.into(),
            skills: Self::parse_skills(skills),
        }
    }

    /// Split a raw skills string on `,`, keeping order and surrounding
    /// whitespace. An empty string yields no skills.
    pub fn parse_skills(raw: &str) -> Vec<String> {
        if raw.is_empty() {
            return Vec::new();
        }
        raw.split(',').map(str::to_string).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    pub fn experience(&self) -> &str {
        &self.experience
    }

    /// Skills as split from the raw input (not trimmed).
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// The contact line shown under the name.
    pub fn contact_line(&self) -> String {
        format!("Email: {} | Phone: {}", self.email, self.phone)
    }

    /// One `"- skill"` line per skill, trimmed of surrounding whitespace.
    pub fn skill_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.skills.iter().map(|s| format!("- {}", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_skills(raw: &str) -> Resume {
        Resume::new("A", "a@x", "1", "", "", "", raw)
    }

    #[test]
    fn skills_split_on_commas_in_order() {
        let r = with_skills("Python, HTML , CSS");
        assert_eq!(r.skills(), ["Python", " HTML ", " CSS"]);
        let lines: Vec<String> = r.skill_lines().collect();
        assert_eq!(lines, ["- Python", "- HTML", "- CSS"]);
    }

    #[test]
    fn empty_skills_yield_nothing() {
        let r = with_skills("");
        assert!(r.skills().is_empty());
        assert_eq!(r.skill_lines().count(), 0);
    }

    #[test]
    fn empty_pieces_are_kept() {
        let r = with_skills("a,,b");
        assert_eq!(r.skills().len(), 3);
        let lines: Vec<String> = r.skill_lines().collect();
        assert_eq!(lines[1], "- ");
    }

    #[test]
    fn whitespace_around_commas_does_not_change_trimmed_skills() {
        let tight: Vec<String> = with_skills("Go,Rust,SQL").skill_lines().collect();
        let loose: Vec<String> = with_skills("  Go ,  Rust,SQL  ").skill_lines().collect();
        assert_eq!(tight, loose);
    }

    #[test]
    fn contact_line_format() {
        let r = Resume::new("Jane", "jane@x.com", "555-1234", "", "", "", "");
        assert_eq!(r.contact_line(), "Email: jane@x.com | Phone: 555-1234");
    }
}
