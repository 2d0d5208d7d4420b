use std::fmt;

/// One student of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub first_name: String,
    pub last_name: String,
    pub present: bool,
}

/// The only identity a student has in the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentKey {
    pub first_name: String,
    pub last_name: String,
}

impl StudentRecord {
    /// New record, absent by default. Names are trimmed.
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            present: false,
        }
    }

    pub fn with_presence(first_name: &str, last_name: &str, present: bool) -> Self {
        Self {
            present,
            ..Self::new(first_name, last_name)
        }
    }

    pub fn matches(&self, key: &StudentKey) -> bool {
        self.first_name == key.first_name && self.last_name == key.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "present" / "absent"
    pub fn status_str(&self) -> &'static str {
        if self.present { "present" } else { "absent" }
    }
}

impl StudentKey {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

impl fmt::Display for StudentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Convert roster text → presence flag.
/// `yes` is the canonical form; `true` is what older Add rows contain.
pub fn presence_from_str(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "yes" | "true")
}

/// Convert presence flag → roster text.
pub fn presence_to_str(present: bool) -> &'static str {
    if present { "yes" } else { "no" }
}
