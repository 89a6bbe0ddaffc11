//! Form field and step value objects

use std::fmt;

/// Programs a submitter can choose from, in display order
pub const PROGRAM_CATALOG: [&str; 5] = [
    "Inventory Management System",
    "Asset Tracking Program",
    "Supply Chain Optimization",
    "Warehouse Management",
    "Stock Control System",
];

/// Returns true if `program` is exactly one of the catalog entries
pub fn is_catalog_program(program: &str) -> bool {
    PROGRAM_CATALOG.contains(&program)
}

/// A field that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Program,
    File,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Program => "program",
            Self::File => "file",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fields that accept free text via `set_field`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Email,
    Program,
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Name => Field::Name,
            TextField::Email => Field::Email,
            TextField::Program => Field::Program,
        }
    }
}

/// One of the three wizard screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    PersonalInfo = 1,
    ProgramSelection = 2,
    DocumentUpload = 3,
}

impl Step {
    pub const COUNT: u8 = 3;

    /// Next step, saturating at the last one
    pub fn next(&self) -> Self {
        match self {
            Self::PersonalInfo => Self::ProgramSelection,
            Self::ProgramSelection | Self::DocumentUpload => Self::DocumentUpload,
        }
    }

    /// Previous step, saturating at the first one
    pub fn prev(&self) -> Self {
        match self {
            Self::PersonalInfo | Self::ProgramSelection => Self::PersonalInfo,
            Self::DocumentUpload => Self::ProgramSelection,
        }
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Self::PersonalInfo)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Self::DocumentUpload)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::ProgramSelection => "Program Selection",
            Self::DocumentUpload => "Document Upload",
        }
    }

    /// Completion percentage shown in the progress header
    pub fn percent_complete(&self) -> u16 {
        let ratio = f64::from(self.number()) / f64::from(Self::COUNT);
        (ratio * 100.0).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_membership_is_exact() {
        assert!(is_catalog_program("Warehouse Management"));
        assert!(!is_catalog_program("warehouse management"));
        assert!(!is_catalog_program(" Warehouse Management"));
        assert!(!is_catalog_program(""));
    }

    #[test]
    fn test_step_next_saturates() {
        assert_eq!(Step::PersonalInfo.next(), Step::ProgramSelection);
        assert_eq!(Step::ProgramSelection.next(), Step::DocumentUpload);
        assert_eq!(Step::DocumentUpload.next(), Step::DocumentUpload);
    }

    #[test]
    fn test_step_prev_saturates() {
        assert_eq!(Step::DocumentUpload.prev(), Step::ProgramSelection);
        assert_eq!(Step::ProgramSelection.prev(), Step::PersonalInfo);
        assert_eq!(Step::PersonalInfo.prev(), Step::PersonalInfo);
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(Step::default().number(), 1);
        assert_eq!(Step::ProgramSelection.number(), 2);
        assert_eq!(Step::DocumentUpload.number(), 3);
        assert!(Step::default().is_first());
        assert!(Step::DocumentUpload.is_last());
    }

    #[test]
    fn test_percent_complete() {
        assert_eq!(Step::PersonalInfo.percent_complete(), 33);
        assert_eq!(Step::ProgramSelection.percent_complete(), 67);
        assert_eq!(Step::DocumentUpload.percent_complete(), 100);
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(Field::from(TextField::Email).key(), "email");
        assert_eq!(Field::File.to_string(), "file");
    }
}
