use std::fmt;
use std::str::FromStr;

use crate::domain::haccp::entities::errors::GeneratePlanError;

/// `major.minor` plan version. Each regeneration bumps the minor part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanVersion {
    pub major: u32,
    pub minor: u32,
}

impl PlanVersion {
    pub const INITIAL: PlanVersion = PlanVersion { major: 1, minor: 0 };

    /// `None` once the minor part is exhausted.
    pub fn next(self) -> Option<Self> {
        self.minor.checked_add(1).map(|minor| Self {
            major: self.major,
            minor,
        })
    }

    /// Version of the plan that supersedes `latest`, or `1.0` for a
    /// location without any plan yet.
    pub fn following(latest: Option<&str>) -> Result<Self, GeneratePlanError> {
        match latest {
            None => Ok(Self::INITIAL),
            Some(version) => version
                .parse::<PlanVersion>()?
                .next()
                .ok_or_else(|| GeneratePlanError::InvalidVersionFormat(version.to_string())),
        }
    }
}

impl FromStr for PlanVersion {
    type Err = GeneratePlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GeneratePlanError::InvalidVersionFormat(s.to_string());

        let (major, minor) = s.trim().split_once('.').ok_or_else(invalid)?;
        let major = major.parse::<u32>().map_err(|_| invalid())?;
        let minor = minor.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self { major, minor })
    }
}

impl fmt::Display for PlanVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
