//! Deployment environments that a notification family is bound to

use crate::error::CreationError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    /// All environments in menu order
    pub const ALL: [Environment; 2] = [Environment::Production, Environment::Sandbox];

    pub fn display_name(&self) -> &'static str {
        match self {
            Environment::Production => "Production",
            Environment::Sandbox => "Sandbox",
        }
    }

    /// Tag prefixed to every confirmation produced in this environment
    pub fn tag(&self) -> &'static str {
        match self {
            Environment::Production => "[PROD]",
            Environment::Sandbox => "[SANDBOX]",
        }
    }

    /// Menu code (1-based)
    pub fn code(&self) -> u8 {
        match self {
            Environment::Production => 1,
            Environment::Sandbox => 2,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<u8> for Environment {
    type Error = CreationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|e| e.code() == code)
            .ok_or_else(|| CreationError::invalid_selector("environment", code))
    }
}

impl FromStr for Environment {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            _ => Err(CreationError::invalid_selector("environment", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Environment::try_from(1).unwrap(), Environment::Production);
        assert_eq!(Environment::try_from(2).unwrap(), Environment::Sandbox);
        assert!(matches!(
            Environment::try_from(3),
            Err(CreationError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_parse() {
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" sandbox ".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert!("staging".parse::<Environment>().is_err());
    }
}
