//! Canned computer configurations

use super::computer::{Computer, ComputerBuilder};
use crate::error::{CreationError, Result};
use std::fmt;
use std::str::FromStr;

/// Named configurations the director knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Office,
    Gaming,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Office, Profile::Gaming];

    pub fn display_name(&self) -> &'static str {
        match self {
            Profile::Office => "Office PC",
            Profile::Gaming => "Gaming PC",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Profile {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "office" => Ok(Profile::Office),
            "gaming" => Ok(Profile::Gaming),
            _ => Err(CreationError::invalid_selector("computer profile", s)),
        }
    }
}

/// Drives a borrowed builder through fixed call sequences
pub struct ComputerDirector<'a> {
    builder: &'a mut ComputerBuilder,
}

impl<'a> ComputerDirector<'a> {
    pub fn new(builder: &'a mut ComputerBuilder) -> Self {
        Self { builder }
    }

    pub fn build_office_pc(&mut self) -> Result<Computer> {
        self.builder
            .reset()
            .set_cpu("Intel i5")
            .set_ram(16)
            .set_storage(512)
            .enable_wifi()
            .build()
    }

    pub fn build_gaming_pc(&mut self) -> Result<Computer> {
        self.builder
            .reset()
            .set_cpu("Ryzen 7")
            .set_ram(32)
            .set_storage(1000)
            .set_gpu("RTX 4070")
            .enable_wifi()
            .enable_rgb()
            .build()
    }

    pub fn build(&mut self, profile: Profile) -> Result<Computer> {
        match profile {
            Profile::Office => self.build_office_pc(),
            Profile::Gaming => self.build_gaming_pc(),
        }
    }
}
