//! The immutable computer specification and its fluent builder

use crate::error::{CreationError, Result};
use std::fmt;
use tracing::debug;

/// GPU recorded when none is configured
pub const DEFAULT_GPU: &str = "Integrated";

/// Finished computer specification.
///
/// Only [`ComputerBuilder::build`] creates one; fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    cpu: String,
    ram_gb: u32,
    storage_gb: u32,
    gpu: String,
    has_wifi: bool,
    has_rgb: bool,
}

impl Computer {
    pub fn cpu(&self) -> &str {
        &self.cpu
    }

    pub fn ram_gb(&self) -> u32 {
        self.ram_gb
    }

    pub fn storage_gb(&self) -> u32 {
        self.storage_gb
    }

    pub fn gpu(&self) -> &str {
        &self.gpu
    }

    pub fn has_wifi(&self) -> bool {
        self.has_wifi
    }

    pub fn has_rgb(&self) -> bool {
        self.has_rgb
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU: {}, RAM: {}GB, Storage: {}GB, GPU: {}, WiFi: {}, RGB: {}",
            self.cpu,
            self.ram_gb,
            self.storage_gb,
            self.gpu,
            flag(self.has_wifi),
            flag(self.has_rgb)
        )
    }
}

fn flag(on: bool) -> &'static str {
    if on {
        "True"
    } else {
        "False"
    }
}

/// Mutable, not-yet-validated computer configuration.
///
/// Setters change one field and return the builder for chaining.
/// [`build`](Self::build) validates and snapshots the current fields
/// without clearing them; call [`reset`](Self::reset) to start over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerBuilder {
    cpu: String,
    ram_gb: u32,
    storage_gb: u32,
    gpu: String,
    has_wifi: bool,
    has_rgb: bool,
}

impl Default for ComputerBuilder {
    fn default() -> Self {
        Self {
            cpu: String::new(),
            ram_gb: 0,
            storage_gb: 0,
            gpu: DEFAULT_GPU.to_string(),
            has_wifi: false,
            has_rgb: false,
        }
    }
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every field to its default
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    pub fn set_cpu(&mut self, cpu: impl Into<String>) -> &mut Self {
        self.cpu = cpu.into();
        self
    }

    pub fn set_ram(&mut self, gb: u32) -> &mut Self {
        self.ram_gb = gb;
        self
    }

    pub fn set_storage(&mut self, gb: u32) -> &mut Self {
        self.storage_gb = gb;
        self
    }

    pub fn set_gpu(&mut self, gpu: impl Into<String>) -> &mut Self {
        self.gpu = gpu.into();
        self
    }

    pub fn enable_wifi(&mut self) -> &mut Self {
        self.has_wifi = true;
        self
    }

    pub fn enable_rgb(&mut self) -> &mut Self {
        self.has_rgb = true;
        self
    }

    /// Validate required fields (CPU, then RAM, then storage) and snapshot
    /// the current configuration
    pub fn build(&self) -> Result<Computer> {
        if self.cpu.trim().is_empty() {
            return Err(CreationError::validation("cpu", "CPU is required."));
        }
        if self.ram_gb == 0 {
            return Err(CreationError::validation("ram_gb", "RAM must be greater than 0."));
        }
        if self.storage_gb == 0 {
            return Err(CreationError::validation(
                "storage_gb",
                "Storage must be greater than 0.",
            ));
        }

        let computer = Computer {
            cpu: self.cpu.clone(),
            ram_gb: self.ram_gb,
            storage_gb: self.storage_gb,
            gpu: self.gpu.clone(),
            has_wifi: self.has_wifi,
            has_rgb: self.has_rgb,
        };
        debug!(spec = %computer, "built computer");
        Ok(computer)
    }
}
