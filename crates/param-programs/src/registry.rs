//! Registro cerrado de programas.
//!
//! La tabla es estática; `ProgramRegistry::initialize` la indexa una vez y el
//! resultado se comparte en sólo-lectura entre peticiones.

use std::collections::BTreeMap;

use crate::{Program, ProgramError, RainfallIndex, SnowfallThreshold};

/// Variantes de programa conocidas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramKind {
    RainfallIndex(RainfallIndex),
    SnowfallThreshold(SnowfallThreshold),
}

impl ProgramKind {
    pub fn as_program(&self) -> &dyn Program {
        match self {
            Self::RainfallIndex(p) => p,
            Self::SnowfallThreshold(p) => p,
        }
    }
}

const PROGRAM_TABLE: &[ProgramKind] = &[ProgramKind::RainfallIndex(RainfallIndex),
                                        ProgramKind::SnowfallThreshold(SnowfallThreshold)];

#[derive(Debug, Clone)]
pub struct ProgramRegistry {
    programs: BTreeMap<&'static str, ProgramKind>,
}

impl ProgramRegistry {
    pub fn initialize() -> Self {
        let programs = PROGRAM_TABLE.iter().map(|k| (k.as_program().id(), *k)).collect();
        Self { programs }
    }

    pub fn kind(&self, name: &str) -> Result<ProgramKind, ProgramError> {
        self.programs
            .get(name)
            .copied()
            .ok_or_else(|| ProgramError::UnknownProgram(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Result<&dyn Program, ProgramError> {
        self.programs
            .get(name)
            .map(ProgramKind::as_program)
            .ok_or_else(|| ProgramError::UnknownProgram(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.programs.keys().copied()
    }
}

impl Default for ProgramRegistry {
    fn default() -> Self {
        Self::initialize()
    }
}
