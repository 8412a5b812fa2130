//! Clinic Core - In-Memory Patient/Doctor Registry
//!
//! Pure Rust implementation of a clinic registry: patient and doctor
//! identity records, the assignment relationship between them, and a
//! set of aggregate reports over the assignment load.
//!
//! # Features
//!
//! - Idempotent registration keyed by person identifier and badge number
//! - Single-valued patient-to-doctor assignment with consistent
//!   reverse indexing
//! - Bulk roster ingestion from semicolon-delimited text lines
//! - Aggregate reports: idle doctors, busy doctors, ranking by patient
//!   load, patient totals per specialization
//!
//! # Example
//!
//! ```rust
//! use clinic_core::Clinic;
//!
//! let mut clinic = Clinic::new();
//! clinic.add_patient("Al", "Pacino", "AAA");
//! clinic.add_doctor("Meredith", "Grey", "MMM", 7, "Surgery");
//!
//! clinic.assign_patient_to_doctor("AAA", 7).unwrap();
//!
//! assert_eq!(clinic.assigned_doctor("AAA").unwrap(), 7);
//! assert_eq!(clinic.assigned_patients(7).unwrap(), vec!["AAA".to_string()]);
//! ```

pub mod ingest;
pub mod registry;
pub mod reports;

// Re-export the registry type for convenience
pub use registry::Clinic;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Badge number identifying a doctor, distinct from the shared person
/// identifier namespace.
pub type BadgeId = i32;

/// Immutable identity shared by patients and doctors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    id: String,
}

impl Person {
    /// Create a person from name parts and a unique identifier.
    pub fn new(first_name: &str, last_name: &str, id: &str) -> Self {
        Person {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            id: id.to_string(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render as `"<last_name> <first_name> (<id>)"`.
    pub fn description(&self) -> String {
        format!("{} {} ({})", self.last_name, self.first_name, self.id)
    }
}

/// Recoverable lookup failures callers can branch on.
///
/// `NoSuchDoctor` is also returned by [`Clinic::assigned_doctor`] for a
/// patient with no current assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClinicError {
    /// No patient is registered under the given identifier
    #[error("patient not found")]
    NoSuchPatient,
    /// No doctor is registered under the given badge number
    #[error("doctor not found")]
    NoSuchDoctor,
}
