//! Registry bookkeeping
//!
//! The [`Clinic`] owns two keyed indices: a combined person index keyed
//! by identifier (patients and doctors alike, since a doctor is also a
//! patient) and a badge index holding the doctor-side records with
//! their assigned-patient sets. The patient-to-doctor link and the
//! doctor's patient set are updated together, inside one `&mut self`
//! scope, so no caller can observe them out of sync.

use std::collections::{BTreeMap, BTreeSet};

use crate::{BadgeId, ClinicError, Person};

/// Doctor role carried by a person-index record, so lookups by
/// identifier render the full doctor description.
#[derive(Clone, Debug)]
pub(crate) struct DoctorRole {
    pub(crate) badge_id: BadgeId,
    pub(crate) specialization: String,
}

/// Entry in the combined person index.
#[derive(Clone, Debug)]
pub(crate) struct PersonRecord {
    pub(crate) person: Person,
    pub(crate) role: Option<DoctorRole>,
    pub(crate) assigned_doctor: Option<BadgeId>,
}

impl PersonRecord {
    pub(crate) fn description(&self) -> String {
        match &self.role {
            Some(role) => format!(
                "{} [{}]: {}",
                self.person.description(),
                role.badge_id,
                role.specialization
            ),
            None => self.person.description(),
        }
    }
}

/// Entry in the badge index: the doctor side of the assignment link.
#[derive(Clone, Debug)]
pub(crate) struct DoctorRecord {
    pub(crate) person: Person,
    pub(crate) badge_id: BadgeId,
    pub(crate) specialization: String,
    pub(crate) assigned_patients: BTreeSet<String>,
}

impl DoctorRecord {
    pub(crate) fn description(&self) -> String {
        format!(
            "{} [{}]: {}",
            self.person.description(),
            self.badge_id,
            self.specialization
        )
    }
}

/// The clinic registry: all patient and doctor records plus the
/// assignment relationship between them.
#[derive(Clone, Debug, Default)]
pub struct Clinic {
    people: BTreeMap<String, PersonRecord>,
    doctors: BTreeMap<BadgeId, DoctorRecord>,
}

impl Clinic {
    /// Create an empty registry.
    pub fn new() -> Self {
        Clinic::default()
    }

    /// Register a patient. A no-op if `id` is already registered; the
    /// first registration wins and no error is signaled.
    pub fn add_patient(&mut self, first_name: &str, last_name: &str, id: &str) {
        if self.people.contains_key(id) {
            return;
        }
        self.people.insert(
            id.to_string(),
            PersonRecord {
                person: Person::new(first_name, last_name, id),
                role: None,
                assigned_doctor: None,
            },
        );
    }

    /// Register a doctor under both its identifier and its badge
    /// number. Each insertion is independently a no-op if its key is
    /// already taken.
    pub fn add_doctor(
        &mut self,
        first_name: &str,
        last_name: &str,
        id: &str,
        badge_id: BadgeId,
        specialization: &str,
    ) {
        if !self.people.contains_key(id) {
            self.people.insert(
                id.to_string(),
                PersonRecord {
                    person: Person::new(first_name, last_name, id),
                    role: Some(DoctorRole {
                        badge_id,
                        specialization: specialization.to_string(),
                    }),
                    assigned_doctor: None,
                },
            );
        }
        if !self.doctors.contains_key(&badge_id) {
            self.doctors.insert(
                badge_id,
                DoctorRecord {
                    person: Person::new(first_name, last_name, id),
                    badge_id,
                    specialization: specialization.to_string(),
                    assigned_patients: BTreeSet::new(),
                },
            );
        }
    }

    /// Look up the person registered under `id` and render its
    /// description. A doctor's identifier renders the doctor format.
    pub fn patient(&self, id: &str) -> Result<String, ClinicError> {
        let record = self.people.get(id).ok_or(ClinicError::NoSuchPatient)?;
        Ok(record.description())
    }

    /// Look up the doctor registered under `badge_id` and render its
    /// description.
    pub fn doctor(&self, badge_id: BadgeId) -> Result<String, ClinicError> {
        let doctor = self
            .doctors
            .get(&badge_id)
            .ok_or(ClinicError::NoSuchDoctor)?;
        Ok(doctor.description())
    }

    /// Assign a patient to a doctor, replacing any previous
    /// assignment. Both sides of the link are updated before control
    /// returns to the caller.
    pub fn assign_patient_to_doctor(
        &mut self,
        id: &str,
        badge_id: BadgeId,
    ) -> Result<(), ClinicError> {
        let record = self.people.get_mut(id).ok_or(ClinicError::NoSuchPatient)?;
        if !self.doctors.contains_key(&badge_id) {
            return Err(ClinicError::NoSuchDoctor);
        }

        if let Some(previous) = record.assigned_doctor.replace(badge_id) {
            if let Some(old_doctor) = self.doctors.get_mut(&previous) {
                old_doctor.assigned_patients.remove(id);
            }
        }
        if let Some(doctor) = self.doctors.get_mut(&badge_id) {
            doctor.assigned_patients.insert(id.to_string());
        }
        Ok(())
    }

    /// Badge number of the doctor assigned to the patient under `id`.
    ///
    /// Returns [`ClinicError::NoSuchDoctor`] when the patient exists
    /// but has no current assignment.
    pub fn assigned_doctor(&self, id: &str) -> Result<BadgeId, ClinicError> {
        let record = self.people.get(id).ok_or(ClinicError::NoSuchPatient)?;
        record.assigned_doctor.ok_or(ClinicError::NoSuchDoctor)
    }

    /// Identifiers of the patients assigned to the doctor under
    /// `badge_id`, in sorted-identifier order.
    pub fn assigned_patients(&self, badge_id: BadgeId) -> Result<Vec<String>, ClinicError> {
        let doctor = self
            .doctors
            .get(&badge_id)
            .ok_or(ClinicError::NoSuchDoctor)?;
        Ok(doctor.assigned_patients.iter().cloned().collect())
    }

    /// Number of registered people (doctors included).
    pub fn num_patients(&self) -> usize {
        self.people.len()
    }

    /// Number of registered doctors.
    pub fn num_doctors(&self) -> usize {
        self.doctors.len()
    }

    /// Doctor-side records in badge order.
    pub(crate) fn doctor_records(&self) -> impl Iterator<Item = &DoctorRecord> {
        self.doctors.values()
    }
}
