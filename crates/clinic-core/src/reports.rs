//! Aggregate reports over the registry
//!
//! Derived queries over the doctor records: idle and busy doctors,
//! ranking by patient load, and per-specialization patient totals.
//! Sorting happens at query time so mutation stays cheap; each report
//! is O(n log n) in the number of doctors.

use std::collections::BTreeMap;

use crate::registry::DoctorRecord;
use crate::{BadgeId, Clinic};

impl Clinic {
    /// Doctors with no assigned patients, sorted by last name then
    /// first name, rendered in the doctor description format.
    pub fn idle_doctors(&self) -> Vec<String> {
        let mut idle: Vec<&DoctorRecord> = self
            .doctor_records()
            .filter(|d| d.assigned_patients.is_empty())
            .collect();
        idle.sort_by(|a, b| {
            (a.person.last_name(), a.person.first_name())
                .cmp(&(b.person.last_name(), b.person.first_name()))
        });
        idle.iter().map(|d| d.description()).collect()
    }

    /// Badge numbers of doctors whose assigned-patient count strictly
    /// exceeds the mean count across all doctors. Empty when no
    /// doctors are registered (the mean is taken as 0).
    pub fn busy_doctors(&self) -> Vec<BadgeId> {
        let count = self.num_doctors();
        if count == 0 {
            return Vec::new();
        }
        let total: usize = self
            .doctor_records()
            .map(|d| d.assigned_patients.len())
            .sum();
        let mean = total as f64 / count as f64;

        self.doctor_records()
            .filter(|d| d.assigned_patients.len() as f64 > mean)
            .map(|d| d.badge_id)
            .collect()
    }

    /// All doctors sorted by assigned-patient count descending, ties
    /// broken by last name then first name ascending. Each entry is
    /// rendered as `"<count width 3> : <badge> <last> <first>"`.
    pub fn doctors_by_num_patients(&self) -> Vec<String> {
        let mut doctors: Vec<&DoctorRecord> = self.doctor_records().collect();
        doctors.sort_by(|a, b| {
            b.assigned_patients
                .len()
                .cmp(&a.assigned_patients.len())
                .then_with(|| a.person.last_name().cmp(b.person.last_name()))
                .then_with(|| a.person.first_name().cmp(b.person.first_name()))
        });
        doctors
            .iter()
            .map(|d| {
                format!(
                    "{:>3} : {} {} {}",
                    d.assigned_patients.len(),
                    d.badge_id,
                    d.person.last_name(),
                    d.person.first_name()
                )
            })
            .collect()
    }

    /// Assigned-patient totals grouped by specialization, counting
    /// only doctors with at least one patient. Groups are sorted by
    /// total descending, ties by specialization name ascending, and
    /// rendered as `"<total width 3> - <specialization>"`.
    pub fn patients_per_specialization(&self) -> Vec<String> {
        let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
        for doctor in self
            .doctor_records()
            .filter(|d| !d.assigned_patients.is_empty())
        {
            *totals.entry(doctor.specialization.as_str()).or_insert(0) +=
                doctor.assigned_patients.len();
        }

        let mut groups: Vec<(&str, usize)> = totals.into_iter().collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        groups
            .iter()
            .map(|(specialization, total)| format!("{:>3} - {}", total, specialization))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_clinic() -> Clinic {
        let mut clinic = Clinic::new();
        clinic.add_doctor("Meredith", "Grey", "MMM", 7, "Surgery");
        clinic.add_doctor("Derek", "Shepherd", "NNN", 8, "Neuro");
        clinic.add_doctor("Miranda", "Bailey", "OOO", 9, "Surgery");
        for id in ["P1", "P2", "P3", "P4"] {
            clinic.add_patient("Pat", "Ient", id);
        }
        clinic
    }

    #[test]
    fn test_idle_doctors_sorted_by_name() {
        let clinic = sample_clinic();

        assert_eq!(
            clinic.idle_doctors(),
            vec![
                "Bailey Miranda (OOO) [9]: Surgery".to_string(),
                "Grey Meredith (MMM) [7]: Surgery".to_string(),
                "Shepherd Derek (NNN) [8]: Neuro".to_string(),
            ]
        );
    }

    #[test]
    fn test_idle_doctors_excludes_assigned() {
        let mut clinic = sample_clinic();
        clinic.assign_patient_to_doctor("P1", 7).unwrap();

        assert_eq!(
            clinic.idle_doctors(),
            vec![
                "Bailey Miranda (OOO) [9]: Surgery".to_string(),
                "Shepherd Derek (NNN) [8]: Neuro".to_string(),
            ]
        );
    }

    #[test]
    fn test_busy_doctors_strictly_above_mean() {
        let mut clinic = sample_clinic();
        // Counts 7:2, 8:1, 9:0 -> mean 1.0, only badge 7 is above
        clinic.assign_patient_to_doctor("P1", 7).unwrap();
        clinic.assign_patient_to_doctor("P2", 7).unwrap();
        clinic.assign_patient_to_doctor("P3", 8).unwrap();

        assert_eq!(clinic.busy_doctors(), vec![7]);
    }

    #[test]
    fn test_busy_doctors_empty_registry() {
        let clinic = Clinic::new();
        assert!(clinic.busy_doctors().is_empty());
    }

    #[test]
    fn test_busy_doctors_equal_counts() {
        let mut clinic = sample_clinic();
        // Everyone at the mean, nobody strictly above it
        clinic.assign_patient_to_doctor("P1", 7).unwrap();
        clinic.assign_patient_to_doctor("P2", 8).unwrap();
        clinic.assign_patient_to_doctor("P3", 9).unwrap();

        assert!(clinic.busy_doctors().is_empty());
    }

    #[test]
    fn test_ranking_count_then_name() {
        let mut clinic = Clinic::new();
        clinic.add_doctor("Zoe", "Zed", "ZZZ", 7, "Surgery");
        clinic.add_doctor("Ann", "Aaron", "YYY", 8, "Neuro");
        clinic.add_doctor("Ida", "Idle", "XXX", 9, "Cardio");
        for (id, badge) in [("P1", 7), ("P2", 7), ("P3", 8), ("P4", 8)] {
            clinic.add_patient("Pat", "Ient", id);
            clinic.assign_patient_to_doctor(id, badge).unwrap();
        }

        // Equal counts: badge 8 (Aaron) outranks badge 7 (Zed)
        assert_eq!(
            clinic.doctors_by_num_patients(),
            vec![
                "  2 : 8 Aaron Ann".to_string(),
                "  2 : 7 Zed Zoe".to_string(),
                "  0 : 9 Idle Ida".to_string(),
            ]
        );
    }

    #[test]
    fn test_specialization_totals() {
        let mut clinic = sample_clinic();
        // Surgery 2 (badges 7 and 9), Neuro 1
        clinic.assign_patient_to_doctor("P1", 7).unwrap();
        clinic.assign_patient_to_doctor("P2", 9).unwrap();
        clinic.assign_patient_to_doctor("P3", 8).unwrap();

        assert_eq!(
            clinic.patients_per_specialization(),
            vec!["  2 - Surgery".to_string(), "  1 - Neuro".to_string()]
        );
    }

    #[test]
    fn test_specialization_totals_tiebreak_by_name() {
        let mut clinic = sample_clinic();
        clinic.assign_patient_to_doctor("P1", 7).unwrap();
        clinic.assign_patient_to_doctor("P2", 8).unwrap();

        assert_eq!(
            clinic.patients_per_specialization(),
            vec!["  1 - Neuro".to_string(), "  1 - Surgery".to_string()]
        );
    }

    #[test]
    fn test_specialization_totals_skip_idle_only() {
        let clinic = sample_clinic();
        assert!(clinic.patients_per_specialization().is_empty());
    }
}
