//! Demo: Roster Ingestion and Reports
//!
//! Run with:
//!   cargo run --example roster_demo

use clinic_core::Clinic;
use std::io::Cursor;

const ROSTER: &str = "\
M;7;Meredith;Grey;MMM;Surgery
M;8;Derek;Shepherd;NNN;Neuro
M;9;Miranda;Bailey;OOO;Surgery
P;Al;Pacino;AAA
P;Robert;DeNiro;BBB
P;Diane;Keaton;CCC
X;this;line;is;malformed
P;Andy;Garcia;DDD
";

fn main() {
    println!("{}", "=".repeat(60));
    println!("CLINIC ROSTER DEMO");
    println!("{}", "=".repeat(60));
    println!();

    let mut clinic = Clinic::new();

    println!("1. INGESTION");
    println!("{}", "-".repeat(40));
    let loaded = clinic
        .load_data_with(Cursor::new(ROSTER), |line_number, line| {
            println!("  offending line {}: {}", line_number, line);
        })
        .expect("reading from an in-memory roster");
    println!("  loaded {} records ({} people, {} doctors)", loaded, clinic.num_patients(), clinic.num_doctors());
    println!();

    println!("2. ASSIGNMENTS");
    println!("{}", "-".repeat(40));
    for (id, badge) in [("AAA", 7), ("BBB", 7), ("CCC", 9), ("DDD", 7)] {
        clinic
            .assign_patient_to_doctor(id, badge)
            .expect("roster ids and badges are registered");
        println!("  {} -> badge {}", id, badge);
    }
    println!();

    println!("3. REPORTS");
    println!("{}", "-".repeat(40));
    println!("  Idle doctors:");
    for doctor in clinic.idle_doctors() {
        println!("    {}", doctor);
    }
    println!("  Busy doctors (above mean load): {:?}", clinic.busy_doctors());
    println!("  Ranking by patient count:");
    for entry in clinic.doctors_by_num_patients() {
        println!("    {}", entry);
    }
    println!("  Patients per specialization:");
    for entry in clinic.patients_per_specialization() {
        println!("    {}", entry);
    }
}
