//! Bulk roster ingestion
//!
//! Reads line-oriented rosters where each line registers either a
//! patient (`P;first;last;id`) or a doctor
//! (`M;badge;first;last;id;specialization`). Malformed lines are
//! skipped and reported; a partially valid roster still loads.

use std::io::{self, BufRead, BufReader, Read};

use log::{debug, warn};

use crate::{BadgeId, Clinic};

/// A roster line that matched one of the recognized shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
enum RosterLine {
    Patient {
        first_name: String,
        last_name: String,
        id: String,
    },
    Doctor {
        badge_id: BadgeId,
        first_name: String,
        last_name: String,
        id: String,
        specialization: String,
    },
}

/// Parse a single roster line. Fields are split on `;` with arbitrary
/// whitespace around the delimiters; any other shape, or a badge that
/// does not parse as an integer, yields `None`.
fn parse_line(line: &str) -> Option<RosterLine> {
    let fields: Vec<&str> = line.trim().split(';').map(str::trim).collect();
    match fields.as_slice() {
        ["P", first_name, last_name, id] => Some(RosterLine::Patient {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            id: id.to_string(),
        }),
        ["M", badge, first_name, last_name, id, specialization] => Some(RosterLine::Doctor {
            badge_id: badge.parse().ok()?,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            id: id.to_string(),
            specialization: specialization.to_string(),
        }),
        _ => None,
    }
}

impl Clinic {
    /// Load roster lines from `reader`, silently skipping malformed
    /// lines. Returns the number of lines successfully applied.
    pub fn load_data<R: Read>(&mut self, reader: R) -> io::Result<usize> {
        self.load_data_with(reader, |_, _| {})
    }

    /// Like [`Clinic::load_data`], additionally reporting each
    /// offending line to `on_offending` with its 1-based line number
    /// and raw content. Processing continues past offending lines.
    pub fn load_data_with<R, F>(&mut self, reader: R, mut on_offending: F) -> io::Result<usize>
    where
        R: Read,
        F: FnMut(usize, &str),
    {
        let mut loaded = 0usize;
        let mut line_number = 0usize;

        for line in BufReader::new(reader).lines() {
            let line = line?;
            line_number += 1;

            match parse_line(&line) {
                Some(RosterLine::Patient {
                    first_name,
                    last_name,
                    id,
                }) => {
                    self.add_patient(&first_name, &last_name, &id);
                    loaded += 1;
                }
                Some(RosterLine::Doctor {
                    badge_id,
                    first_name,
                    last_name,
                    id,
                    specialization,
                }) => {
                    self.add_doctor(&first_name, &last_name, &id, badge_id, &specialization);
                    loaded += 1;
                }
                None => {
                    warn!("offending roster line {}: {}", line_number, line);
                    on_offending(line_number, &line);
                }
            }
        }

        debug!("roster load: {} of {} lines applied", loaded, line_number);
        Ok(loaded)
    }
}
