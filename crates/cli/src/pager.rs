use velostat::prelude::*;

use crate::prompt;

const PAGE_SIZE: usize = 5;

/// Shows the filtered records five at a time for as long as the user
/// keeps answering yes.
pub fn page(selection: &[&Trip]) {
    let mut shown = 0;
    while shown < selection.len() {
        if !prompt::yes_no("Would you like to see 5 lines of raw data? Enter yes or no: ") {
            return;
        }
        for trip in selection.iter().skip(shown).take(PAGE_SIZE) {
            println!("{}", line(trip));
        }
        shown += PAGE_SIZE;
    }
}

fn line(trip: &Trip) -> String {
    let mut parts = vec![
        format!("#{}", trip.index),
        format!("{} -> {}", trip.start_time, trip.end_time),
        format!("{} -> {}", trip.start_station, trip.end_station),
    ];
    if let Some(user_type) = &trip.user_type {
        parts.push(user_type.to_string());
    }
    if let Some(gender) = &trip.gender {
        parts.push(gender.to_string());
    }
    if let Some(birth_year) = trip.birth_year {
        parts.push(birth_year.to_string());
    }
    parts.join(" | ")
}
