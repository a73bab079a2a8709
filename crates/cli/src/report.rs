use std::sync::Arc;

use velostat::prelude::*;
use velostat::shared::time::weekday_name;

fn rule() {
    println!("{}", "-".repeat(40));
}

pub fn travel_times(selection: &[&Trip]) {
    println!("\nCalculating the most frequent times of travel...\n");
    match TravelTimes::from_trips(selection) {
        Ok(summary) => {
            println!("Most popular month of the year: {}", summary.popular_month);
            println!(
                "Most popular day of the week: {}",
                weekday_name(summary.popular_weekday)
            );
            println!("Most popular hour of the day: {}", summary.popular_hour);
        }
        Err(err) => println!("{err}"),
    }
    rule();
}

pub fn station_popularity(selection: &[&Trip]) {
    println!("\nCalculating the most popular stations and trip...\n");
    match StationPopularity::from_trips(selection) {
        Ok(summary) => {
            println!(
                "The most popular start station is: {} ({} trips)",
                summary.popular_start.name, summary.popular_start.trips
            );
            println!(
                "The most popular end station is: {} ({} trips)",
                summary.popular_end.name, summary.popular_end.trips
            );
            let route = &summary.popular_route;
            println!(
                "The most popular combination of stations is: {} -> {} ({} trips)",
                route.start, route.end, route.trips
            );
        }
        Err(err) => println!("{err}"),
    }
    rule();
}

pub fn trip_durations(selection: &[&Trip]) {
    println!("\nCalculating trip duration...\n");
    match TripDurations::from_trips(selection) {
        Ok(summary) => {
            println!(
                "The total travel time was: {} seconds",
                summary.total_seconds
            );
            println!(
                "The average travel time was: {:.2} seconds",
                summary.average_seconds
            );
        }
        Err(err) => println!("{err}"),
    }
    rule();
}

pub fn demographics(selection: &[&Trip], schema: &Schema) {
    println!("\nCalculating user stats...\n");
    match Demographics::from_trips(selection, schema) {
        Ok(summary) => {
            print_counts("user type", &summary.user_types);
            match &summary.genders {
                Ok(counts) => print_counts("gender", counts),
                Err(_) => println!("No gender information for this city"),
            }
            match &summary.birth_years {
                Ok(stats) => {
                    println!("The earliest birth year is: {}", stats.earliest);
                    println!("The most recent birth year is: {}", stats.latest);
                    println!("The most common birth year is: {}", stats.most_common);
                }
                Err(_) => println!("No birth year information for this city"),
            }
        }
        Err(err) => println!("{err}"),
    }
    rule();
}

fn print_counts(label: &str, counts: &[(Arc<str>, u64)]) {
    if counts.is_empty() {
        println!("No {label} values in this selection");
        return;
    }
    println!("Trips by {label}:");
    for (value, count) in counts {
        println!("  {value}: {count}");
    }
}
