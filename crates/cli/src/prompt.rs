use std::io::{self, Write};
use std::process;

use velostat::prelude::*;

/// Prompts until the user names a registered city.
pub fn city() -> City {
    loop {
        let input = read_line(
            "Please enter the name of a city between chicago, new york city and washington: ",
        );
        if let Some(city) = City::from_name(&input) {
            return city;
        }
        println!("That was not a valid input, please try again.");
    }
}

/// Prompts for a month between January and June. "all" means no filter.
pub fn month() -> Option<Month> {
    loop {
        let input = read_line("Enter a month between January and June, or \"all\": ");
        if input == "all" {
            return None;
        }
        if let Some(month) = Month::from_name(&input) {
            return Some(month);
        }
        println!("That was not a valid input, please try again.");
    }
}

/// Prompts for a day of the week. "all" means no filter.
pub fn weekday() -> Option<Weekday> {
    loop {
        let input = read_line("Enter a day from Monday to Sunday, or \"all\": ");
        if input == "all" {
            return None;
        }
        if let Ok(weekday) = input.parse::<Weekday>() {
            return Some(weekday);
        }
        println!("That was not a valid input, please try again.");
    }
}

pub fn yes_no(message: &str) -> bool {
    loop {
        match read_line(message).as_str() {
            "yes" => return true,
            "no" => return false,
            _ => println!("That was not a valid input, please try again."),
        }
    }
}

fn read_line(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut buffer = String::new();
    match io::stdin().read_line(&mut buffer) {
        // EOF, there is no one left to ask
        Ok(0) => process::exit(0),
        Ok(_) => buffer.trim().to_lowercase(),
        Err(_) => process::exit(1),
    }
}
