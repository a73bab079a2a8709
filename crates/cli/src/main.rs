mod pager;
mod prompt;
mod report;

use std::{env, path::PathBuf, process, time::Instant};

use tracing::{error, info};
use velostat::prelude::*;

fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<_> = env::args().collect();
    if args.len() < 2 {
        error!("Missing data directory or zip archive");
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);
    let dataset = if path.extension().is_some_and(|ext| ext == "zip") {
        Dataset::new(Config::default()).from_zip(path)
    } else {
        Dataset::new(Config::default()).from_dir(path)
    };

    println!("Hello! Let's explore some US bikeshare data!");
    loop {
        let city = prompt::city();
        let repository = match Repository::load(&dataset, city) {
            Ok(repository) => repository,
            Err(err) => {
                error!("Could not load {}: {err}", city.name());
                continue;
            }
        };
        info!("Loaded {} trips for {}", repository.len(), city.name());

        let criteria = FilterCriteria::new(prompt::month(), prompt::weekday());
        let selection = repository.select(&criteria);

        let now = Instant::now();
        report::travel_times(&selection);
        report::station_popularity(&selection);
        report::trip_durations(&selection);
        report::demographics(&selection, repository.schema());
        println!("\nThis took {:?}", now.elapsed());

        pager::page(&selection);

        if !prompt::yes_no("\nWould you like to restart? Enter yes or no: ") {
            break;
        }
    }
}
