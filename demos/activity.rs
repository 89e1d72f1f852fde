use gonhue::{ActivityColours, ActivityState, Config};

fn main() -> Result<(), gonhue::ConfigError> {
    let colours = ActivityColours::new(&Config::default())?;

    for state in ActivityState::ALL {
        let ramp: Vec<String> = (0..=4)
            .map(|i| colours.get(state, f64::from(i) / 4.0).to_string())
            .collect();
        println!("{state:>14}: {}", ramp.join(" "));
    }

    Ok(())
}
