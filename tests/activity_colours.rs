use gonhue::{
    compute, reference::REFERENCE_COLOURS, ActivityColours, ActivityState, Colour, Component,
    Config, HueRequest, LinearModel,
};

fn scenario_config() -> Config {
    let mut config = Config::default();
    config.resolution = 1024;
    config.normal.hue = 85.0;
    config.normal.luminosity = LinearModel::new(0.75, -0.20);
    config.normal.saturation = LinearModel::new(0.1, 0.4);
    config
}

#[test]
fn channels_in_range_for_every_state() {
    let colours = ActivityColours::new(&Config::default()).unwrap();
    for state in ActivityState::ALL {
        for i in 0..=200 {
            let c = colours.get(state, i as Component / 200.0);
            // u8 channels cannot leave [0, 255]; opacity is always opaque here.
            assert_eq!(c.alpha, 255);
        }
    }
}

#[test]
fn repeated_lookups_are_identical() {
    let colours = ActivityColours::new(&Config::default()).unwrap();
    for state in ActivityState::ALL {
        let first = colours.get(state, 0.42);
        let filled = colours.state(state).table().filled();
        assert_eq!(colours.get(state, 0.42), first);
        assert_eq!(colours.state(state).table().filled(), filled);
    }
}

#[test]
fn same_slot_same_colour() {
    let colours = ActivityColours::new(&Config::default()).unwrap();
    assert_eq!(
        colours.get(ActivityState::Normal, 0.37),
        colours.get(ActivityState::Normal, 0.3705)
    );
    assert_eq!(colours.state(ActivityState::Normal).table().filled(), 1);
}

#[test]
fn lowest_activity_matches_direct_computation() {
    let colours = ActivityColours::new(&scenario_config()).unwrap();
    assert_eq!(colours.get_for(false, false, 0.0), compute(85.0, 0.75, 0.1, 255));
}

#[test]
fn highest_activity_matches_direct_computation() {
    let colours = ActivityColours::new(&scenario_config()).unwrap();
    let x = 1023.0 / 1024.0;
    let expected = compute(85.0, 0.75 - 0.20 * x, 0.1 + 0.4 * x, 255);
    assert_eq!(colours.get_for(false, false, 1.0), expected);

    let approximate = HueRequest::new(85.0, 0.75 - 0.20 * 0.999, 0.1 + 0.4 * 0.999).colour();
    for (a, b) in expected.to_rgb().iter().zip(approximate.to_rgb().iter()) {
        assert!(a.abs_diff(*b) <= 1);
    }
}

#[test]
fn out_of_range_activity_is_clamped() {
    let colours = ActivityColours::new(&scenario_config()).unwrap();
    for state in ActivityState::ALL {
        assert_eq!(colours.get(state, -5.0), colours.get(state, 0.0));
        assert_eq!(colours.get(state, 5.0), colours.get(state, 1.0));
    }
}

#[test]
fn dispatch_selects_the_right_table() {
    let colours = ActivityColours::new(&Config::default()).unwrap();
    for (selected, hovered, state) in [
        (false, false, ActivityState::Normal),
        (false, true, ActivityState::NormalHover),
        (true, false, ActivityState::Selected),
        (true, true, ActivityState::SelectedHover),
    ] {
        let c = colours.get_for(selected, hovered, 0.6);
        let table = colours.state(state).table();
        let x = table.x_of(table.index_of(0.6));
        assert_eq!(c, colours.state(state).colour_at(x));
        assert_eq!(table.filled(), 1);
    }
}

#[test]
fn hue_wraps_around() {
    for hue in [0.0, 37.5, 85.0, 260.0, 375.25] {
        let c = Colour::from_hue(hue, 0.7, 0.3);
        assert_eq!(c, Colour::from_hue(hue + 400.0, 0.7, 0.3));
        assert_eq!(c, Colour::from_hue(hue - 400.0, 0.7, 0.3));
    }
}

#[test]
fn reference_colours_are_recovered() {
    for anchor in REFERENCE_COLOURS {
        let c = Colour::from_hue(anchor.hue, 0.55, 0.50);
        for (a, b) in c.to_rgb().iter().zip(anchor.display.iter()) {
            assert!(a.abs_diff(*b) <= 1, "{c:?} vs {:?}", anchor.display);
        }
    }
}

#[test]
fn shared_between_threads() {
    let colours = ActivityColours::new(&Config::default()).unwrap();
    let reference = ActivityColours::new(&Config::default()).unwrap();
    let expected: Vec<Colour> = (0..64)
        .map(|i| reference.get(ActivityState::Selected, i as Component / 63.0))
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (i, expected) in expected.iter().enumerate() {
                    let c = colours.get(ActivityState::Selected, i as Component / 63.0);
                    assert_eq!(c, *expected);
                }
            });
        }
    });

    assert_eq!(colours.state(ActivityState::Selected).table().filled(), 64);
}
