use gonhue::{reference::REFERENCE_COLOURS, Colour, HueRequest};

fn main() {
    // Halfway between red and red-blue.
    let middle = Colour::from_hue(25.0, 0.55, 0.50);
    println!("25 gon = {middle}");

    for anchor in REFERENCE_COLOURS {
        let brighter = HueRequest::new(anchor.hue, 0.75, 0.50).colour();
        let greyer = HueRequest::new(anchor.hue, 0.55, 0.10).colour();
        println!(
            "{:>5} gon: reference {:?}, brighter {brighter}, greyer {greyer}",
            anchor.hue, anchor.display
        );
    }
}
