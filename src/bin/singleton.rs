// Pattern 4: Singleton demo - one building and one elevator per process.

use creational_patterns::singleton::{Building, Elevator};
use creational_patterns::{logging, narrate, Catalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let catalog = Catalog::embedded()?;
    let premises = catalog.premises;

    let building = Building::get_instance(premises.floors, premises.rooms_per_floor);
    let elevator = building.elevator();

    narrate::title("Building and Elevator Management");
    building.display_info();
    println!();
    elevator.display_status();
    println!();

    // Failures are logged by the elevator itself and leave it in place.
    let _ = elevator.call_to_floor(3);
    let _ = elevator.call_to_floor(1);
    let _ = elevator.move_to_floor(premises.floors);
    let _ = elevator.move_to_floor(premises.floors + 1);
    elevator.display_status();

    narrate::section("Building uniqueness");
    let another = Building::get_instance(10, 5);
    println!("Floors in the 'new' building: {}", another.floors_count());
    println!("(still {} floors from the first construction)", premises.floors);
    if std::ptr::eq(building, another) {
        narrate::success("Same building instance");
    }

    narrate::section("Elevator uniqueness");
    let another = Elevator::get_instance(20);
    println!("Max floor of the 'new' elevator: {}", another.max_floors());
    println!("(still {} floors from the building's setup)", premises.floors);
    if std::ptr::eq(elevator, another) {
        narrate::success("Same elevator instance");
    }

    Ok(())
}
