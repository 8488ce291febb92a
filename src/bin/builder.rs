// Pattern 2: Builder demo - two computer configurations assembled with a
// consuming fluent builder.

use creational_patterns::builder::{Computer, ComputerBuilder};
use creational_patterns::{logging, narrate, Catalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let catalog = Catalog::embedded()?;

    narrate::title("Builder Pattern");

    narrate::section("Gaming PC (every field set)");
    let gaming = Computer::builder()
        .cpu("AMD Ryzen 9 7950X")
        .ram("64GB DDR5")
        .storage("4TB NVMe SSD")
        .gpu("NVIDIA RTX 4090")
        .bluetooth(true)
        .wifi(true)
        .build();
    gaming.display();

    narrate::section("Office PC (no GPU, no WiFi)");
    let office = Computer::builder()
        .cpu("Intel Core i3-12100")
        .ram("8GB DDR4")
        .storage("256GB SSD")
        .bluetooth(true)
        .build();
    office.display();

    narrate::section("Bare builder (all defaults)");
    ComputerBuilder::new().build().display();

    narrate::section("Presets from the catalog");
    for preset in &catalog.computers {
        println!("\n[{}]", preset.name);
        ComputerBuilder::from_preset(preset).build().display();
    }

    Ok(())
}
