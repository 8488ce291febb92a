// Pattern 3: Prototype demo - cloning shapes directly and through a registry.

use creational_patterns::prototype::{Circle, Shape, ShapeManager};
use creational_patterns::{logging, narrate, Catalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let catalog = Catalog::embedded()?;

    narrate::title("Prototype Pattern");

    narrate::section("1. Cloning an object directly");
    let original = Circle::new("red", 5.0);
    println!("Original: {}", original.draw());

    let mut cloned = original.clone_box();
    println!("Clone: {}", cloned.draw());

    cloned.set_color("blue");
    if let Some(circle) = cloned.as_any_mut().downcast_mut::<Circle>() {
        circle.set_radius(8.0);
    }
    println!("Modified clone: {}", cloned.draw());
    println!("Original (unchanged): {}", original.draw());

    narrate::section("2. Using the prototype manager");
    let mut manager = ShapeManager::from_catalog(&catalog);
    manager.display_prototypes();

    println!("\nCreating shapes from prototypes:");
    let mut created = Vec::new();
    for key in ["red_circle", "blue_rectangle", "green_triangle"] {
        match manager.create_shape(key) {
            Ok(shape) => {
                println!("Created: {}", shape.draw());
                created.push(shape);
            }
            Err(e) => narrate::failure(&e.to_string()),
        }
    }

    println!("\nModifying created shapes:");
    if let Some(shape) = created.first_mut() {
        shape.set_color("orange");
        println!("After modification: {}", shape.draw());
    }
    if let Some(prototype) = manager.prototype("red_circle") {
        println!("Prototype (unchanged): {}", prototype.draw());
    }

    narrate::section("3. Adding a new prototype");
    manager.add_prototype("big_yellow_circle", Box::new(Circle::new("yellow", 25.0)));
    match manager.create_shape("big_yellow_circle") {
        Ok(shape) => println!("Created from new prototype: {}", shape.draw()),
        Err(e) => narrate::failure(&e.to_string()),
    }

    Ok(())
}
