// Pattern 1: Abstract Factory demo - a cinema rental system whose movies always
// get a matched audio/subtitle pair.

use creational_patterns::abstract_factory::{
    CinemaRentalSystem, EnglishFilmFactory, RussianFilmFactory,
};
use creational_patterns::{logging, narrate, Catalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let catalog = Catalog::embedded()?;
    let rental = CinemaRentalSystem::from_catalog(&catalog);

    narrate::title("Cinema Rental System");
    rental.display_available_movies();
    rental.display_available_languages();

    narrate::section("Example 1: rent 'The Matrix' in Russian");
    match rental.rent_movie("1", "russian") {
        Ok(movie) => movie.play(),
        Err(e) => narrate::failure(&e.to_string()),
    }

    narrate::section("Example 2: rent 'The Lord of the Rings' in English");
    match rental.rent_movie("2", "english") {
        Ok(movie) => movie.play(),
        Err(e) => narrate::failure(&e.to_string()),
    }

    narrate::section("Example 3: change language while watching");
    if let Ok(mut movie) = rental.rent_movie("3", "english") {
        movie.play();

        narrate::step("Switching to Russian...");
        movie.change_language(&RussianFilmFactory);
        movie.play();

        narrate::step("Switching back to English...");
        movie.change_language(&EnglishFilmFactory);
        movie.play();
    }

    narrate::section("Example 4: rent with an unsupported language");
    if let Err(e) = rental.rent_movie("1", "spanish") {
        narrate::failure(&format!("Could not rent the movie: {e}"));
    }

    narrate::section("Audio and subtitle language consistency");
    if let Ok(movie) = rental.rent_movie("4", "russian") {
        movie.play();
        println!("Current language: {}", movie.current_language());
        if movie.audio_language() == movie.subtitles_language() {
            narrate::success("Audio and subtitle languages always agree");
        }
    }

    Ok(())
}
