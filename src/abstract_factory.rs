// Pattern 1: Abstract Factory
// A film factory produces an audio track and subtitles for one language, so a
// movie can never end up with mismatched pairs.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::RentalError;

// ============================================================================
// Products
// ============================================================================

pub trait AudioTrack {
    fn play(&self) -> String;
    fn language(&self) -> &str;
}

pub trait Subtitles {
    fn display(&self) -> String;
    fn language(&self) -> &str;
}

pub struct RussianAudio;

impl AudioTrack for RussianAudio {
    fn play(&self) -> String {
        "Воспроизведение русской звуковой дорожки".to_string()
    }

    fn language(&self) -> &str {
        RUSSIAN
    }
}

pub struct RussianSubtitles;

impl Subtitles for RussianSubtitles {
    fn display(&self) -> String {
        "[Русские субтитры: Привет, мир!]".to_string()
    }

    fn language(&self) -> &str {
        RUSSIAN
    }
}

pub struct EnglishAudio;

impl AudioTrack for EnglishAudio {
    fn play(&self) -> String {
        "Playing English audio track".to_string()
    }

    fn language(&self) -> &str {
        ENGLISH
    }
}

pub struct EnglishSubtitles;

impl Subtitles for EnglishSubtitles {
    fn display(&self) -> String {
        "[English subtitles: Hello, world!]".to_string()
    }

    fn language(&self) -> &str {
        ENGLISH
    }
}

// ============================================================================
// Factories
// ============================================================================

pub const RUSSIAN: &str = "Russian";
pub const ENGLISH: &str = "English";

/// Creates a matched family of tracks. Everything a factory produces reports
/// the factory's own [`language`](FilmFactory::language).
pub trait FilmFactory: Send + Sync {
    fn create_audio_track(&self) -> Box<dyn AudioTrack>;
    fn create_subtitles(&self) -> Box<dyn Subtitles>;
    fn language(&self) -> &str;
}

pub struct RussianFilmFactory;

impl FilmFactory for RussianFilmFactory {
    fn create_audio_track(&self) -> Box<dyn AudioTrack> {
        Box::new(RussianAudio)
    }

    fn create_subtitles(&self) -> Box<dyn Subtitles> {
        Box::new(RussianSubtitles)
    }

    fn language(&self) -> &str {
        RUSSIAN
    }
}

pub struct EnglishFilmFactory;

impl FilmFactory for EnglishFilmFactory {
    fn create_audio_track(&self) -> Box<dyn AudioTrack> {
        Box::new(EnglishAudio)
    }

    fn create_subtitles(&self) -> Box<dyn Subtitles> {
        Box::new(EnglishSubtitles)
    }

    fn language(&self) -> &str {
        ENGLISH
    }
}

// ============================================================================
// Movie
// ============================================================================

pub struct Movie {
    title: String,
    language: String,
    audio_track: Box<dyn AudioTrack>,
    subtitles: Box<dyn Subtitles>,
}

impl Movie {
    pub fn new(title: impl Into<String>, factory: &dyn FilmFactory) -> Self {
        Self {
            title: title.into(),
            language: factory.language().to_string(),
            audio_track: factory.create_audio_track(),
            subtitles: factory.create_subtitles(),
        }
    }

    /// Replaces the language together with both tracks.
    pub fn change_language(&mut self, factory: &dyn FilmFactory) {
        self.language = factory.language().to_string();
        self.audio_track = factory.create_audio_track();
        self.subtitles = factory.create_subtitles();
        info!(title = %self.title, language = %self.language, "movie language changed");
    }

    pub fn screening(&self) -> String {
        format!(
            "=== Now playing: {} ===\nLanguage: {}\n{}\n{}\n{}",
            self.title,
            self.language,
            self.audio_track.play(),
            self.subtitles.display(),
            "=".repeat(34)
        )
    }

    pub fn play(&self) {
        println!("\n{}", self.screening());
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current_language(&self) -> &str {
        &self.language
    }

    pub fn audio_language(&self) -> &str {
        self.audio_track.language()
    }

    pub fn subtitles_language(&self) -> &str {
        self.subtitles.language()
    }
}

// ============================================================================
// Rental system
// ============================================================================

pub struct CinemaRentalSystem {
    factories: BTreeMap<String, Arc<dyn FilmFactory>>,
    movies: BTreeMap<String, String>,
}

impl Default for CinemaRentalSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CinemaRentalSystem {
    pub fn new() -> Self {
        let movies = [
            ("1", "The Matrix"),
            ("2", "The Lord of the Rings"),
            ("3", "The Hobbit"),
            ("4", "Harry Potter"),
            ("5", "The Chronicles of Narnia"),
        ]
        .into_iter()
        .map(|(id, title)| (id.to_string(), title.to_string()))
        .collect();

        Self::with_movies(movies)
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        let movies = catalog
            .movies
            .iter()
            .map(|entry| (entry.id.clone(), entry.title.clone()))
            .collect();

        Self::with_movies(movies)
    }

    fn with_movies(movies: BTreeMap<String, String>) -> Self {
        let mut system = Self {
            factories: BTreeMap::new(),
            movies,
        };
        system.register_factory("russian", Arc::new(RussianFilmFactory));
        system.register_factory("english", Arc::new(EnglishFilmFactory));
        system
    }

    pub fn register_factory(&mut self, language: impl Into<String>, factory: Arc<dyn FilmFactory>) {
        let language = language.into();
        debug!(key = %language, produces = factory.language(), "registered film factory");
        self.factories.insert(language, factory);
    }

    pub fn factory(&self, language: &str) -> Option<Arc<dyn FilmFactory>> {
        self.factories.get(language).cloned()
    }

    pub fn is_language_supported(&self, language: &str) -> bool {
        self.factories.contains_key(language)
    }

    pub fn available_movies(&self) -> impl Iterator<Item = (&str, &str)> {
        self.movies.iter().map(|(id, title)| (id.as_str(), title.as_str()))
    }

    pub fn available_languages(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn display_available_movies(&self) {
        println!("\n=== AVAILABLE MOVIES ===");
        for (id, title) in self.available_movies() {
            println!("{id}. {title}");
        }
        println!("========================");
    }

    pub fn display_available_languages(&self) {
        println!("\n=== AVAILABLE LANGUAGES ===");
        for language in self.available_languages() {
            println!("- {language}");
        }
        println!("===========================");
    }

    /// Rents a movie wired to the factory registered under `language`.
    pub fn rent_movie(&self, movie_id: &str, language: &str) -> Result<Movie, RentalError> {
        let Some(title) = self.movies.get(movie_id) else {
            warn!(movie_id, "rental refused: unknown movie");
            return Err(RentalError::UnknownMovie(movie_id.to_string()));
        };

        let Some(factory) = self.factories.get(language) else {
            warn!(language, "rental refused: unsupported language");
            return Err(RentalError::UnsupportedLanguage(language.to_string()));
        };

        info!(movie_id, %title, language, "movie rented");
        Ok(Movie::new(title.as_str(), factory.as_ref()))
    }
}

// ============================================================================
// Tests
// ============================================================================
