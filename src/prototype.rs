// Pattern 3: Prototype
// Shapes are cloned through the trait object (`clone_box`) so a registry can
// hand out independent copies without knowing the concrete type.

use std::any::Any;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::catalog::{Catalog, ShapeSpec};
use crate::error::PrototypeError;

pub trait Shape: Any {
    /// Deep copy into a new owned box.
    fn clone_box(&self) -> Box<dyn Shape>;
    fn draw(&self) -> String;
    fn set_color(&mut self, color: &str);
    fn color(&self) -> &str;
    fn kind(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    color: String,
    radius: f64,
}

impl Circle {
    pub fn new(color: impl Into<String>, radius: f64) -> Self {
        Self {
            color: color.into(),
            radius,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!("Drawing a {} circle with radius {}", self.color, self.radius)
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn kind(&self) -> &'static str {
        "Circle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    color: String,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(color: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            color: color.into(),
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl Shape for Rectangle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!(
            "Drawing a {} rectangle {}x{}",
            self.color, self.width, self.height
        )
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn kind(&self) -> &'static str {
        "Rectangle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ShapeSpec {
    pub fn to_shape(&self) -> Box<dyn Shape> {
        match self {
            ShapeSpec::Circle { color, radius } => Box::new(Circle::new(color.as_str(), *radius)),
            ShapeSpec::Rectangle {
                color,
                width,
                height,
            } => Box::new(Rectangle::new(color.as_str(), *width, *height)),
        }
    }
}

// ============================================================================
// Prototype registry
// ============================================================================

#[derive(Default)]
pub struct ShapeManager {
    prototypes: HashMap<String, Box<dyn Shape>>,
}

impl ShapeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut manager = Self::new();
        manager.add_prototype("red_circle", Box::new(Circle::new("red", 10.0)));
        manager.add_prototype("blue_rectangle", Box::new(Rectangle::new("blue", 20.0, 15.0)));
        manager
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut manager = Self::new();
        for entry in &catalog.prototypes {
            manager.add_prototype(entry.key.as_str(), entry.shape.to_shape());
        }
        manager
    }

    /// Registers `shape` under `key`, returning the prototype it replaced.
    pub fn add_prototype(
        &mut self,
        key: impl Into<String>,
        shape: Box<dyn Shape>,
    ) -> Option<Box<dyn Shape>> {
        let key = key.into();
        debug!(%key, kind = shape.kind(), "registered prototype");
        self.prototypes.insert(key, shape)
    }

    pub fn create_shape(&self, key: &str) -> Result<Box<dyn Shape>, PrototypeError> {
        match self.prototypes.get(key) {
            Some(prototype) => Ok(prototype.clone_box()),
            None => {
                warn!(key, "no prototype registered");
                Err(PrototypeError::Unregistered(key.to_string()))
            }
        }
    }

    pub fn prototype(&self, key: &str) -> Option<&dyn Shape> {
        self.prototypes.get(key).map(|shape| shape.as_ref())
    }

    pub fn list_prototypes(&self) -> Vec<(String, &'static str)> {
        let mut listing: Vec<_> = self
            .prototypes
            .iter()
            .map(|(key, shape)| (key.clone(), shape.kind()))
            .collect();
        listing.sort();
        listing
    }

    pub fn display_prototypes(&self) {
        println!("Available prototypes:");
        for (key, kind) in self.list_prototypes() {
            println!(" - {key} ({kind})");
        }
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
