//! Registered properties and their defaults.

use crate::error::{Error, Result};
use crate::types::{Color, PropertyValue};

/// A well-known style property.
#[derive(Debug, Clone, Copy)]
pub struct PropertySpec {
    /// Property name, as used in a [`StyleSet`](crate::style::StyleSet).
    pub name: &'static str,
    default: fn() -> PropertyValue,
}

impl PropertySpec {
    const fn new(name: &'static str, default: fn() -> PropertyValue) -> Self {
        Self { name, default }
    }

    /// Value used when no provider sets this property.
    pub fn default_value(&self) -> PropertyValue {
        (self.default)()
    }

    /// Find a registered property by name.
    pub fn lookup(name: &str) -> Option<&'static PropertySpec> {
        PROPERTIES.iter().find(|spec| spec.name == name)
    }

    /// Like [`lookup`](Self::lookup), but an unknown name is an error.
    pub fn lookup_strict(name: &str) -> Result<&'static PropertySpec> {
        Self::lookup(name).ok_or_else(|| Error::unknown_property(name))
    }
}

/// All registered properties.
pub static PROPERTIES: &[PropertySpec] = &[
    PropertySpec::new("background-color", || PropertyValue::Color(Color::WHITE)),
    PropertySpec::new("foreground-color", || PropertyValue::Color(Color::BLACK)),
    PropertySpec::new("text-color", || PropertyValue::Color(Color::BLACK)),
    PropertySpec::new("base-color", || PropertyValue::Color(Color::WHITE)),
    PropertySpec::new("border-width", || PropertyValue::Int(0)),
    PropertySpec::new("padding", || PropertyValue::Int(0)),
    PropertySpec::new("font-size", || PropertyValue::Float(10.0)),
    PropertySpec::new("opacity", || PropertyValue::Float(1.0)),
];
