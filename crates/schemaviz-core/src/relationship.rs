//! Relationship types derived from model-to-model fields.
//!
//! A [`Relationship`] is never declared in the source text. It is inferred by
//! pairing a field with its inverse field on the related model and exists only
//! while a diagram is being produced.

use std::fmt;

/// Multiplicity of a link between two models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToMany,
}

impl Cardinality {
    /// Returns the Mermaid `erDiagram` connector for this cardinality.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemaviz_core::relationship::Cardinality;
    ///
    /// assert_eq!(Cardinality::OneToMany.connector(), "||--o{");
    /// ```
    pub fn connector(&self) -> &'static str {
        match self {
            Cardinality::OneToOne => "||--||",
            Cardinality::OneToMany => "||--o{",
            Cardinality::ManyToMany => "}|--|{",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::OneToOne => write!(f, "one-to-one"),
            Cardinality::OneToMany => write!(f, "one-to-many"),
            Cardinality::ManyToMany => write!(f, "many-to-many"),
        }
    }
}

/// An inferred link between two models.
///
/// For [`Cardinality::OneToMany`] the `left` model is the "one" side. The
/// `label` is the name of the field the relationship was discovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    left: String,
    right: String,
    cardinality: Cardinality,
    label: String,
}

impl Relationship {
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        cardinality: Cardinality,
        label: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            cardinality,
            label: label.into(),
        }
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
