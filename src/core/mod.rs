//! Core-Domänentypen: Konstruktionslinie, Bemaßungs-Basis, Ordinaten-Entity, Zeichnung.

pub mod construction;
pub mod dimension;
pub mod drawing;
pub mod entity;
pub mod ordinate;

pub use construction::ConstructionLine;
pub use dimension::{DimStyle, DimensionBase, Pen};
pub use drawing::Drawing;
pub use entity::DimEntity;
pub use ordinate::{OrdinateData, OrdinateDimension};
