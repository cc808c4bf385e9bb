//! Scene setup features
//!
//! Each feature is a component on the scene-root node with an ordered property set
//! and a typed sub-document in the setup record.

mod background;
mod floor;
mod grid;
mod interface;
mod navigation;
mod reader;
mod slicer;
mod snapshots;
mod tape;
mod tours;
mod tween;
mod viewer;

pub use background::Background;
pub use floor::Floor;
pub use grid::Grid;
pub use interface::Interface;
pub use navigation::OrbitNavigation;
pub use reader::Reader;
pub use slicer::Slicer;
pub use snapshots::Snapshots;
pub use tape::Tape;
pub use tours::Tours;
pub use tween::{TargetProperty, TweenMachine, TweenState};
pub use viewer::Viewer;

use std::fmt;
use std::str::FromStr;

use crate::property::{PropertyError, PropertySet};

/// Names of the fixed feature table, in serialization order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureName {
    Interface,
    Reader,
    Viewer,
    Navigation,
    Background,
    Floor,
    Grid,
    Tape,
    Slicer,
    Tours,
}

impl FeatureName {
    pub const ALL: [FeatureName; 10] = [
        FeatureName::Interface,
        FeatureName::Reader,
        FeatureName::Viewer,
        FeatureName::Navigation,
        FeatureName::Background,
        FeatureName::Floor,
        FeatureName::Grid,
        FeatureName::Tape,
        FeatureName::Slicer,
        FeatureName::Tours,
    ];

    /// Key used in the setup record and in document paths
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureName::Interface => "interface",
            FeatureName::Reader => "reader",
            FeatureName::Viewer => "viewer",
            FeatureName::Navigation => "navigation",
            FeatureName::Background => "background",
            FeatureName::Floor => "floor",
            FeatureName::Grid => "grid",
            FeatureName::Tape => "tape",
            FeatureName::Slicer => "slicer",
            FeatureName::Tours => "tours",
        }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown feature '{s}'"))
    }
}

/// Capabilities shared by every feature component
pub trait Feature: fmt::Debug {
    /// Component type name; a node holds one component per type
    fn type_name(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    /// Input properties
    fn ins(&self) -> &PropertySet;

    fn ins_mut(&mut self) -> &mut PropertySet;
}

/// Typed conversion between a feature and its setup sub-document
pub trait FeatureData: Feature {
    type Data;

    /// `None` when the feature holds nothing worth persisting
    fn to_data(&self) -> Option<Self::Data>;

    fn from_data(&mut self, data: &Self::Data) -> Result<(), PropertyError>;
}
