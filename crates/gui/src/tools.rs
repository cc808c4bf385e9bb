//! Tool descriptions and the controls their views bind to feature properties

use crate::features::{Feature, Slicer};

/// Metadata shown in the tool bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    pub type_name: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

/// A widget bound to one property of a feature
#[derive(Debug, Clone, PartialEq)]
pub enum ToolControl {
    Checkbox {
        path: &'static str,
        label: &'static str,
    },
    Options {
        path: &'static str,
        options: &'static [&'static str],
    },
    Slider {
        path: &'static str,
        min: f64,
        max: f64,
    },
}

impl ToolControl {
    pub fn path(&self) -> &'static str {
        match self {
            ToolControl::Checkbox { path, .. }
            | ToolControl::Options { path, .. }
            | ToolControl::Slider { path, .. } => *path,
        }
    }
}

/// Slice plane tool
pub struct SliceTool;

impl SliceTool {
    pub const INFO: ToolInfo = ToolInfo {
        type_name: "SliceTool",
        text: "Slice",
        icon: "knife",
    };

    /// Controls for the active document's slicer; none without a slicer
    pub fn controls(slicer: Option<&Slicer>) -> Vec<ToolControl> {
        let Some(slicer) = slicer else {
            return Vec::new();
        };
        let ins = slicer.ins();

        let mut controls = vec![ToolControl::Checkbox {
            path: Slicer::ENABLED,
            label: "Slice Tool",
        }];
        if let Some(options) = ins.get(Slicer::AXIS).and_then(|p| p.schema().options) {
            controls.push(ToolControl::Options {
                path: Slicer::AXIS,
                options,
            });
        }
        if let Some((min, max)) = ins.get(Slicer::POSITION).and_then(|p| p.schema().range) {
            controls.push(ToolControl::Slider {
                path: Slicer::POSITION,
                min,
                max,
            });
        }
        controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_slicer_no_controls() {
        assert!(SliceTool::controls(None).is_empty());
    }

    #[test]
    fn test_slicer_controls() {
        let slicer = Slicer::new();
        let controls = SliceTool::controls(Some(&slicer));
        assert_eq!(
            controls,
            vec![
                ToolControl::Checkbox {
                    path: "Enabled",
                    label: "Slice Tool"
                },
                ToolControl::Options {
                    path: "Axis",
                    options: &["X", "Y", "Z"]
                },
                ToolControl::Slider {
                    path: "Position",
                    min: 0.0,
                    max: 1.0
                },
            ]
        );
        assert_eq!(SliceTool::INFO.icon, "knife");
    }
}
