//! Configuration options for scansurf.
//!
//! Every constant of the pipeline (header size, delimiter, axial spacing, angular
//! span, degenerate-range policy, mesh density) lives here so it can be adjusted
//! from a JSON file or the command line.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Top-level options, grouped per pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Options {
    /// Scan table parsing.
    pub loader: LoaderOptions,

    /// Coordinate reconstruction.
    pub reconstruction: ReconstructionOptions,

    /// Preview and mesh output.
    pub render: RenderOptions,
}

impl Options {
    /// Reads options from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Parses options from a JSON string and validates them.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the options as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every value against its valid domain.
    pub fn validate(&self) -> Result<()> {
        self.loader.validate()?;
        self.reconstruction.validate()?;
        self.render.validate()
    }
}

/// Options for reading the delimited scan table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Number of leading lines skipped unconditionally.
    pub header_rows: usize,

    /// Field delimiter.
    pub delimiter: char,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            header_rows: 13,
            delimiter: ',',
        }
    }
}

impl LoaderOptions {
    /// Checks that the delimiter can be told apart from padding and comments.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_whitespace() || self.delimiter == '#' {
            return Err(ScanError::InvalidOption(format!(
                "delimiter {:?} is not supported",
                self.delimiter
            )));
        }
        Ok(())
    }
}

/// How the angular span is distributed over the scan rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AngularSpacing {
    /// Closed interval: first row at the start angle, last row exactly at the end angle.
    #[default]
    Closed,
    /// Half-open interval: the end angle is excluded, so a full revolution has no
    /// duplicated seam row.
    HalfOpen,
}

/// What to do when every radius sample has the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateRangePolicy {
    /// Fail with [`ScanError::DegenerateRange`].
    #[default]
    Reject,
    /// Produce an all-zero color field (a flat, uncolored render).
    Flat,
}

/// Options for the coordinate reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionOptions {
    /// Distance between consecutive axial samples.
    pub axial_spacing: f64,

    /// Angle of the first row, in degrees.
    pub angle_start: f64,

    /// Angle spanned up to, in degrees.
    pub angle_end: f64,

    /// Closed or half-open angular interval.
    pub angular_spacing: AngularSpacing,

    /// Policy for a flat radius field.
    pub degenerate_range: DegenerateRangePolicy,
}

impl Default for ReconstructionOptions {
    fn default() -> Self {
        Self {
            axial_spacing: 0.02,
            angle_start: 0.0,
            angle_end: 360.0,
            angular_spacing: AngularSpacing::Closed,
            degenerate_range: DegenerateRangePolicy::Reject,
        }
    }
}

impl ReconstructionOptions {
    /// Checks that the spacing is finite and positive and the span is finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.axial_spacing.is_finite() && self.axial_spacing > 0.0) {
            return Err(ScanError::InvalidOption(format!(
                "axial spacing must be finite and positive, got {}",
                self.axial_spacing
            )));
        }
        if !self.angle_start.is_finite() || !self.angle_end.is_finite() {
            return Err(ScanError::InvalidOption(format!(
                "angular span must be finite, got [{}, {}]",
                self.angle_start, self.angle_end
            )));
        }
        Ok(())
    }
}

/// Options for the preview image and the exported mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Color map applied to the heatmap and to the surface.
    pub colormap: String,

    /// Maximum number of angular samples kept in the mesh.
    pub max_rows: usize,

    /// Maximum number of axial samples kept in the mesh.
    pub max_cols: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            colormap: "viridis".to_string(),
            max_rows: 400,
            max_cols: 180,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.max_rows == 0 || self.max_cols == 0 {
            return Err(ScanError::InvalidOption(format!(
                "mesh sample counts must be at least 1, got {}x{}",
                self.max_rows, self.max_cols
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.loader.header_rows, 13);
        assert_eq!(options.loader.delimiter, ',');
        assert!((options.reconstruction.axial_spacing - 0.02).abs() < f64::EPSILON);
        assert_eq!(options.reconstruction.angle_start, 0.0);
        assert_eq!(options.reconstruction.angle_end, 360.0);
        assert_eq!(
            options.reconstruction.angular_spacing,
            AngularSpacing::Closed
        );
        assert_eq!(
            options.reconstruction.degenerate_range,
            DegenerateRangePolicy::Reject
        );
        assert_eq!(options.render.colormap, "viridis");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options = Options::from_json_str(
            r#"{ "reconstruction": { "axial_spacing": 0.5, "angular_spacing": "half_open" } }"#,
        )
        .unwrap();
        assert_eq!(options.reconstruction.axial_spacing, 0.5);
        assert_eq!(
            options.reconstruction.angular_spacing,
            AngularSpacing::HalfOpen
        );
        assert_eq!(options.reconstruction.angle_end, 360.0);
        assert_eq!(options.loader, LoaderOptions::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut options = Options::default();
        options.reconstruction.degenerate_range = DegenerateRangePolicy::Flat;
        options.render.colormap = "coolwarm".to_string();
        let json = options.to_json_string().unwrap();
        assert!(json.contains("\"flat\""));
        assert_eq!(Options::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_rejects_non_positive_spacing() {
        for spacing in [0.0, -0.02, f64::NAN] {
            let mut options = Options::default();
            options.reconstruction.axial_spacing = spacing;
            assert!(matches!(
                options.validate(),
                Err(ScanError::InvalidOption(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Options::from_json_str("{ not json"),
            Err(ScanError::JsonError(_))
        ));
        assert!(matches!(
            Options::from_json_str(r#"{ "loader": { "delimiter": " " } }"#),
            Err(ScanError::InvalidOption(_))
        ));
        assert!(matches!(
            Options::from_json_str(r#"{ "render": { "max_cols": 0 } }"#),
            Err(ScanError::InvalidOption(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scansurf.json");
        std::fs::write(&path, r#"{ "loader": { "header_rows": 2 } }"#).unwrap();
        let options = Options::from_json_file(&path).unwrap();
        assert_eq!(options.loader.header_rows, 2);
        assert_eq!(options.loader.delimiter, ',');
    }
}
