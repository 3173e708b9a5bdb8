use std::path::{Path, PathBuf};

const DEFAULT_THRESHOLD: u32 = 2;

/// Distance reported by a subdirectory that can never match.
pub const UNREACHABLE_DISTANCE: u32 = u32::MAX;

/// The `Type` key of an icon subdirectory section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizingType {
    Fixed,
    Scalable,
    #[default]
    Threshold,
    Invalid,
}

impl SizingType {
    /// An empty value means the XDG default (`Threshold`); any other value
    /// outside the three known names is `Invalid`.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "Threshold" => SizingType::Threshold,
            "Fixed" => SizingType::Fixed,
            "Scalable" => SizingType::Scalable,
            _ => SizingType::Invalid,
        }
    }
}

/// The matching policy of a subdirectory, carrying only the bounds it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    Fixed { size: u32 },
    Scalable { min: u32, max: u32 },
    Threshold { size: u32, threshold: u32 },
    Invalid,
}

impl Sizing {
    pub fn matches(self, required: u32) -> bool {
        match self {
            Sizing::Fixed { size } => required == size,
            Sizing::Scalable { min, max } => (min..=max).contains(&required),
            Sizing::Threshold { size, threshold } => {
                (size.saturating_sub(threshold)..=size.saturating_add(threshold))
                    .contains(&required)
            }
            Sizing::Invalid => false,
        }
    }

    pub fn distance(self, required: u32) -> u32 {
        match self {
            Sizing::Fixed { size } => required.abs_diff(size),
            Sizing::Scalable { min, max } => outside_band(required, min, max),
            Sizing::Threshold { size, threshold } => outside_band(
                required,
                size.saturating_sub(threshold),
                size.saturating_add(threshold),
            ),
            Sizing::Invalid => UNREACHABLE_DISTANCE,
        }
    }
}

fn outside_band(required: u32, low: u32, high: u32) -> u32 {
    if required < low {
        low - required
    } else if required > high {
        required - high
    } else {
        0
    }
}

/// One sized bucket of icons inside a theme, e.g. `48x48/apps`.
///
/// Built from an `index.theme` section and never mutated afterwards; a file
/// found inside it is attached with [`IconSubdirectory::with_location`],
/// which returns a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSubdirectory {
    name: String,
    sizing_type: SizingType,
    size: u32,
    min_size: Option<u32>,
    max_size: Option<u32>,
    threshold: Option<u32>,
    location: Option<PathBuf>,
}

impl IconSubdirectory {
    /// A `Threshold` subdirectory of nominal `size`. A size that is not a
    /// number reads as 0.
    pub fn new(name: impl Into<String>, size: &str) -> Self {
        Self {
            name: name.into(),
            sizing_type: SizingType::default(),
            size: parse_size(size).unwrap_or(0),
            min_size: None,
            max_size: None,
            threshold: None,
            location: None,
        }
    }

    pub fn with_type(mut self, value: &str) -> Self {
        self.sizing_type = SizingType::parse(value);
        self
    }

    /// Empty or non-numeric values fall back to the nominal size.
    pub fn with_max_size(mut self, value: &str) -> Self {
        self.max_size = parse_size(value);
        self
    }

    /// Empty or non-numeric values fall back to the nominal size.
    pub fn with_min_size(mut self, value: &str) -> Self {
        self.min_size = parse_size(value);
        self
    }

    /// Empty or non-numeric values fall back to 2.
    pub fn with_threshold(mut self, value: &str) -> Self {
        self.threshold = parse_size(value);
        self
    }

    /// Copy of this subdirectory that remembers a file found inside it.
    pub fn with_location(&self, path: impl Into<PathBuf>) -> Self {
        Self {
            location: Some(path.into()),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sizing_type(&self) -> SizingType {
        self.sizing_type
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn min_size(&self) -> u32 {
        self.min_size.unwrap_or(self.size)
    }

    pub fn max_size(&self) -> u32 {
        self.max_size.unwrap_or(self.size)
    }

    pub fn threshold(&self) -> u32 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    pub fn sizing(&self) -> Sizing {
        match self.sizing_type {
            SizingType::Fixed => Sizing::Fixed { size: self.size },
            SizingType::Scalable => Sizing::Scalable {
                min: self.min_size(),
                max: self.max_size(),
            },
            SizingType::Threshold => Sizing::Threshold {
                size: self.size,
                threshold: self.threshold(),
            },
            SizingType::Invalid => Sizing::Invalid,
        }
    }

    pub fn matches(&self, required: u32) -> bool {
        self.sizing().matches(required)
    }

    pub fn distance(&self, required: u32) -> u32 {
        self.sizing().distance(required)
    }
}

fn parse_size(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}
