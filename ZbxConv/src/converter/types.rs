//! Types for conversion progress tracking

// ============================================================================
// Progress Types
// ============================================================================

/// Progress callback type for template conversion
pub type ConvertProgressCallback<'a> = &'a (dyn Fn(&ConvertProgress) + Sync + Send);

/// Progress information during a conversion
#[derive(Debug, Clone)]
pub struct ConvertProgress {
    /// Current conversion phase
    pub phase: ConvertPhase,
    /// Current step number (1-indexed)
    pub current: usize,
    /// Total number of steps
    pub total: usize,
    /// Detail for this step, such as the detected version
    pub detail: Option<String>,
}

impl ConvertProgress {
    #[must_use]
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            detail: Some(detail.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Phase of a conversion, in the order they are entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// Reading the envelope version
    Detecting,
    /// Version table lookup done
    SchemaResolved,
    /// Full-schema decode of the input
    Decoding,
    /// Serializing to the target format
    Encoding,
    /// Rewriting XML output into export style
    Normalizing,
    /// Conversion complete
    Complete,
}

impl ConvertPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Detecting => "Detecting version",
            Self::SchemaResolved => "Resolved schema",
            Self::Decoding => "Decoding",
            Self::Encoding => "Encoding",
            Self::Normalizing => "Normalizing",
            Self::Complete => "Complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        let halfway = ConvertProgress::new(ConvertPhase::Decoding, 2, 4);
        assert!((halfway.percentage() - 0.5).abs() < f32::EPSILON);

        let empty = ConvertProgress::new(ConvertPhase::Complete, 0, 0);
        assert!((empty.percentage() - 1.0).abs() < f32::EPSILON);
    }
}
