//! Export dispositions attached to detection-method terms

use std::fmt;

/// Whether evidence using a given detection method may be republished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportDisposition {
    /// Always exportable
    Export,

    /// Never exportable
    DoNotExport,

    /// Exportable once at least `n` distinct interactions use the method
    ConditionalExport(u32),
}

impl ExportDisposition {
    /// Check the disposition against the number of distinct interactions
    /// supporting a method
    ///
    /// # Examples
    ///
    /// ```
    /// use interlink_domain::ExportDisposition;
    ///
    /// assert!(ExportDisposition::Export.permits(1));
    /// assert!(!ExportDisposition::Export.permits(0));
    /// assert!(!ExportDisposition::DoNotExport.permits(10));
    /// assert!(ExportDisposition::ConditionalExport(2).permits(2));
    /// assert!(!ExportDisposition::ConditionalExport(2).permits(1));
    /// ```
    pub fn permits(&self, distinct_interactions: usize) -> bool {
        match self {
            ExportDisposition::Export => distinct_interactions > 0,
            ExportDisposition::DoNotExport => false,
            ExportDisposition::ConditionalExport(min) => {
                distinct_interactions > 0 && distinct_interactions >= *min as usize
            }
        }
    }
}

impl fmt::Display for ExportDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportDisposition::Export => f.write_str("yes"),
            ExportDisposition::DoNotExport => f.write_str("no"),
            ExportDisposition::ConditionalExport(n) => write!(f, "{}", n),
        }
    }
}

impl std::str::FromStr for ExportDisposition {
    type Err = String;

    /// Parse annotation text: `yes`/`export`, `no`/`do-not-export`, or a
    /// minimum interaction count
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        match text.as_str() {
            "yes" | "export" => Ok(ExportDisposition::Export),
            "no" | "do-not-export" | "do_not_export" => Ok(ExportDisposition::DoNotExport),
            other => other
                .parse::<u32>()
                .map(ExportDisposition::ConditionalExport)
                .map_err(|_| format!("Invalid export disposition: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!("YES".parse::<ExportDisposition>(), Ok(ExportDisposition::Export));
        assert_eq!(" no ".parse::<ExportDisposition>(), Ok(ExportDisposition::DoNotExport));
        assert_eq!(
            "3".parse::<ExportDisposition>(),
            Ok(ExportDisposition::ConditionalExport(3))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("maybe".parse::<ExportDisposition>().is_err());
        assert!("-2".parse::<ExportDisposition>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for d in [
            ExportDisposition::Export,
            ExportDisposition::DoNotExport,
            ExportDisposition::ConditionalExport(4),
        ] {
            assert_eq!(d.to_string().parse::<ExportDisposition>(), Ok(d));
        }
    }

    #[test]
    fn test_conditional_zero_still_needs_evidence() {
        assert!(!ExportDisposition::ConditionalExport(0).permits(0));
        assert!(ExportDisposition::ConditionalExport(0).permits(1));
    }
}
