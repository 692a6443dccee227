//! Named numeric columns that templates can be sorted by.

use serde::{Deserialize, Serialize};

use super::Template;
use crate::error::{Error, Result};

/// A numeric template column addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Primary mass.
    Mass1,
    /// Secondary mass.
    Mass2,
    /// Total mass, `mass1 + mass2`.
    Mtotal,
    /// Chirp mass.
    Mchirp,
    /// Symmetric mass ratio.
    Eta,
    /// Effective aligned spin.
    Chi,
    /// Aligned spin of the primary.
    Spin1z,
    /// Aligned spin of the secondary.
    Spin2z,
    /// Leading-order chirp time.
    Tau0,
    /// 1.5PN chirp time.
    Tau3,
    /// Upper frequency cutoff.
    FFinal,
    /// Template duration.
    TemplateDuration,
}

impl Column {
    /// Every recognised column.
    pub const ALL: [Self; 12] = [
        Self::Mass1,
        Self::Mass2,
        Self::Mtotal,
        Self::Mchirp,
        Self::Eta,
        Self::Chi,
        Self::Spin1z,
        Self::Spin2z,
        Self::Tau0,
        Self::Tau3,
        Self::FFinal,
        Self::TemplateDuration,
    ];

    /// Column name as it appears in bank tables.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mass1 => "mass1",
            Self::Mass2 => "mass2",
            Self::Mtotal => "mtotal",
            Self::Mchirp => "mchirp",
            Self::Eta => "eta",
            Self::Chi => "chi",
            Self::Spin1z => "spin1z",
            Self::Spin2z => "spin2z",
            Self::Tau0 => "tau0",
            Self::Tau3 => "tau3",
            Self::FFinal => "f_final",
            Self::TemplateDuration => "template_duration",
        }
    }

    /// Read this column from a template.
    ///
    /// Returns `None` for optional columns the template does not carry.
    pub fn value(self, template: &Template) -> Option<f64> {
        match self {
            Self::Mass1 => Some(template.mass1),
            Self::Mass2 => Some(template.mass2),
            Self::Mtotal => Some(template.mass1 + template.mass2),
            Self::Mchirp => Some(template.mchirp),
            Self::Eta => Some(template.eta),
            Self::Chi => Some(template.chi()),
            Self::Spin1z => Some(template.spin1.z),
            Self::Spin2z => Some(template.spin2.z),
            Self::Tau0 => template.tau0,
            Self::Tau3 => template.tau3,
            Self::FFinal => template.f_final,
            Self::TemplateDuration => template.template_duration,
        }
    }

    /// Sort key for a template, treating a missing value as NaN.
    ///
    /// Banks are checked with [`Self::require`] before sorting so NaN only
    /// shows up for values that were NaN in the input.
    pub fn key(self, template: &Template) -> f64 {
        self.value(template).unwrap_or(f64::NAN)
    }

    /// Check that every template carries this column.
    pub fn require(self, templates: &[Template]) -> Result<()> {
        match templates.iter().position(|t| self.value(t).is_none()) {
            Some(row) => Err(Error::MissingColumn {
                column: self.name().to_string(),
                row,
            }),
            None => Ok(()),
        }
    }

    fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Column {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == lower)
            .ok_or_else(|| Error::UnknownColumn {
                name: s.to_string(),
                expected: Self::expected_names(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::bank::SpinVector;

    #[test]
    fn test_column_from_str() {
        assert_eq!("mchirp".parse::<Column>().ok(), Some(Column::Mchirp));
        assert_eq!("MTotal".parse::<Column>().ok(), Some(Column::Mtotal));
        assert_eq!(
            "template_duration".parse::<Column>().ok(),
            Some(Column::TemplateDuration)
        );
        assert!(matches!(
            "bogus".parse::<Column>(),
            Err(Error::UnknownColumn { .. })
        ));
    }

    #[test]
    fn test_column_name_round_trips() {
        for column in Column::ALL {
            assert_eq!(column.name().parse::<Column>().ok(), Some(column));
        }
    }

    #[test]
    fn test_column_value() {
        let mut t = Template::new(3.0, 1.0, SpinVector::aligned(0.4), SpinVector::default());
        assert_eq!(Column::Mtotal.value(&t), Some(4.0));
        assert_eq!(Column::Spin1z.value(&t), Some(0.4));
        assert_eq!(Column::Tau0.value(&t), None);
        t.tau0 = Some(12.5);
        assert_eq!(Column::Tau0.value(&t), Some(12.5));
    }

    #[test]
    fn test_require_reports_first_missing_row() {
        let mut a = Template::new(1.0, 1.0, SpinVector::default(), SpinVector::default());
        a.tau0 = Some(1.0);
        let b = Template::new(2.0, 1.0, SpinVector::default(), SpinVector::default());
        let result = Column::Tau0.require(&[a.clone(), b]);
        assert!(matches!(result, Err(Error::MissingColumn { row: 1, .. })));
        assert!(Column::Mchirp.require(&[a]).is_ok());
    }
}
