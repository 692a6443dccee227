//! Per-template derived fields.

use super::Approximant;
use crate::bank::Template;
use crate::physics::{imr_time, solar_to_si};

/// Fills in frequency cutoff, duration, total mass, instrument and run tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotator {
    ifo: String,
    f_low: f64,
    max_f_final: Option<f64>,
    process_id: String,
}

impl Annotator {
    /// Create an annotator.
    ///
    /// # Arguments
    ///
    /// * `ifo` - Instrument label written to every template
    /// * `f_low` - Lower frequency cutoff in Hz used for the duration
    /// * `max_f_final` - Optional ceiling on the upper frequency cutoff
    /// * `process_id` - Tag of the run producing the annotations
    pub fn new(
        ifo: impl Into<String>,
        f_low: f64,
        max_f_final: Option<f64>,
        process_id: impl Into<String>,
    ) -> Self {
        Self {
            ifo: ifo.into(),
            f_low,
            max_f_final,
            process_id: process_id.into(),
        }
    }

    /// Annotate one template for the given approximant.
    ///
    /// Masses and spins are left untouched.
    pub fn annotate(&self, template: &mut Template, approximant: Approximant) {
        let mut f_final = approximant.class().upper_frequency(template);
        if let Some(max) = self.max_f_final
            && f_final > max
        {
            f_final = max;
        }

        template.template_duration = Some(imr_time(
            self.f_low,
            solar_to_si(template.mass1),
            solar_to_si(template.mass2),
            template.spin1.magnitude(),
            template.spin2.magnitude(),
            Some(f_final),
        ));
        template.f_final = Some(f_final);
        template.mtotal = Some(template.mass1 + template.mass2);
        template.ifo = Some(self.ifo.clone());
        template.process_id = Some(self.process_id.clone());
    }

    /// Annotate every template of a sub-bank.
    pub fn annotate_all(&self, templates: &mut [Template], approximant: Approximant) {
        for template in templates {
            self.annotate(template, approximant);
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::bank::SpinVector;
    use crate::physics::isco_frequency;

    fn bbh() -> Template {
        Template::new(10.0, 10.0, SpinVector::aligned(0.3), SpinVector::default())
    }

    #[test]
    fn test_annotate_sets_all_fields() {
        let annotator = Annotator::new("H1", 30.0, None, "run-1");
        let mut t = bbh();
        annotator.annotate(&mut t, Approximant::SeobnrV4Rom);

        assert_eq!(t.mtotal, Some(20.0));
        assert_eq!(t.ifo.as_deref(), Some("H1"));
        assert_eq!(t.process_id.as_deref(), Some("run-1"));
        assert!(t.f_final.is_some_and(|f| f > 1000.0));
        assert!(t.template_duration.is_some_and(|d| d > 0.0));
    }

    #[test]
    fn test_annotate_leaves_intrinsics_alone() {
        let annotator = Annotator::new("L1", 15.0, Some(512.0), "run");
        let mut t = bbh();
        let before = t.clone();
        annotator.annotate(&mut t, Approximant::ImrPhenomD);

        assert_eq!(t.mass1, before.mass1);
        assert_eq!(t.mass2, before.mass2);
        assert_eq!(t.spin1, before.spin1);
        assert_eq!(t.spin2, before.spin2);
        assert_eq!(t.mchirp, before.mchirp);
    }

    #[test]
    fn test_max_f_final_clamps() {
        let annotator = Annotator::new("H1", 30.0, Some(1024.0), "run");
        let mut t = bbh();
        annotator.annotate(&mut t, Approximant::SeobnrV4Rom);
        assert_eq!(t.f_final, Some(1024.0));
    }

    #[test]
    fn test_max_f_final_above_cutoff_is_ignored() {
        let annotator = Annotator::new("H1", 30.0, Some(10_000.0), "run");
        let mut t = bbh();
        annotator.annotate(&mut t, Approximant::TaylorF2);
        let f = t.f_final.unwrap_or_default();
        assert!((f - isco_frequency(10.0, 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_duration_is_shorter() {
        let mut full = bbh();
        let mut clamped = bbh();
        Annotator::new("H1", 20.0, None, "run").annotate(&mut full, Approximant::SeobnrV4Rom);
        Annotator::new("H1", 20.0, Some(100.0), "run")
            .annotate(&mut clamped, Approximant::SeobnrV4Rom);
        assert!(clamped.template_duration < full.template_duration);
    }

    #[test]
    fn test_annotate_all() {
        let annotator = Annotator::new("V1", 40.0, None, "run");
        let mut templates = vec![bbh(), bbh()];
        annotator.annotate_all(&mut templates, Approximant::TaylorF2);
        assert!(templates.iter().all(|t| t.ifo.as_deref() == Some("V1")));
    }
}
