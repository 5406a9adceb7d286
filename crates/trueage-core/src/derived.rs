//! Metrics computed from other measurements rather than entered directly.

use crate::models::subject::Sex;

/// Body mass index, kg/m².
///
/// `None` when either input is non-finite, height is not positive, or the
/// result overflows.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !height_cm.is_finite() || !weight_kg.is_finite() {
        return None;
    }
    let h = height_cm / 100.0;
    if h <= 0.0 {
        return None;
    }
    Some(weight_kg / (h * h)).filter(|v| v.is_finite())
}

/// Waist circumference divided by height (both cm).
pub fn waist_to_height(height_cm: f64, waist_cm: f64) -> Option<f64> {
    if !height_cm.is_finite() || !waist_cm.is_finite() || height_cm <= 0.0 {
        return None;
    }
    Some(waist_cm / height_cm).filter(|v| v.is_finite())
}

/// Estimated glomerular filtration rate (mL/min/1.73m²) from the
/// race-free CKD-EPI 2021 creatinine equation.
///
/// Requires a finite age, a known sex, and a positive creatinine in mg/dL.
/// A creatinine of exactly zero counts as not measured. Extreme ages can push
/// the result out of range, which also yields `None`.
pub fn egfr_ckd_epi_2021(age: f64, sex: Option<Sex>, creatinine_mg_dl: f64) -> Option<f64> {
    let sex = sex?;
    if !age.is_finite() || !creatinine_mg_dl.is_finite() || creatinine_mg_dl <= 0.0 {
        return None;
    }

    let (kappa, alpha, sex_coef) = match sex {
        Sex::Female => (0.7, -0.241, 1.012),
        Sex::Male => (0.9, -0.302, 1.0),
    };
    let ratio = creatinine_mg_dl / kappa;
    let min_part = ratio.min(1.0);
    let max_part = ratio.max(1.0);

    Some(
        142.0
            * min_part.powf(alpha)
            * max_part.powf(-1.200)
            * 0.9938_f64.powf(age)
            * sex_coef,
    )
    .filter(|v| v.is_finite())
}
