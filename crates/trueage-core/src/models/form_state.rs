//! Flat key-value form state.
//!
//! This is the persisted shape of an assessment form: what gets saved to
//! browser storage, exported to / imported from a JSON file, and encoded
//! into share links. Every value is the raw text of a form field; an empty
//! string means the field was left blank. Key spellings are part of the
//! stored format and must not change.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::lifestyle::{LifestyleInputs, SmokingStatus};
use super::sleep::{SleepInputs, parse_yes_no};
use super::subject::{AssessmentInput, Sex, Subject};
use crate::error::CoreError;
use crate::units::{
    CreatinineUnit, GlucoseUnit, LipidUnit, cholesterol_to_mg_dl, creatinine_to_mg_dl,
    glucose_to_mg_dl, triglycerides_to_mg_dl,
};

/// Browser storage key the form state is saved under.
pub const STORAGE_KEY: &str = "true_age_state_v2";

/// Default file name for exported form state.
pub const EXPORT_FILE_NAME: &str = "true-age-data.json";

/// Characters left unescaped in share-link values (the
/// `application/x-www-form-urlencoded` safe set).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'*');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FormState {
    pub age: String,
    pub sex: String,
    pub height: String,
    pub weight: String,
    pub waist: String,
    pub sbp: String,
    pub dbp: String,
    pub rhr: String,
    pub vo2max: String,
    pub sleep: String,
    #[serde(rename = "gluUnit")]
    pub glu_unit: String,
    #[serde(rename = "lipUnit")]
    pub lip_unit: String,
    #[serde(rename = "crUnit")]
    pub cr_unit: String,
    pub hba1c: String,
    pub fpg: String,
    pub ldl: String,
    pub hdl: String,
    pub tg: String,
    pub crp: String,
    pub cr: String,
    pub alt: String,
    pub ast: String,
    pub uric: String,
    pub ls_days: String,
    pub ls_min: String,
    pub ls_fv: String,
    pub ls_smoke: String,
    pub ls_alc: String,
    pub ls_sit: String,
    pub sl_consistency: String,
    pub sl_caf: String,
    pub sl_screen: String,
    pub sl_apnea: String,
    pub sl_quality: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            age: String::new(),
            sex: String::new(),
            height: String::new(),
            weight: String::new(),
            waist: String::new(),
            sbp: String::new(),
            dbp: String::new(),
            rhr: String::new(),
            vo2max: String::new(),
            sleep: String::new(),
            glu_unit: GlucoseUnit::MgDl.code().to_string(),
            lip_unit: LipidUnit::MgDl.code().to_string(),
            cr_unit: CreatinineUnit::MgDl.code().to_string(),
            hba1c: String::new(),
            fpg: String::new(),
            ldl: String::new(),
            hdl: String::new(),
            tg: String::new(),
            crp: String::new(),
            cr: String::new(),
            alt: String::new(),
            ast: String::new(),
            uric: String::new(),
            ls_days: String::new(),
            ls_min: String::new(),
            ls_fv: String::new(),
            ls_smoke: String::new(),
            ls_alc: String::new(),
            ls_sit: String::new(),
            sl_consistency: String::new(),
            sl_caf: String::new(),
            sl_screen: String::new(),
            sl_apnea: String::new(),
            sl_quality: String::new(),
        }
    }
}

/// A form field whose text could not be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldIssue {
    pub field: String,
    pub value: String,
    pub message: String,
}

/// Result of reading a [`FormState`]: the scorer input plus any fields
/// that were ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParsedForm {
    pub input: AssessmentInput,
    pub issues: Vec<FieldIssue>,
}

impl FormState {
    /// The built-in example subject.
    pub fn demo() -> Self {
        let s = |v: &str| v.to_string();
        Self {
            age: s("35"),
            sex: s("male"),
            height: s("175"),
            weight: s("72"),
            waist: s("82"),
            sbp: s("114"),
            dbp: s("72"),
            rhr: s("58"),
            vo2max: s("44"),
            sleep: s("7.3"),
            hba1c: s("5.2"),
            fpg: s("88"),
            ldl: s("85"),
            hdl: s("60"),
            tg: s("90"),
            crp: s("0.7"),
            cr: s("0.95"),
            alt: s("22"),
            ast: s("21"),
            uric: s("5.2"),
            ls_days: s("4"),
            ls_min: s("40"),
            ls_fv: s("4"),
            ls_smoke: s("none"),
            ls_alc: s("2"),
            ls_sit: s("7"),
            sl_consistency: s("5"),
            sl_caf: s("no"),
            sl_screen: s("no"),
            sl_apnea: s("no"),
            sl_quality: s("4"),
            ..Self::default()
        }
    }

    /// Every field paired with its stored key, in form order.
    pub fn entries(&self) -> [(&'static str, &str); 34] {
        [
            ("age", &self.age),
            ("sex", &self.sex),
            ("height", &self.height),
            ("weight", &self.weight),
            ("waist", &self.waist),
            ("sbp", &self.sbp),
            ("dbp", &self.dbp),
            ("rhr", &self.rhr),
            ("vo2max", &self.vo2max),
            ("sleep", &self.sleep),
            ("gluUnit", &self.glu_unit),
            ("lipUnit", &self.lip_unit),
            ("crUnit", &self.cr_unit),
            ("hba1c", &self.hba1c),
            ("fpg", &self.fpg),
            ("ldl", &self.ldl),
            ("hdl", &self.hdl),
            ("tg", &self.tg),
            ("crp", &self.crp),
            ("cr", &self.cr),
            ("alt", &self.alt),
            ("ast", &self.ast),
            ("uric", &self.uric),
            ("ls_days", &self.ls_days),
            ("ls_min", &self.ls_min),
            ("ls_fv", &self.ls_fv),
            ("ls_smoke", &self.ls_smoke),
            ("ls_alc", &self.ls_alc),
            ("ls_sit", &self.ls_sit),
            ("sl_consistency", &self.sl_consistency),
            ("sl_caf", &self.sl_caf),
            ("sl_screen", &self.sl_screen),
            ("sl_apnea", &self.sl_apnea),
            ("sl_quality", &self.sl_quality),
        ]
        .map(|(k, v)| (k, v.as_str()))
    }

    /// Build from an arbitrary JSON value. Numbers and booleans are
    /// accepted in place of strings, `null` means blank, unknown keys are
    /// ignored.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        let serde_json::Value::Object(map) = value else {
            return Err(CoreError::NotAnObject);
        };

        let normalized: serde_json::Map<String, serde_json::Value> = map
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    serde_json::Value::Null => return None,
                    // Nested values were never part of the stored shape.
                    serde_json::Value::Array(_) | serde_json::Value::Object(_) => return None,
                };
                Some((key, serde_json::Value::String(text)))
            })
            .collect();

        let state: FormState = serde_json::from_value(serde_json::Value::Object(normalized))?;
        Ok(state.with_unit_defaults())
    }

    /// Parse an exported / saved JSON document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Pretty JSON for file export.
    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a share-link query string (with or without the leading `?`).
    pub fn from_query(query: &str) -> Result<Self, CoreError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let map: serde_json::Map<String, serde_json::Value> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), serde_json::Value::String(decode_component(value)))
            })
            .collect();
        Self::from_value(serde_json::Value::Object(map))
    }

    /// Encode as a share-link query string. Blank fields are omitted.
    pub fn to_query(&self) -> String {
        self.entries()
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Blank unit selectors mean the canonical unit.
    fn with_unit_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.glu_unit.trim().is_empty() {
            self.glu_unit = defaults.glu_unit;
        }
        if self.lip_unit.trim().is_empty() {
            self.lip_unit = defaults.lip_unit;
        }
        if self.cr_unit.trim().is_empty() {
            self.cr_unit = defaults.cr_unit;
        }
        self
    }

    /// Read the form into scorer input, normalizing lab units.
    ///
    /// Reading never fails: text that cannot be used leaves the field
    /// missing and is reported in [`ParsedForm::issues`].
    pub fn to_input(&self) -> ParsedForm {
        let mut reader = FieldReader::default();

        let glu_unit: GlucoseUnit = self.glu_unit.parse().unwrap_or_default();
        let lip_unit: LipidUnit = self.lip_unit.parse().unwrap_or_default();
        let cr_unit: CreatinineUnit = self.cr_unit.parse().unwrap_or_default();
        reader.unit("gluUnit", &self.glu_unit, glu_unit.code());
        reader.unit("lipUnit", &self.lip_unit, lip_unit.code());
        reader.unit("crUnit", &self.cr_unit, cr_unit.code());

        let subject = Subject {
            age: reader.number("age", &self.age),
            sex: reader.choice("sex", &self.sex, Sex::parse_form),
            height_cm: reader.number("height", &self.height),
            weight_kg: reader.number("weight", &self.weight),
            waist_cm: reader.number("waist", &self.waist),
            systolic_bp: reader.number("sbp", &self.sbp),
            diastolic_bp: reader.number("dbp", &self.dbp),
            resting_hr: reader.number("rhr", &self.rhr),
            vo2max: reader.number("vo2max", &self.vo2max),
            sleep_hours: reader.number("sleep", &self.sleep),
            hba1c: reader.number("hba1c", &self.hba1c),
            fasting_glucose: reader
                .number("fpg", &self.fpg)
                .and_then(|v| glucose_to_mg_dl(v, glu_unit)),
            ldl: reader
                .number("ldl", &self.ldl)
                .and_then(|v| cholesterol_to_mg_dl(v, lip_unit)),
            hdl: reader
                .number("hdl", &self.hdl)
                .and_then(|v| cholesterol_to_mg_dl(v, lip_unit)),
            triglycerides: reader
                .number("tg", &self.tg)
                .and_then(|v| triglycerides_to_mg_dl(v, lip_unit)),
            hs_crp: reader.number("crp", &self.crp),
            creatinine: reader
                .number("cr", &self.cr)
                .and_then(|v| creatinine_to_mg_dl(v, cr_unit)),
            alt: reader.number("alt", &self.alt),
            ast: reader.number("ast", &self.ast),
            uric_acid: reader.number("uric", &self.uric),
        };

        let lifestyle = LifestyleInputs {
            active_days: reader.number("ls_days", &self.ls_days),
            minutes_per_session: reader.number("ls_min", &self.ls_min),
            fruit_veg_servings: reader.number("ls_fv", &self.ls_fv),
            smoking: reader.choice("ls_smoke", &self.ls_smoke, |s| s.parse::<SmokingStatus>().ok()),
            alcohol_units: reader.number("ls_alc", &self.ls_alc),
            sitting_hours: reader.number("ls_sit", &self.ls_sit),
        };

        let sleep = SleepInputs {
            regular_days: reader.number("sl_consistency", &self.sl_consistency),
            late_caffeine: reader.choice("sl_caf", &self.sl_caf, parse_yes_no),
            screens_before_bed: reader.choice("sl_screen", &self.sl_screen, parse_yes_no),
            apnea_risk: reader.choice("sl_apnea", &self.sl_apnea, parse_yes_no),
            quality: reader.number("sl_quality", &self.sl_quality),
        };

        ParsedForm {
            input: AssessmentInput {
                subject,
                lifestyle,
                sleep,
            },
            issues: reader.issues,
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[derive(Default)]
struct FieldReader {
    issues: Vec<FieldIssue>,
}

impl FieldReader {
    fn reject(&mut self, field: &str, raw: &str, message: &str) {
        self.issues.push(FieldIssue {
            field: field.to_string(),
            value: raw.to_string(),
            message: message.to_string(),
        });
    }

    fn number(&mut self, field: &str, raw: &str) -> Option<f64> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                self.reject(field, raw, "not a finite number");
                None
            }
        }
    }

    fn choice<T>(&mut self, field: &str, raw: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        if raw.trim().is_empty() {
            return None;
        }
        let parsed = parse(raw);
        if parsed.is_none() {
            self.reject(field, raw, "unrecognized option");
        }
        parsed
    }

    /// Unit codes never fail to parse; an unknown code is read as mg/dL
    /// and reported.
    fn unit(&mut self, field: &str, raw: &str, resolved_code: &str) {
        let text = raw.trim();
        if !text.is_empty() && text != resolved_code {
            self.reject(field, raw, "unknown unit, using mg/dL");
        }
    }
}
