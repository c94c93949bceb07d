//! Data types: the sensor's JSON tree and the records we persist.
//! Keep this module minimal and stable — it defines both wire formats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One node of the sensor's nested tree. The schema is not guaranteed
/// stable, so everything beyond the label is optional.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawNode {
    #[serde(rename = "Text", default)]
    pub text: String,
    #[serde(rename = "Value", default)]
    pub value: Option<f64>,
    #[serde(rename = "Children", default)]
    pub children: Vec<RawNode>,
}

/// One GPU's metrics at a reading's instant. A category the sensor did not
/// report stays absent — it is never defaulted to zero.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Device {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<f64>,
}

impl Device {
    pub fn new(name: String) -> Self {
        Self {
            name,
            temperature: None,
            fan: None,
            control: None,
            load: None,
        }
    }
}

/// One timestamped snapshot of the monitored rig. `created` is assigned by
/// the collector at extraction time, not taken from the sensor.
#[derive(Debug, Serialize, Clone)]
pub struct Reading {
    pub name: String,
    pub created: DateTime<Utc>,
    #[serde(rename = "device")]
    pub devices: Vec<Device>,
}
