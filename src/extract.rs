//! Pure extraction: nested sensor tree -> structured reading.
//!
//! One level below the root sits the rig node; its children are hardware
//! nodes; their children are metric categories. Only vendor-labeled hardware
//! nodes become `Device`s, and only the known categories are read.

use chrono::Utc;

use crate::error::CollectorError;
use crate::types::{Device, RawNode, Reading};

/// Substring that selects which tree nodes represent monitorable devices.
pub const VENDOR_MARKER: &str = "NVIDIA";

/// Metric categories we know how to read. Unrecognized labels are skipped so
/// new sensor categories don't break extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetricKind {
    Temperature,
    Fan,
    Control,
    Load,
}

impl MetricKind {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Temperatures" => Some(Self::Temperature),
            "Fans" => Some(Self::Fan),
            "Controls" => Some(Self::Control),
            "Load" => Some(Self::Load),
            _ => None,
        }
    }
}

/// Build a `Reading` from a freshly fetched tree.
///
/// Missing optional fields never fail; a tree without a rig node below the
/// root does, rather than producing a half-built reading.
pub fn extract(root: &RawNode) -> Result<Reading, CollectorError> {
    let rig = root.children.first().ok_or_else(|| {
        CollectorError::ExtractionFailed("tree has no rig node below the root".into())
    })?;

    let mut devices = Vec::new();
    for node in &rig.children {
        if !node.text.contains(VENDOR_MARKER) {
            continue;
        }
        let mut device = Device::new(node.text.clone());
        for category in &node.children {
            let Some(kind) = MetricKind::from_label(&category.text) else {
                continue;
            };
            // First child's value, or absent when the category has none.
            let value = category.children.first().and_then(|c| c.value);
            match kind {
                MetricKind::Temperature => device.temperature = value,
                MetricKind::Fan => device.fan = value,
                MetricKind::Control => device.control = value,
                MetricKind::Load => device.load = value,
            }
        }
        devices.push(device);
    }

    Ok(Reading {
        name: rig.text.clone(),
        created: Utc::now(),
        devices,
    })
}
