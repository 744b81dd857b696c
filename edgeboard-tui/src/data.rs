//! Sample catalog data and the application error type.

use edgeboard_widgets::Record;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode catalog data: {0}")]
    Data(#[from] serde_json::Error),
}

/// Agents known to the demo controller, fed to the autocomplete.
pub fn agent_names() -> Vec<String> {
    [
        "warehouse-north",
        "warehouse-south",
        "dock-gateway",
        "rooftop-cam",
        "cold-storage-1",
        "cold-storage-2",
        "forklift-07",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Demo application catalog, the same shape the controller API returns.
pub fn sample_catalog() -> Result<Vec<Record>, AppError> {
    Ok(serde_json::from_str(SAMPLE_CATALOG)?)
}

const SAMPLE_CATALOG: &str = r#"[
  {"name": "heat-mapper", "description": "Thermal overlay service", "microservices": ["collector", "renderer"], "variables": ["INTERVAL"]},
  {"name": "freight-tracker", "description": "Fleet telemetry collector", "microservices": ["ingest"], "variables": ["FLEET_ID", "REGION"]},
  {"name": "shelf-scanner", "description": "Inventory vision pipeline", "microservices": ["camera", "classifier", "reporter"], "variables": []},
  {"name": "door-counter", "description": "Footfall analytics", "microservices": ["counter"], "variables": ["DOOR_ID"]},
  {"name": "leak-detector", "description": "Pipeline acoustic monitor", "microservices": ["listener", "alerter"], "variables": ["THRESHOLD"]},
  {"name": "crop-monitor", "description": "Field moisture sensing", "microservices": ["probe-reader"], "variables": ["FIELD", "DEPTH"]},
  {"name": "cold-chain", "description": "Refrigeration watchdog", "microservices": ["thermometer", "notifier"], "variables": ["MIN_C", "MAX_C"]},
  {"name": "gate-keeper", "description": "Badge reader bridge", "microservices": ["reader"], "variables": ["SITE"]},
  {"name": "air-quality", "description": "Particulate sampling", "microservices": ["sampler", "uploader"], "variables": []},
  {"name": "tank-level", "description": "Ultrasonic level gauge", "microservices": ["gauge"], "variables": ["TANK_ID"]},
  {"name": "belt-watch", "description": "Conveyor anomaly detection", "microservices": ["vibration", "model"], "variables": ["LINE"]},
  {"name": "yard-lights", "description": "Lighting schedule controller", "microservices": ["scheduler"], "variables": ["LAT", "LON"]}
]"#;
