use crate::config::Settings;
use crate::error::LevelError;
use crate::gate::SeverityGate;
use crate::service::LevelControlService;
use std::sync::Arc;

/// Shared application state: the gate and the service that controls it.
pub struct AppState {
    pub gate: Arc<SeverityGate>,
    pub level_control: LevelControlService,
}

impl AppState {
    /// Arm `gate` with the configured level and wrap it in the control service.
    ///
    /// Reads the gate back once so that an unarmed gate fails startup
    /// instead of surfacing later as a 500.
    pub fn from_settings(
        settings: &Settings,
        gate: Arc<SeverityGate>,
    ) -> Result<Self, LevelError> {
        gate.initialize(settings.log_level);
        let level_control = LevelControlService::new(gate.clone());
        level_control.get_level()?;

        Ok(Self {
            gate,
            level_control,
        })
    }
}
