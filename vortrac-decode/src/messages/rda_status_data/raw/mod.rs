mod auxiliary_power_generator_state;
pub use auxiliary_power_generator_state::AuxiliaryPowerGeneratorState;

mod clutter_mitigation_decision_status;
pub use clutter_mitigation_decision_status::ClutterMitigationDecisionStatus;

mod command_acknowledgement;
pub use command_acknowledgement::CommandAcknowledgement;

mod control_authorization;
pub use control_authorization::ControlAuthorization;

mod control_status;
pub use control_status::ControlStatus;

mod operability_status;
pub use operability_status::OperabilityStatus;

mod operational_mode;
pub use operational_mode::OperationalMode;

mod performance_check_status;
pub use performance_check_status::PerformanceCheckStatus;

mod rda_status;
pub use rda_status::RDAStatus;

mod rms_control_status;
pub use rms_control_status::RMSControlStatus;

mod spot_blanking_status;
pub use spot_blanking_status::SpotBlankingStatus;

mod super_resolution_status;
pub use super_resolution_status::SuperResolutionStatus;

mod transition_power_source_status;
pub use transition_power_source_status::TransitionPowerSourceStatus;
