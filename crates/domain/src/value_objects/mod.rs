pub mod email;
pub mod roi_result;
pub mod scenario_input;
pub mod scenario_name;

pub use email::EmailAddress;
pub use roi_result::{HiddenBenefits, RoiResult, RoiSummary, YearRecord};
pub use scenario_input::{
    MAX_AMOUNT, MAX_AMOUNT_SCALE, MAX_TIME_PERIOD, MIN_TIME_PERIOD, RawScenarioInput,
    ScenarioInput,
};
pub use scenario_name::ScenarioName;
