pub mod cemgil;
pub mod continuity;
pub mod downbeat;
pub mod fmeasure;
pub mod goto;
pub mod information_gain;
pub mod pscore;

pub use cemgil::{
    CemgilConfig, aml_cemgil, aml_cemgil_with_config, cemgil, cemgil_with_config,
    cemgil_with_sigma,
};
pub use continuity::{
    ContinuityConfig, ContinuityResult, ContinuityScores, continuity, continuity_scores,
    continuity_with_config,
};
pub use downbeat::{
    DownbeatConfig, DownbeatResult, downbeat, downbeat_detailed, downbeat_with_config,
};
pub use fmeasure::{FMeasureConfig, FMeasureResult, fmeasure, fmeasure_detailed};
pub use goto::{GotoConfig, goto, goto_with_config};
pub use information_gain::{
    InformationGainConfig, InformationGainResult, beat_errors, entropy, information_gain,
    information_gain_detailed,
};
pub use pscore::{PScoreConfig, pscore, pscore_with_config, pscore_with_threshold};
