pub mod client;
pub mod config;
pub mod controller;
pub mod model;
pub mod presentation;
pub mod samples;
pub mod testing;

pub use client::{
    build_transport, AnalysisClient, AnalysisError, FailureKind, HttpAnalysisClient,
};
pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, Config,
    ConfigError, ServerConfig, TimeoutConfig,
};
pub use controller::{
    validate_input, DisplaySurface, Notification, NotifyDuration, SubmissionController,
    SubmissionState, SubmitOutcome, ValidationError, MAX_INPUT_CHARS,
};
pub use model::{
    AnalysisDetail, AnalyzeRequest, AnalyzeResponse, CallOutcome, ConsistencyInfo, HealthStatus,
    ResultModel, ResultPayload,
};
pub use presentation::{
    agreement_line, confidence_percent, emoji_for, label_for, tint_for, translation_or_default,
    ResultView, Sentiment, Tint, NO_TRANSLATION,
};
pub use samples::{sample_text, SampleKind};
