//! Presentation-side helpers: formatting, export and advice

pub mod advisory;
pub mod export;
pub mod format;

pub use advisory::{
    advise, advise_from_env, AdviceProvider, CommandAdviceProvider, DEFAULT_ADVISOR_TIMEOUT, FALLBACK_ADVICE,
};
pub use export::{export_json, export_monthly_csv, export_yearly_csv, write_monthly_csv, write_yearly_csv};
pub use format::{format_currency, format_months, format_percent};
