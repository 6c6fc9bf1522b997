//! Reading time estimates for structured content.
//!
//! A [`ContentDocument`] is walked field by field, repeater blocks included,
//! and every piece of text is converted to seconds at the configured
//! [`Settings::words_per_minute`]. The total comes back as a
//! [`DurationResult`].

pub mod aggregator;
pub mod content;
pub mod duration;
pub mod error;
pub mod settings;
pub mod word_counter;

pub use aggregator::{compute_from_blocks, compute_from_document, compute_from_value, read_time};
pub use content::{Block, ContentDocument, Field, FieldLayout, FieldValue, ReadTimeInput};
pub use duration::{DurationResult, DEFAULT_INTERVAL_FORMAT};
pub use error::{ConversionFailure, Error, Result};
pub use settings::Settings;
