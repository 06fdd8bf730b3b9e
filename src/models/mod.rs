pub mod barcode;
pub mod config;
pub mod error;
pub mod state;

pub use barcode::{DecodedCandidate, Symbology, ValidatedBarcode};
pub use config::{Facing, ScannerConfig, Theme};
pub use error::{AudioError, CaptureError, ScanError};
pub use state::{FailureKind, ScanState};
