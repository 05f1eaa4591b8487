//! Plant-care domain model and the pure logic shared by every client surface.
//!
//! This crate owns the shapes the API sends (plants, logs, AI results), and the
//! handful of decisions the client makes on top of them. It performs no I/O, so
//! the network layer (`client`) and the terminal front end (`drplant`) can both
//! depend on it and test against it directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`models`] | Wire models: users, plants, images, logs, recommendations, care tips |
//! | [`ai_text`] | `Raw` / `Structured` union for string-or-object AI fields |
//! | [`health`] | Health badge classifier for a plant's latest analysis |
//! | [`query`] | List query identity, sort options, page window, list state |
//! | [`crop`] | Crop rectangle scaling and JPEG encoding for uploads |

pub mod ai_text;
pub mod crop;
pub mod health;
pub mod models;
pub mod query;

pub use ai_text::{AiText, CareGuide, CareTipsText, Suggestion, SuggestionText};
pub use crop::{CropError, CropRect, CroppedImage, DisplaySize, PixelRegion};
pub use health::HealthStatus;
pub use models::{CareTip, ImageRef, Log, LogType, Plant, PlantImage, PlantPage, Recommendation, User, UserPatch};
pub use query::{PageItem, PlantListQuery, PlantListState, SortField, SortOption, SortOrder, ViewMode};
