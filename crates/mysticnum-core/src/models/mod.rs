pub mod analysis;
pub mod birth;
pub mod calculation;
pub mod derived;
pub mod digits;
pub mod export_document;
pub mod flags;
pub mod interpretation;
pub mod library;
pub mod matrix;
pub mod practice;
pub mod settings;
pub mod vibration;

pub use analysis::AnalysisResult;
pub use birth::{BirthRecord, Gender, UnknownGender};
pub use calculation::{Backup, CalculationRecord, StoredCalculation, UsageStats};
pub use derived::DerivedNumbers;
pub use digits::DigitSequence;
pub use export_document::ExportDocument;
pub use flags::{ProgramFlag, ProgramKind, WarningFlag, WarningLevel};
pub use interpretation::{DigitInterpretation, Interpretation};
pub use library::{KnowledgeSection, KnowledgeStats, LibraryHit};
pub use matrix::FrequencyMatrix;
pub use practice::{Practice, PracticeHistoryEntry, PracticeStatus};
pub use settings::Settings;
pub use vibration::VibrationReading;
