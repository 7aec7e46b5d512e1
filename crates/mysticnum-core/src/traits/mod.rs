pub mod export;
pub mod knowledge;
pub mod storage;

pub use export::IExporter;
pub use knowledge::KnowledgeSource;
pub use storage::{ICalculationStorage, IPracticeStorage};
