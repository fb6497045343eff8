mod assembly;
mod flash;

pub use assembly::{AssemblySequence, AssemblyTask};
pub use flash::FlashMap;
